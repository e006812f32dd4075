//! Principal and press directories

use crate::error::Result;
use press_types::{Press, PressId, Principal, PrincipalId};

/// Source of principals and their grants
pub trait PrincipalDirectory: Send + Sync {
    /// Load a principal with every grant it holds.
    ///
    /// Called once per request; the returned principal is threaded through
    /// every check of that request.
    fn load_principal(&self, id: &PrincipalId) -> Result<Principal>;

    /// Load a principal, or the anonymous principal when `id` is `None`
    fn load_or_anonymous(&self, id: Option<&PrincipalId>) -> Result<Principal> {
        match id {
            Some(id) => self.load_principal(id),
            None => Ok(Principal::anonymous()),
        }
    }
}

/// Source of presses
pub trait PressDirectory: Send + Sync {
    fn press(&self, id: &PressId) -> Result<Press>;

    /// Resolve a press by its unique subdomain
    fn press_by_subdomain(&self, subdomain: &str) -> Result<Press>;

    fn list_presses(&self) -> Result<Vec<Press>>;
}
