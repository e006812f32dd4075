//! Registry error types

use press_types::{PrincipalId, ResourceId, ResourceKind};
use thiserror::Error;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: ResourceId },

    #[error("Principal not found: {0}")]
    PrincipalNotFound(PrincipalId),

    #[error("Press not found: {0}")]
    PressNotFound(String),

    #[error("Subdomain already taken: {0}")]
    SubdomainTaken(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Lock error")]
    Lock,
}

impl RegistryError {
    pub fn not_found(kind: ResourceKind, id: &ResourceId) -> Self {
        Self::NotFound {
            kind,
            id: id.clone(),
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
