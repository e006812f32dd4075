//! Press catalog rule
//!
//! Presses are always listable and readable, and so are their sub-brands.

use crate::ability::{grants_any, AbilityRule};
use crate::target::Target;
use press_types::{Action, Principal};

#[derive(Debug, Default)]
pub struct PressCatalogRule;

impl AbilityRule for PressCatalogRule {
    fn id(&self) -> &str {
        "press-catalog"
    }

    fn name(&self) -> &str {
        "Press Catalog"
    }

    fn permits(&self, _principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        match target {
            Target::Presses | Target::Press(_) => grants_any(action, &[Action::Index, Action::Read]),
            Target::SubBrand(_) => grants_any(action, &[Action::Read]),
            _ => false,
        }
    }

    fn description(&self) -> &str {
        "Everyone may list and read presses and sub-brands"
    }
}
