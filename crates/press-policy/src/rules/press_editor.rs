//! Press editor rule

use crate::ability::AbilityRule;
use crate::target::Target;
use press_types::{Action, Principal, RoleKind};

/// Editors read publications scoped to their press and nothing more
#[derive(Debug, Default)]
pub struct PressEditorRule;

impl AbilityRule for PressEditorRule {
    fn id(&self) -> &str {
        "press-editor"
    }

    fn name(&self) -> &str {
        "Press Editor"
    }

    fn permits(&self, principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        action == Action::Read
            && target.is_publication()
            && target
                .press_scope()
                .is_some_and(|subdomain| principal.grants.holds_on_subdomain(subdomain, RoleKind::Editor))
    }

    fn description(&self) -> &str {
        "Press editors read publications of their press"
    }
}
