//! Press admin rules
//!
//! A press admin's reach is the press of their grant. Publications are
//! matched through their press scope (the monograph's `press` subdomain, or
//! the parent monograph's for sections and file sets); who created them does
//! not matter.

use crate::ability::{grants_any, AbilityRule};
use crate::target::Target;
use press_types::{Action, Principal, RoleKind};

/// Actions a press admin has on publications of their press
const PUBLICATION_ACTIONS: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Destroy];

/// Press admins manage their press, its sub-brands, its role records and
/// its publications. Publishing is not included.
#[derive(Debug, Default)]
pub struct PressAdminRule;

impl AbilityRule for PressAdminRule {
    fn id(&self) -> &str {
        "press-admin"
    }

    fn name(&self) -> &str {
        "Press Admin"
    }

    fn permits(&self, principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        let grants = &principal.grants;
        match target {
            Target::Press(press) => {
                grants_any(action, &[Action::Read, Action::Update])
                    && grants.holds(&press.id, RoleKind::Admin)
            }
            Target::SubBrand(sub_brand) => grants.holds(&sub_brand.press_id, RoleKind::Admin),
            Target::Role(role) => {
                grants_any(action, &[Action::Read, Action::Update, Action::Destroy])
                    && role
                        .resource
                        .as_ref()
                        .is_some_and(|press_id| grants.holds(press_id, RoleKind::Admin))
            }
            _ if target.is_publication() => {
                grants_any(action, &PUBLICATION_ACTIONS)
                    && target
                        .press_scope()
                        .is_some_and(|subdomain| grants.holds_on_subdomain(subdomain, RoleKind::Admin))
            }
            _ => false,
        }
    }

    fn description(&self) -> &str {
        "Press admins manage resources scoped to their press"
    }
}

/// Opt-in: press admins may publish monographs of their press
#[derive(Debug, Default)]
pub struct PressAdminPublishRule;

impl AbilityRule for PressAdminPublishRule {
    fn id(&self) -> &str {
        "press-admin-publish"
    }

    fn name(&self) -> &str {
        "Press Admin Publish"
    }

    fn permits(&self, principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        match target {
            Target::Monograph(monograph) => {
                action == Action::Publish
                    && principal
                        .grants
                        .holds_on_subdomain(&monograph.press, RoleKind::Admin)
            }
            _ => false,
        }
    }

    fn description(&self) -> &str {
        "Press admins publish monographs of their press"
    }
}
