//! Platform admin rule

use crate::ability::AbilityRule;
use crate::target::Target;
use press_types::{Action, Principal};

/// Platform admins may manage every target, independent of press or owner
#[derive(Debug, Default)]
pub struct PlatformAdminRule;

impl AbilityRule for PlatformAdminRule {
    fn id(&self) -> &str {
        "platform-admin"
    }

    fn name(&self) -> &str {
        "Platform Admin"
    }

    fn permits(&self, principal: &Principal, _action: Action, _target: &Target<'_>) -> bool {
        principal.is_platform_admin()
    }

    fn description(&self) -> &str {
        "Platform admins manage everything, including the job dashboard"
    }
}
