//! Public read rule

use crate::ability::AbilityRule;
use crate::target::Target;
use press_types::{Action, Principal};

/// Anyone may read a publication whose visibility is public
#[derive(Debug, Default)]
pub struct PublicReadRule;

impl AbilityRule for PublicReadRule {
    fn id(&self) -> &str {
        "public-read"
    }

    fn name(&self) -> &str {
        "Public Read"
    }

    fn permits(&self, _principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        action == Action::Read && target.visibility().is_some_and(|v| v.is_public())
    }

    fn description(&self) -> &str {
        "Public monographs, sections and file sets are readable by everyone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_types::{FileSet, Monograph, Visibility};

    #[test]
    fn test_visibility_decides() {
        let rule = PublicReadRule;
        let anon = Principal::anonymous();
        let public = Monograph::new("umich").with_visibility(Visibility::Public);
        let private = Monograph::new("umich");
        let file_set = FileSet::new().with_visibility(Visibility::Public);

        assert!(rule.permits(&anon, Action::Read, &Target::Monograph(&public)));
        assert!(!rule.permits(&anon, Action::Read, &Target::Monograph(&private)));
        assert!(!rule.permits(&anon, Action::Update, &Target::Monograph(&public)));
        assert!(rule.permits(&anon, Action::Read, &Target::file_set(&file_set)));
    }
}
