//! Actions a principal may request

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An action requested against a resource
///
/// `Manage` stands for every action at once: a rule that grants `Manage`
/// satisfies any request, while a request for `Manage` is satisfied only by
/// a rule that grants `Manage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Index,
    Read,
    Create,
    Update,
    Destroy,
    Publish,
    Manage,
}

impl Action {
    /// Every action, `Manage` last
    pub const ALL: [Action; 7] = [
        Action::Index,
        Action::Read,
        Action::Create,
        Action::Update,
        Action::Destroy,
        Action::Publish,
        Action::Manage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Destroy => "destroy",
            Action::Publish => "publish",
            Action::Manage => "manage",
        }
    }

    /// Whether an action granted by a rule covers this requested action
    pub fn is_covered_by(&self, granted: Action) -> bool {
        granted == Action::Manage || granted == *self
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" => Ok(Action::Index),
            "read" | "show" => Ok(Action::Read),
            "create" | "new" => Ok(Action::Create),
            "update" | "edit" => Ok(Action::Update),
            "destroy" | "delete" => Ok(Action::Destroy),
            "publish" => Ok(Action::Publish),
            "manage" => Ok(Action::Manage),
            other => Err(TypesError::UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manage_covers_everything() {
        for action in Action::ALL {
            assert!(action.is_covered_by(Action::Manage));
        }
    }

    #[test]
    fn manage_is_only_covered_by_manage() {
        for action in Action::ALL {
            assert_eq!(Action::Manage.is_covered_by(action), action == Action::Manage);
        }
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("show".parse::<Action>().unwrap(), Action::Read);
        assert_eq!("Delete".parse::<Action>().unwrap(), Action::Destroy);
        assert!(matches!(
            "frobnicate".parse::<Action>(),
            Err(TypesError::UnknownAction(_))
        ));
    }
}
