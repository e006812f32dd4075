//! Textual references to check targets
//!
//! `presses`, `job_dashboard`, `press:<subdomain>` or `<kind>:<id>` where
//! kind is one of `sub_brand`, `role`, `monograph`, `section`, `file_set`.

use crate::error::HubError;
use press_types::{ResourceId, ResourceKind};
use std::str::FromStr;

/// Reference to a check target, resolved against the registry by the hub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    Presses,
    JobDashboard,
    Press(String),
    Resource { kind: ResourceKind, id: ResourceId },
}

impl FromStr for TargetRef {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "presses" => return Ok(TargetRef::Presses),
            "job_dashboard" | "jobs" => return Ok(TargetRef::JobDashboard),
            _ => {}
        }

        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| HubError::InvalidTarget(format!("expected <kind>:<id>, got {}", s)))?;
        if id.is_empty() {
            return Err(HubError::InvalidTarget(format!("missing id in {}", s)));
        }

        match kind.parse::<ResourceKind>()? {
            ResourceKind::Press => Ok(TargetRef::Press(id.to_string())),
            kind => Ok(TargetRef::Resource {
                kind,
                id: ResourceId::new(id),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_collections() {
        assert_eq!("presses".parse::<TargetRef>().unwrap(), TargetRef::Presses);
        assert_eq!("jobs".parse::<TargetRef>().unwrap(), TargetRef::JobDashboard);
    }

    #[test]
    fn test_parses_resources() {
        assert_eq!(
            "press:umich".parse::<TargetRef>().unwrap(),
            TargetRef::Press("umich".into())
        );
        assert_eq!(
            "file-set:f1".parse::<TargetRef>().unwrap(),
            TargetRef::Resource {
                kind: ResourceKind::FileSet,
                id: ResourceId::new("f1"),
            }
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!("monograph".parse::<TargetRef>(), Err(HubError::InvalidTarget(_))));
        assert!(matches!("monograph:".parse::<TargetRef>(), Err(HubError::InvalidTarget(_))));
        assert!(matches!("widget:1".parse::<TargetRef>(), Err(HubError::Parse(_))));
    }
}
