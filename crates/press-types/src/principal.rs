//! Principals and their press-scoped grants
//!
//! Grants are loaded once per request into a [`GrantSet`], an arena of grant
//! records indexed by press id and by press subdomain, so that policy checks
//! never go back to the principal directory.

use crate::error::TypesError;
use crate::ids::{PressId, PrincipalId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Kind of role a grant confers on its press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Admin,
    Editor,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Admin => "admin",
            RoleKind::Editor => "editor",
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(RoleKind::Admin),
            "editor" => Ok(RoleKind::Editor),
            other => Err(TypesError::UnknownRoleKind(other.to_string())),
        }
    }
}

/// A role held on exactly one press
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    /// Press the grant is scoped to
    pub press_id: PressId,

    /// Subdomain of that press, denormalized for monograph scoping
    pub subdomain: String,

    /// Role conferred
    pub kind: RoleKind,
}

impl Grant {
    pub fn new(press_id: PressId, subdomain: impl Into<String>, kind: RoleKind) -> Self {
        Self {
            press_id,
            subdomain: subdomain.into(),
            kind,
        }
    }
}

/// Grants of one principal, indexed by press
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Grant>", into = "Vec<Grant>")]
pub struct GrantSet {
    grants: Vec<Grant>,
    by_press: HashMap<PressId, Vec<usize>>,
    by_subdomain: HashMap<String, Vec<usize>>,
}

impl GrantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a grant; adding the same grant twice keeps one copy
    pub fn insert(&mut self, grant: Grant) {
        if self.grants.contains(&grant) {
            return;
        }
        let index = self.grants.len();
        self.by_press
            .entry(grant.press_id.clone())
            .or_default()
            .push(index);
        self.by_subdomain
            .entry(grant.subdomain.clone())
            .or_default()
            .push(index);
        self.grants.push(grant);
    }

    /// Whether a role of `kind` is held on the press with this id
    pub fn holds(&self, press_id: &PressId, kind: RoleKind) -> bool {
        self.by_press
            .get(press_id)
            .is_some_and(|indexes| indexes.iter().any(|&i| self.grants[i].kind == kind))
    }

    /// Whether a role of `kind` is held on the press with this subdomain
    pub fn holds_on_subdomain(&self, subdomain: &str, kind: RoleKind) -> bool {
        self.by_subdomain
            .get(subdomain)
            .is_some_and(|indexes| indexes.iter().any(|&i| self.grants[i].kind == kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grant> {
        self.grants.iter()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

impl From<Vec<Grant>> for GrantSet {
    fn from(grants: Vec<Grant>) -> Self {
        let mut set = GrantSet::new();
        for grant in grants {
            set.insert(grant);
        }
        set
    }
}

impl From<GrantSet> for Vec<Grant> {
    fn from(set: GrantSet) -> Self {
        set.grants
    }
}

impl FromIterator<Grant> for GrantSet {
    fn from_iter<I: IntoIterator<Item = Grant>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// The acting identity of a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// `None` for the anonymous principal
    pub id: Option<PrincipalId>,

    /// Global flag; never expressed as a grant
    #[serde(default)]
    pub platform_admin: bool,

    #[serde(default)]
    pub grants: GrantSet,
}

impl Principal {
    /// The anonymous principal: no grants, not a platform admin
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A registered user with no grants
    pub fn user(id: PrincipalId) -> Self {
        Self {
            id: Some(id),
            platform_admin: false,
            grants: GrantSet::new(),
        }
    }

    /// A registered platform admin
    pub fn platform_admin(id: PrincipalId) -> Self {
        Self {
            id: Some(id),
            platform_admin: true,
            grants: GrantSet::new(),
        }
    }

    /// Add a grant
    pub fn with_grant(mut self, grant: Grant) -> Self {
        self.grants.insert(grant);
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_platform_admin(&self) -> bool {
        self.platform_admin
    }

    /// Label for logs and audit cards
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => "anonymous".to_string(),
        }
    }
}
