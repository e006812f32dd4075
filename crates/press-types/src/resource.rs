//! Publishing resources: presses, sub-brands, role records, monographs and
//! their members

use crate::error::TypesError;
use crate::ids::{PressId, PrincipalId, ResourceId};
use crate::principal::RoleKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Who may see a resource without holding a grant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" | "open" => Ok(Visibility::Public),
            "private" | "restricted" => Ok(Visibility::Private),
            other => Err(TypesError::UnknownVisibility(other.to_string())),
        }
    }
}

/// Kind tag used by lookups and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Press,
    SubBrand,
    Role,
    Monograph,
    Section,
    FileSet,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Press => "press",
            ResourceKind::SubBrand => "sub_brand",
            ResourceKind::Role => "role",
            ResourceKind::Monograph => "monograph",
            ResourceKind::Section => "section",
            ResourceKind::FileSet => "file_set",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "press" => Ok(ResourceKind::Press),
            "sub_brand" => Ok(ResourceKind::SubBrand),
            "role" => Ok(ResourceKind::Role),
            "monograph" => Ok(ResourceKind::Monograph),
            "section" => Ok(ResourceKind::Section),
            "file_set" => Ok(ResourceKind::FileSet),
            other => Err(TypesError::UnknownResourceKind(other.to_string())),
        }
    }
}

/// A tenant of the hub. Presses are always publicly listable and readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Press {
    pub id: PressId,

    /// Unique across the hub
    pub subdomain: String,

    #[serde(default)]
    pub name: String,
}

impl Press {
    pub fn new(subdomain: impl Into<String>) -> Self {
        let subdomain = subdomain.into();
        Self {
            id: PressId::generate(),
            name: subdomain.clone(),
            subdomain,
        }
    }

    pub fn with_id(mut self, id: PressId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// An imprint owned by exactly one press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBrand {
    pub id: ResourceId,
    pub press_id: PressId,
    #[serde(default)]
    pub title: String,
}

impl SubBrand {
    pub fn new(press_id: PressId, title: impl Into<String>) -> Self {
        Self {
            id: ResourceId::generate(),
            press_id,
            title: title.into(),
        }
    }
}

/// A stored grant record, as managed through the press user screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: ResourceId,
    pub principal_id: PrincipalId,

    /// Press the role is held on; `None` for records not tied to a press
    pub resource: Option<PressId>,

    pub kind: RoleKind,
}

impl RoleRecord {
    pub fn new(principal_id: PrincipalId, resource: Option<PressId>, kind: RoleKind) -> Self {
        Self {
            id: ResourceId::generate(),
            principal_id,
            resource,
            kind,
        }
    }
}

/// The aggregate: a monograph and its ordered members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monograph {
    pub id: ResourceId,

    #[serde(default)]
    pub title: String,

    /// Subdomain of the owning press (denormalized scope, not a reference)
    pub press: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub creator: Option<PrincipalId>,

    /// Ordered members (sections and file sets); never holds duplicates
    #[serde(default)]
    pub members: Vec<ResourceId>,

    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

impl Monograph {
    pub fn new(press: impl Into<String>) -> Self {
        Self {
            id: ResourceId::generate(),
            title: String::new(),
            press: press.into(),
            visibility: Visibility::Private,
            creator: None,
            members: Vec::new(),
            date_modified: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_creator(mut self, creator: PrincipalId) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn has_member(&self, id: &ResourceId) -> bool {
        self.members.contains(id)
    }

    /// Append a member at the end of the list.
    ///
    /// Returns the position it landed at, or `None` if it was already a member.
    pub fn append_member(&mut self, id: ResourceId) -> Option<usize> {
        if self.has_member(&id) {
            return None;
        }
        self.members.push(id);
        Some(self.members.len() - 1)
    }
}

/// A section of a monograph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: ResourceId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub creator: Option<PrincipalId>,

    #[serde(default)]
    pub visibility: Visibility,

    /// Back-reference for lookup only; membership lives on the monograph
    #[serde(default)]
    pub monograph_id: Option<ResourceId>,
}

impl Section {
    pub fn new() -> Self {
        Self {
            id: ResourceId::generate(),
            title: String::new(),
            creator: None,
            visibility: Visibility::Private,
            monograph_id: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_creator(mut self, creator: PrincipalId) -> Self {
        self.creator = Some(creator);
        self
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

/// A file set (an uploaded asset with its derivatives)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    pub id: ResourceId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub creator: Option<PrincipalId>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub monograph_id: Option<ResourceId>,
}

impl FileSet {
    pub fn new() -> Self {
        Self {
            id: ResourceId::generate(),
            title: String::new(),
            creator: None,
            visibility: Visibility::Private,
            monograph_id: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_creator(mut self, creator: PrincipalId) -> Self {
        self.creator = Some(creator);
        self
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}
