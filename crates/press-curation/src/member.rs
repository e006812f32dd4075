//! Resources that can be members of a monograph

use crate::attributes::{Attributes, TITLE, VISIBILITY};
use crate::error::{CurationError, Result};
use press_registry::Persistence;
use press_types::{FileSet, PrincipalId, ResourceId, ResourceKind, Section, Visibility};

/// A child resource of a monograph
pub trait Member {
    fn id(&self) -> &ResourceId;

    fn kind(&self) -> ResourceKind;

    fn visibility(&self) -> Visibility;

    fn set_visibility(&mut self, visibility: Visibility);

    fn monograph_id(&self) -> Option<&ResourceId>;

    fn set_monograph_id(&mut self, monograph_id: ResourceId);

    fn set_creator(&mut self, creator: PrincipalId);

    /// Apply a submitted attribute set (the base save step).
    ///
    /// `monograph_id` must already have been removed; any key other than
    /// `title` and `visibility` is rejected.
    fn apply_attributes(&mut self, attributes: &Attributes) -> Result<()>;

    /// Commit this resource through the persistence pipeline
    fn persist(&self, store: &dyn Persistence) -> press_registry::Result<()>;
}

/// Attributes shared by sections and file sets
struct CommonFields<'a> {
    title: &'a mut String,
    visibility: &'a mut Visibility,
}

impl CommonFields<'_> {
    fn apply(self, attributes: &Attributes) -> Result<()> {
        if let Some(key) = attributes.keys().find(|k| *k != TITLE && *k != VISIBILITY) {
            return Err(CurationError::invalid(key, "unknown attribute"));
        }
        // Validate everything before touching the resource
        let title = attributes.string(TITLE)?;
        let visibility = attributes.visibility()?;

        if let Some(title) = title {
            *self.title = title.to_string();
        }
        if let Some(visibility) = visibility {
            *self.visibility = visibility;
        }
        Ok(())
    }
}

impl Member for Section {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::Section
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn monograph_id(&self) -> Option<&ResourceId> {
        self.monograph_id.as_ref()
    }

    fn set_monograph_id(&mut self, monograph_id: ResourceId) {
        self.monograph_id = Some(monograph_id);
    }

    fn set_creator(&mut self, creator: PrincipalId) {
        self.creator = Some(creator);
    }

    fn apply_attributes(&mut self, attributes: &Attributes) -> Result<()> {
        CommonFields {
            title: &mut self.title,
            visibility: &mut self.visibility,
        }
        .apply(attributes)
    }

    fn persist(&self, store: &dyn Persistence) -> press_registry::Result<()> {
        store.save_section(self)
    }
}

impl Member for FileSet {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::FileSet
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn monograph_id(&self) -> Option<&ResourceId> {
        self.monograph_id.as_ref()
    }

    fn set_monograph_id(&mut self, monograph_id: ResourceId) {
        self.monograph_id = Some(monograph_id);
    }

    fn set_creator(&mut self, creator: PrincipalId) {
        self.creator = Some(creator);
    }

    fn apply_attributes(&mut self, attributes: &Attributes) -> Result<()> {
        CommonFields {
            title: &mut self.title,
            visibility: &mut self.visibility,
        }
        .apply(attributes)
    }

    fn persist(&self, store: &dyn Persistence) -> press_registry::Result<()> {
        store.save_file_set(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_title_and_visibility() {
        let mut section = Section::new();
        let attributes = Attributes::new().with(TITLE, "Chapter 1").with(VISIBILITY, "public");
        section.apply_attributes(&attributes).unwrap();

        assert_eq!(section.title, "Chapter 1");
        assert_eq!(section.visibility, Visibility::Public);
    }

    #[test]
    fn rejects_unknown_keys_without_partial_updates() {
        let mut file_set = FileSet::new().with_title("Figure 1");
        let attributes = Attributes::new().with(TITLE, "Figure 2").with("color", "red");

        let err = file_set.apply_attributes(&attributes).unwrap_err();
        assert!(matches!(err, CurationError::InvalidAttribute { ref key, .. } if key == "color"));
        assert_eq!(file_set.title, "Figure 1");
    }

    #[test]
    fn bad_visibility_leaves_title_alone() {
        let mut section = Section::new().with_title("Old");
        let attributes = Attributes::new().with(TITLE, "New").with(VISIBILITY, "sideways");

        assert!(section.apply_attributes(&attributes).is_err());
        assert_eq!(section.title, "Old");
    }
}
