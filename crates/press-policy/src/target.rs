//! Targets of capability checks
//!
//! A target borrows the resource it describes. Sections and file sets carry
//! their parent monograph, resolved by the caller before the check, because
//! their press scope is the parent's press.

use press_types::{FileSet, Monograph, Press, RoleRecord, Section, SubBrand, Visibility};

/// What a capability check is about
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// The press collection (for `index`)
    Presses,

    Press(&'a Press),

    SubBrand(&'a SubBrand),

    Role(&'a RoleRecord),

    Monograph(&'a Monograph),

    Section {
        section: &'a Section,
        parent: Option<&'a Monograph>,
    },

    FileSet {
        file_set: &'a FileSet,
        parent: Option<&'a Monograph>,
    },

    /// The background job dashboard
    JobDashboard,
}

impl<'a> Target<'a> {
    /// An unattached section
    pub fn section(section: &'a Section) -> Self {
        Target::Section {
            section,
            parent: None,
        }
    }

    /// An unattached file set
    pub fn file_set(file_set: &'a FileSet) -> Self {
        Target::FileSet {
            file_set,
            parent: None,
        }
    }

    /// Subdomain of the press that scopes a publication.
    ///
    /// Monographs carry it directly; sections and file sets take their
    /// parent's. Anything else (and an unattached child) has no scope.
    pub fn press_scope(&self) -> Option<&'a str> {
        match self {
            Target::Monograph(monograph) => Some(monograph.press.as_str()),
            Target::Section { parent, .. } | Target::FileSet { parent, .. } => {
                parent.map(|monograph| monograph.press.as_str())
            }
            _ => None,
        }
    }

    /// Visibility of a publication; `None` for non-publication targets
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Target::Monograph(monograph) => Some(monograph.visibility),
            Target::Section { section, .. } => Some(section.visibility),
            Target::FileSet { file_set, .. } => Some(file_set.visibility),
            _ => None,
        }
    }

    /// Whether this is a monograph, section or file set
    pub fn is_publication(&self) -> bool {
        matches!(
            self,
            Target::Monograph(_) | Target::Section { .. } | Target::FileSet { .. }
        )
    }

    /// Label for logs and audit cards
    pub fn describe(&self) -> String {
        match self {
            Target::Presses => "presses".to_string(),
            Target::Press(press) => format!("press:{}", press.subdomain),
            Target::SubBrand(sub_brand) => format!("sub_brand:{}", sub_brand.id),
            Target::Role(role) => format!("role:{}", role.id),
            Target::Monograph(monograph) => format!("monograph:{}", monograph.id),
            Target::Section { section, .. } => format!("section:{}", section.id),
            Target::FileSet { file_set, .. } => format!("file_set:{}", file_set.id),
            Target::JobDashboard => "job_dashboard".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_scope_follows_parent() {
        let monograph = Monograph::new("umich");
        let section = Section::new();

        assert_eq!(Target::section(&section).press_scope(), None);
        let attached = Target::Section {
            section: &section,
            parent: Some(&monograph),
        };
        assert_eq!(attached.press_scope(), Some("umich"));
    }

    #[test]
    fn only_publications_have_visibility() {
        let press = Press::new("umich");
        assert_eq!(Target::Press(&press).visibility(), None);
        assert!(!Target::Press(&press).is_publication());

        let file_set = FileSet::new().with_visibility(Visibility::Public);
        assert_eq!(
            Target::file_set(&file_set).visibility(),
            Some(Visibility::Public)
        );
    }

    #[test]
    fn describe_names_the_target() {
        let press = Press::new("psu");
        assert_eq!(Target::Press(&press).describe(), "press:psu");
        assert_eq!(Target::JobDashboard.describe(), "job_dashboard");
    }
}
