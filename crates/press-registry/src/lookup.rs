//! Resource lookup and the base save pipeline

use crate::error::Result;
use press_types::{FileSet, Monograph, ResourceId, RoleRecord, Section, SubBrand};

/// Finds stored resources by id
pub trait ResourceLookup: Send + Sync {
    fn monograph(&self, id: &ResourceId) -> Result<Monograph>;

    fn section(&self, id: &ResourceId) -> Result<Section>;

    fn file_set(&self, id: &ResourceId) -> Result<FileSet>;

    fn sub_brand(&self, id: &ResourceId) -> Result<SubBrand>;

    fn role(&self, id: &ResourceId) -> Result<RoleRecord>;

    /// Every monograph, in the order they were first stored
    fn list_monographs(&self) -> Result<Vec<Monograph>>;
}

/// Durably commits resources
pub trait Persistence: Send + Sync {
    fn save_monograph(&self, monograph: &Monograph) -> Result<()>;

    fn save_section(&self, section: &Section) -> Result<()>;

    fn save_file_set(&self, file_set: &FileSet) -> Result<()>;
}
