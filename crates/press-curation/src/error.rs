//! Curation error types

use press_registry::RegistryError;
use press_types::ResourceId;
use thiserror::Error;

/// Curation errors. None of them is retried.
#[derive(Debug, Error)]
pub enum CurationError {
    #[error("Parent monograph not found: {0}")]
    ParentNotFound(ResourceId),

    #[error("Parent monograph {monograph} could not be loaded: {source}")]
    ParentLookup {
        monograph: ResourceId,
        #[source]
        source: RegistryError,
    },

    #[error("Invalid attribute {key}: {reason}")]
    InvalidAttribute { key: String, reason: String },

    #[error("Persistence failure: {0}")]
    Persistence(#[from] RegistryError),
}

impl CurationError {
    /// Whether the failure happened while resolving the parent monograph
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::ParentNotFound(_) | Self::ParentLookup { .. })
    }

    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for curation operations
pub type Result<T> = std::result::Result<T, CurationError>;
