//! Error types for the press hub

use press_curation::CurationError;
use press_registry::RegistryError;
use press_types::{Action, TypesError};
use thiserror::Error;

/// Hub errors
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Invalid input: {0}")]
    Parse(#[from] TypesError),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("{principal} may not {action} {target}")]
    Forbidden {
        principal: String,
        action: Action,
        target: String,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Curation(#[from] CurationError),
}

/// Result type for hub operations
pub type HubResult<T> = Result<T, HubError>;
