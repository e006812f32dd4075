//! Parsing errors for core types

use thiserror::Error;

/// Errors raised while parsing core types from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown visibility: {0}")]
    UnknownVisibility(String),

    #[error("Unknown role kind: {0}")]
    UnknownRoleKind(String),

    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),
}

/// Result type for type parsing
pub type Result<T> = std::result::Result<T, TypesError>;
