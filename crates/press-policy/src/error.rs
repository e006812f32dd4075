//! Policy error types

use thiserror::Error;

/// Errors raised while assembling an ability.
///
/// Denial is not an error: checks return `false` or a deny decision.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Rule already registered: {0}")]
    DuplicateRule(String),
}

/// Result type for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;
