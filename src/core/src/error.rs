//! Error types for the core catalog

use thiserror::Error;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A competency with this id is already registered
    #[error("Duplicate competency id: {0}")]
    DuplicateCompetency(String),

    /// Competency id or name is empty
    #[error("Invalid competency definition: {0}")]
    InvalidCompetency(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
