//! Error types for assessment validation
//!
//! Every variant is recoverable by caller correction; validation never
//! performs I/O and has no partial-failure window. Variants carry the
//! offending identifiers so the UI can highlight the exact field.

use skillgauge_core::{CompetencyId, RaterId, RatingScale};
use thiserror::Error;

use crate::types::AssessmentStatus;

/// Assessment validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A rater score references a competency outside the assessment's
    /// competency set (or missing from the catalog)
    #[error("Unknown competency: {competency}")]
    UnknownCompetency {
        /// The unreferenced competency id
        competency: CompetencyId,
    },

    /// The same rater scored the same competency twice
    #[error("Duplicate score from rater {rater} for competency {competency}")]
    DuplicateRater {
        /// The rater who scored twice
        rater: RaterId,
        /// The competency scored twice
        competency: CompetencyId,
    },

    /// A single-rater assessment carries scores from several raters
    #[error("Single-rater assessment has scores from multiple raters: {rater}")]
    UnexpectedRater {
        /// The second rater encountered
        rater: RaterId,
    },

    /// A score lies outside the domain of the assessment's scale
    #[error("Score {score} out of range for scale {scale}")]
    ScoreOutOfRange {
        /// The offending score
        score: f64,
        /// The scale in force for the assessment kind
        scale: RatingScale,
    },

    /// The requested status change is not legal for this assessment kind
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Current status
        from: AssessmentStatus,
        /// Requested status
        to: AssessmentStatus,
    },
}

/// Result type for assessment operations
pub type Result<T> = std::result::Result<T, ValidationError>;
