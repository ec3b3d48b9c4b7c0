//! # Skillgauge Assessment Aggregator
//!
//! Multi-rater assessment aggregation: combines per-rater competency
//! scores into a consensus score per competency and an overall rating
//! per assessment, and validates drafts before they reach the data
//! service.
//!
//! Everything here is synchronous and side-effect free; the surrounding
//! UI calls the aggregator on every rating change and again before
//! persisting, so recomputation must be idempotent and a pure function
//! of the current score set.
//!
//! ## Example
//!
//! ```rust
//! use skillgauge_assessment::aggregator;
//! use skillgauge_assessment::RaterScore;
//!
//! let scores = vec![
//!     RaterScore::new("rater:cto", "tech-expertise", 4.5),
//!     RaterScore::new("rater:lead", "tech-expertise", 4.0),
//!     RaterScore::new("rater:peer", "tech-expertise", 4.0),
//! ];
//!
//! let consensus = aggregator::consensus_for_competency("tech-expertise", &scores, "Strong panel agreement");
//! assert_eq!(consensus.score, 4.2);
//! ```

pub mod aggregator;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use aggregator::{consensus_for_competency, overall_rating, recompute, validate};
pub use error::{Result, ValidationError};
pub use types::{
    Assessment, AssessmentKind, AssessmentStatus, CompetencyConsensus, RaterScore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
