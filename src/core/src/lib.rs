//! # Skillgauge Core
//!
//! Shared types for the skillgauge competency-assessment platform:
//! opaque identifiers, the competency catalog, and the rating scales
//! used by the assessment aggregator.
//!
//! ## Example
//!
//! ```rust
//! use skillgauge_core::{Competency, CompetencyCatalog, RatingScale};
//!
//! let mut catalog = CompetencyCatalog::new();
//! catalog.insert(Competency::new("tech-expertise", "Technical Expertise"))?;
//!
//! assert!(catalog.contains("tech-expertise"));
//! assert!(RatingScale::Consensus.contains(4.2));
//! assert!(!RatingScale::Proficiency.contains(4.5));
//! # Ok::<(), skillgauge_core::CoreError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod scale;
pub mod types;

// Re-export commonly used types
pub use catalog::{Competency, CompetencyCatalog};
pub use error::{CoreError, Result};
pub use scale::RatingScale;
pub use types::{AssessmentId, CompetencyId, EmployeeId, RaterId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
