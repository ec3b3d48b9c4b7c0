//! Shared identifier types
//!
//! All identifiers are opaque: the remote data service assigns them and
//! the core never inspects their structure.

use uuid::Uuid;

/// Unique competency identifier
pub type CompetencyId = String;

/// Unique rater (evaluator) identifier
pub type RaterId = String;

/// Unique employee (assessment subject) identifier
pub type EmployeeId = String;

/// Unique assessment identifier
pub type AssessmentId = Uuid;
