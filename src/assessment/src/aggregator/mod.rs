//! Assessment aggregation
//!
//! Consensus computation and draft validation. Both are pure functions
//! over in-memory values: the UI invokes them on every rating change
//! (redundant calls are harmless) and once more before persisting, so a
//! stale aggregate never reaches the data service.

pub mod consensus;
pub mod validate;

pub use consensus::{consensus_for_competency, overall_rating, recompute};
pub use validate::validate;
