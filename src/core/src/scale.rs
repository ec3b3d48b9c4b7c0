//! Rating scale definitions
//!
//! Two distinct scales exist in the platform and are never mixed within
//! one aggregation:
//!
//! - **Consensus**: continuous scores in `[1.0, 5.0]`, used by panel
//!   (multi-rater) assessments.
//! - **Proficiency**: discrete integer levels `1..=4`, used by
//!   single-rater assessments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rating scale in force for an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    /// Continuous 1.0–5.0 consensus scores
    Consensus,
    /// Discrete 1–4 proficiency levels
    Proficiency,
}

impl RatingScale {
    /// Lowest valid score on this scale
    pub fn min(&self) -> f64 {
        match self {
            Self::Consensus => 1.0,
            Self::Proficiency => 1.0,
        }
    }

    /// Highest valid score on this scale
    pub fn max(&self) -> f64 {
        match self {
            Self::Consensus => 5.0,
            Self::Proficiency => 4.0,
        }
    }

    /// Check whether a score lies in this scale's domain
    ///
    /// The proficiency scale only admits whole levels; fractional
    /// proficiency scores are out of domain even inside the range.
    pub fn contains(&self, score: f64) -> bool {
        if !score.is_finite() {
            return false;
        }

        match self {
            Self::Consensus => (self.min()..=self.max()).contains(&score),
            Self::Proficiency => {
                (self.min()..=self.max()).contains(&score) && score.fract() == 0.0
            }
        }
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consensus => write!(f, "consensus (1.0-5.0)"),
            Self::Proficiency => write!(f, "proficiency (1-4)"),
        }
    }
}
