//! Assessment data model
//!
//! The aggregate root is [`Assessment`]: it owns its consensus entries
//! and references competencies and raters by id only. Consensus entries
//! and the overall rating are derived values, recomputed from the
//! current rater-score set by [`crate::aggregator`]; they are never a
//! source of truth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skillgauge_core::{AssessmentId, CompetencyId, EmployeeId, RaterId, RatingScale};
use std::fmt;
use uuid::Uuid;

use crate::error::{Result, ValidationError};

/// One rater's score for one competency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaterScore {
    /// The evaluator who produced this score
    pub rater: RaterId,

    /// The competency being scored
    pub competency: CompetencyId,

    /// Numeric score on the assessment's scale
    pub score: f64,

    /// Free-text comment; may be empty, stays visible per rater
    #[serde(default)]
    pub comment: String,
}

impl RaterScore {
    /// Create a score without a comment
    pub fn new(rater: impl Into<RaterId>, competency: impl Into<CompetencyId>, score: f64) -> Self {
        Self {
            rater: rater.into(),
            competency: competency.into(),
            score,
            comment: String::new(),
        }
    }

    /// Attach the rater's comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Derived consensus for one competency within one assessment
///
/// The comment is independently authored by the panel; it is never
/// concatenated from individual rater comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyConsensus {
    /// The competency this consensus covers
    pub competency: CompetencyId,

    /// Mean of the rater scores, one-decimal precision; `0.0` = unrated
    pub score: f64,

    /// Panel-authored consensus comment
    #[serde(default)]
    pub comment: String,
}

/// Which aggregation mode an assessment uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    /// Several raters per competency, consensus scale
    Panel,
    /// Exactly one rater, proficiency-level scale
    SingleRater,
}

impl AssessmentKind {
    /// The rating scale in force for this kind
    pub fn scale(&self) -> RatingScale {
        match self {
            Self::Panel => RatingScale::Consensus,
            Self::SingleRater => RatingScale::Proficiency,
        }
    }

    /// Status a freshly created assessment of this kind starts in
    pub fn initial_status(&self) -> AssessmentStatus {
        match self {
            Self::Panel => AssessmentStatus::InProgress,
            Self::SingleRater => AssessmentStatus::Draft,
        }
    }
}

/// Assessment lifecycle status
///
/// The legal subset varies per kind: single-rater assessments move
/// `Draft -> Submitted -> Reviewed -> Approved`; panel assessments move
/// `InProgress -> Completed` or `InProgress -> Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Submitted,
    Reviewed,
    Approved,
    InProgress,
    Completed,
    Rejected,
}

impl AssessmentStatus {
    /// Whether this status belongs to the given kind's lifecycle
    pub fn is_valid_for(&self, kind: AssessmentKind) -> bool {
        match kind {
            AssessmentKind::SingleRater => matches!(
                self,
                Self::Draft | Self::Submitted | Self::Reviewed | Self::Approved
            ),
            AssessmentKind::Panel => {
                matches!(self, Self::InProgress | Self::Completed | Self::Rejected)
            }
        }
    }

    /// Whether moving to `next` is a legal step for the given kind
    pub fn can_transition_to(&self, next: AssessmentStatus, kind: AssessmentKind) -> bool {
        match kind {
            AssessmentKind::SingleRater => matches!(
                (self, next),
                (Self::Draft, Self::Submitted)
                    | (Self::Submitted, Self::Reviewed)
                    | (Self::Reviewed, Self::Approved)
            ),
            AssessmentKind::Panel => matches!(
                (self, next),
                (Self::InProgress, Self::Completed) | (Self::InProgress, Self::Rejected)
            ),
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
            Self::Approved => "approved",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        };
        write!(f, "{name}")
    }
}

/// Aggregate root for one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique assessment identifier
    pub id: AssessmentId,

    /// The employee being assessed
    pub subject: EmployeeId,

    /// Aggregation mode (fixes the rating scale)
    pub kind: AssessmentKind,

    /// Lifecycle status
    pub status: AssessmentStatus,

    /// Competency ids rated in this assessment, in display order
    pub competencies: Vec<CompetencyId>,

    /// Current rater-score set (full replacement on write, no patches)
    #[serde(default)]
    pub scores: Vec<RaterScore>,

    /// Derived consensus entries, one per rated competency
    #[serde(default)]
    pub consensus: Vec<CompetencyConsensus>,

    /// Derived overall rating; `0.0` until the first rating lands
    #[serde(default)]
    pub overall_rating: f64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last recompute/mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    /// Create an empty assessment for a subject
    ///
    /// The overall rating starts at the `0.0` unrated seed; the first
    /// recompute supersedes it.
    pub fn new(subject: impl Into<EmployeeId>, kind: AssessmentKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            kind,
            status: kind.initial_status(),
            competencies: Vec::new(),
            scores: Vec::new(),
            consensus: Vec::new(),
            overall_rating: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the competency set rated by this assessment
    pub fn with_competencies(mut self, competencies: Vec<CompetencyId>) -> Self {
        self.competencies = competencies;
        self
    }

    /// Insert or replace one rater's score for one competency
    ///
    /// Edits replace, they never append: at most one score per
    /// `(rater, competency)` pair exists after this call.
    pub fn upsert_score(&mut self, score: RaterScore) {
        match self
            .scores
            .iter_mut()
            .find(|s| s.rater == score.rater && s.competency == score.competency)
        {
            Some(existing) => *existing = score,
            None => self.scores.push(score),
        }
        self.updated_at = Utc::now();
    }

    /// Remove every score contributed by a rater
    pub fn remove_rater(&mut self, rater: &str) {
        self.scores.retain(|s| s.rater != rater);
        self.updated_at = Utc::now();
    }

    /// Record the panel-authored consensus comment for a competency
    ///
    /// The comment survives recomputes; it is independent of the rater
    /// comments and never derived from them.
    pub fn set_consensus_comment(&mut self, competency: &str, comment: impl Into<String>) {
        if let Some(entry) = self.consensus.iter_mut().find(|c| c.competency == competency) {
            entry.comment = comment.into();
            self.updated_at = Utc::now();
        }
    }

    /// Move the assessment to a new lifecycle status
    pub fn transition_to(&mut self, next: AssessmentStatus) -> Result<()> {
        if !self.status.can_transition_to(next, self.kind) {
            return Err(ValidationError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}
