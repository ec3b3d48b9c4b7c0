//! Consensus computation
//!
//! Plain arithmetic mean, no rater weighting, one-decimal precision.
//! An empty score set yields the `0.0` unrated sentinel rather than an
//! error or NaN, so rendering and persistence never see a non-numeric
//! aggregate.

use crate::types::{Assessment, CompetencyConsensus, RaterScore};
use skillgauge_core::CompetencyId;
use tracing::debug;

/// Round to one decimal place, half away from zero
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the consensus entry for one competency
///
/// Only scores carrying `competency`'s id contribute; callers group by
/// competency before calling, so the filter is a no-op on well-formed
/// input. The consensus comment is authored by the caller and is never
/// assembled from rater comments.
pub fn consensus_for_competency(
    competency: impl Into<CompetencyId>,
    scores: &[RaterScore],
    comment: impl Into<String>,
) -> CompetencyConsensus {
    let competency = competency.into();
    let values: Vec<f64> = scores
        .iter()
        .filter(|s| s.competency == competency)
        .map(|s| s.score)
        .collect();

    let score = if values.is_empty() {
        0.0
    } else {
        round_one_decimal(values.iter().sum::<f64>() / values.len() as f64)
    };

    CompetencyConsensus {
        competency,
        score,
        comment: comment.into(),
    }
}

/// Overall rating for an assessment: mean of its consensus scores
///
/// Same one-decimal precision and `0.0` empty-input sentinel as the
/// per-competency consensus. Derived from the already-rounded consensus
/// values, matching what the consensus screens display.
pub fn overall_rating(entries: &[CompetencyConsensus]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let sum: f64 = entries.iter().map(|e| e.score).sum();
    round_one_decimal(sum / entries.len() as f64)
}

/// Rebuild every derived value from the current rater-score set
///
/// Groups scores by competency (assessment display order first, then
/// first-seen order for any stray ids), rebuilds each consensus entry
/// carrying forward its authored comment, and refreshes the overall
/// rating. Idempotent: the result depends only on the current score
/// set, never on edit history.
///
/// Returns the recomputed overall rating.
pub fn recompute(assessment: &mut Assessment) -> f64 {
    let mut order: Vec<CompetencyId> = Vec::new();
    for id in &assessment.competencies {
        if assessment.scores.iter().any(|s| &s.competency == id) {
            order.push(id.clone());
        }
    }
    for score in &assessment.scores {
        if !order.contains(&score.competency) {
            order.push(score.competency.clone());
        }
    }

    let entries: Vec<CompetencyConsensus> = order
        .into_iter()
        .map(|id| {
            let comment = assessment
                .consensus
                .iter()
                .find(|c| c.competency == id)
                .map(|c| c.comment.clone())
                .unwrap_or_default();
            consensus_for_competency(id, &assessment.scores, comment)
        })
        .collect();

    let overall = overall_rating(&entries);
    debug!(
        assessment = %assessment.id,
        competencies = entries.len(),
        overall,
        "recomputed assessment aggregates"
    );

    assessment.consensus = entries;
    assessment.overall_rating = overall;
    assessment.updated_at = chrono::Utc::now();
    overall
}
