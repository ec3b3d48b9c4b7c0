//! Draft validation
//!
//! Runs before every write to the data service; any violation blocks
//! persistence and names the rule that failed so the UI can highlight
//! the offending field. Checks run in a fixed order: referential
//! integrity, then rater uniqueness, then score domain.

use crate::error::{Result, ValidationError};
use crate::types::{Assessment, AssessmentKind};
use skillgauge_core::CompetencyCatalog;
use std::collections::HashSet;

/// Validate an assessment draft against the competency catalog
pub fn validate(assessment: &Assessment, catalog: &CompetencyCatalog) -> Result<()> {
    // (a) Referential integrity: every score targets a competency that
    // is both rated by this assessment and known to the catalog.
    for score in &assessment.scores {
        let in_assessment = assessment.competencies.contains(&score.competency);
        if !in_assessment || !catalog.contains(&score.competency) {
            return Err(ValidationError::UnknownCompetency {
                competency: score.competency.clone(),
            });
        }
    }

    // (b) Rater uniqueness: edits replace scores, they never append, so
    // a duplicate (rater, competency) pair is malformed for any kind.
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for score in &assessment.scores {
        if !seen.insert((score.rater.as_str(), score.competency.as_str())) {
            return Err(ValidationError::DuplicateRater {
                rater: score.rater.clone(),
                competency: score.competency.clone(),
            });
        }
    }

    // Single-rater assessments admit exactly one rater identity.
    if assessment.kind == AssessmentKind::SingleRater {
        let mut raters = assessment.scores.iter().map(|s| s.rater.as_str());
        if let Some(first) = raters.next() {
            if let Some(other) = raters.find(|r| *r != first) {
                return Err(ValidationError::UnexpectedRater {
                    rater: other.to_string(),
                });
            }
        }
    }

    // (c) Score domain for the kind's scale.
    let scale = assessment.kind.scale();
    for score in &assessment.scores {
        if !scale.contains(score.score) {
            return Err(ValidationError::ScoreOutOfRange {
                score: score.score,
                scale,
            });
        }
    }

    Ok(())
}
