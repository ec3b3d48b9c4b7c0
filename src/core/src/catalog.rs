//! Competency catalog
//!
//! The catalog is the read-only source of valid competency identifiers
//! consumed by assessment validation. Assessments reference competencies
//! by id only, so editing a catalog entry never retroactively alters a
//! stored rating.

use crate::error::{CoreError, Result};
use crate::types::CompetencyId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A competency definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    /// Unique competency identifier
    pub id: CompetencyId,

    /// Human-readable name (e.g., "Technical Expertise")
    pub name: String,

    /// Optional longer description shown in the catalog UI
    #[serde(default)]
    pub description: String,
}

impl Competency {
    /// Create a new competency
    pub fn new(id: impl Into<CompetencyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Add a description to the competency
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// In-memory competency catalog keyed by competency id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetencyCatalog {
    competencies: HashMap<CompetencyId, Competency>,
}

impl CompetencyCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a competency definition
    ///
    /// Rejects empty ids/names and duplicate ids; existing entries are
    /// never silently replaced.
    pub fn insert(&mut self, competency: Competency) -> Result<()> {
        if competency.id.is_empty() {
            return Err(CoreError::InvalidCompetency(
                "competency id cannot be empty".to_string(),
            ));
        }
        if competency.name.is_empty() {
            return Err(CoreError::InvalidCompetency(format!(
                "competency '{}' has an empty name",
                competency.id
            )));
        }
        if self.competencies.contains_key(&competency.id) {
            return Err(CoreError::DuplicateCompetency(competency.id));
        }

        self.competencies.insert(competency.id.clone(), competency);
        Ok(())
    }

    /// Lookup a competency by id
    pub fn get(&self, id: &str) -> Option<&Competency> {
        self.competencies.get(id)
    }

    /// Check whether a competency id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.competencies.contains_key(id)
    }

    /// Number of registered competencies
    pub fn len(&self) -> usize {
        self.competencies.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.competencies.is_empty()
    }

    /// Iterate over all registered competencies
    pub fn iter(&self) -> impl Iterator<Item = &Competency> {
        self.competencies.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_insert_and_lookup() {
        let mut catalog = CompetencyCatalog::new();
        catalog
            .insert(Competency::new("tech", "Technical Expertise").with_description("Depth of domain knowledge"))
            .unwrap();

        assert!(catalog.contains("tech"));
        assert_eq!(catalog.get("tech").unwrap().name, "Technical Expertise");
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CompetencyCatalog::new();
        catalog.insert(Competency::new("tech", "Technical Expertise")).unwrap();

        let result = catalog.insert(Competency::new("tech", "Other Name"));
        assert!(matches!(result, Err(CoreError::DuplicateCompetency(_))));

        // Original entry untouched
        assert_eq!(catalog.get("tech").unwrap().name, "Technical Expertise");
    }

    #[test]
    fn test_empty_definitions_rejected() {
        let mut catalog = CompetencyCatalog::new();
        assert!(matches!(
            catalog.insert(Competency::new("", "Name")),
            Err(CoreError::InvalidCompetency(_))
        ));
        assert!(matches!(
            catalog.insert(Competency::new("id", "")),
            Err(CoreError::InvalidCompetency(_))
        ));
    }
}
