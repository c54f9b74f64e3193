use crate::models::Mentor;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Mentor records bundled with the service
const SAMPLE_MENTORS: &str = include_str!("../../data/mentors.json");

/// Errors that can occur while loading mentor records
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid mentor record {id}: {reason}")]
    InvalidRecord { id: u32, reason: String },

    #[error("Duplicate mentor id: {0}")]
    DuplicateId(u32),
}

/// Immutable, validated set of mentor records
///
/// Cloning is cheap: the records sit behind an `Arc` and are shared by every
/// worker. Source order is preserved because it is the sort tiebreak.
#[derive(Debug, Clone)]
pub struct MentorCatalog {
    mentors: Arc<Vec<Mentor>>,
}

impl MentorCatalog {
    /// Build a catalog, rejecting malformed records and duplicate ids
    pub fn new(mentors: Vec<Mentor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(mentors.len());

        for mentor in &mentors {
            if let Err(errors) = mentor.validate() {
                return Err(CatalogError::InvalidRecord {
                    id: mentor.id,
                    reason: errors.to_string(),
                });
            }
            if !seen.insert(mentor.id) {
                return Err(CatalogError::DuplicateId(mentor.id));
            }
        }

        Ok(Self {
            mentors: Arc::new(mentors),
        })
    }

    /// Parse a JSON array of mentor records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let mentors: Vec<Mentor> = serde_json::from_str(json)?;
        Self::new(mentors)
    }

    /// Load a JSON array of mentor records from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading mentor catalog from {}", path.display());

        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The bundled recommendation data set
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json_str(SAMPLE_MENTORS)
    }

    /// Load from `path` when configured, else fall back to the bundled set
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(p) if !p.is_empty() => Self::from_path(p),
            _ => Self::sample(),
        }
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    /// Highest match score, first in source order on ties
    pub fn best_match(&self) -> Option<&Mentor> {
        self.mentors
            .iter()
            .reduce(|best, m| if m.match_score > best.match_score { m } else { best })
    }

    /// Everyone except the featured best match
    pub fn browse_set(&self) -> Vec<Mentor> {
        let best_id = self.best_match().map(|m| m.id);
        self.mentors
            .iter()
            .filter(|m| Some(m.id) != best_id)
            .cloned()
            .collect()
    }
}
