//! Read-only reference tables.
//!
//! Two external JSON files drive classification: the MITRE ATT&CK mapping
//! (tactic → techniques) and the behavior vocabulary. Both are loaded once
//! before the hub walk and never mutated.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ReferenceError;

// ============================================================================
// MITRE ATT&CK Table
// ============================================================================

/// One technique record inside a tactic. Only the name participates in
/// lookups; the rest of the record is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Technique {
    /// Technique name, e.g. `t1110`.
    pub name: String,
}

/// One tactic entry in the reference file.
#[derive(Debug, Clone, Deserialize)]
pub struct Tactic {
    /// Techniques grouped under this tactic.
    pub techniques: Vec<Technique>,
}

/// The MITRE ATT&CK reference table: tactic name → techniques.
///
/// Source order is preserved so that, should a technique name ever appear
/// under two tactics, the first tactic in the file wins deterministically.
#[derive(Debug, Clone, Default)]
pub struct MitreTable {
    tactics: IndexMap<String, Tactic>,
}

impl MitreTable {
    /// Loads the table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::MissingFile`] when the file cannot be
    /// read and [`ReferenceError::ParseError`] when it is not JSON of the
    /// expected shape.
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path).map_err(|_| ReferenceError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let tactics: IndexMap<String, Tactic> =
            serde_json::from_str(&content).map_err(|e| ReferenceError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self { tactics })
    }

    /// Builds a table from already-parsed entries. Test seam.
    #[must_use]
    pub fn from_tactics(tactics: IndexMap<String, Tactic>) -> Self {
        Self { tactics }
    }

    /// Finds the tactic containing a technique of the given name.
    ///
    /// Linear scan in source order; technique names are assumed globally
    /// unique within the table, so the first structural match wins.
    #[must_use]
    pub fn tactic_for_technique(&self, technique: &str) -> Option<&str> {
        for (tactic, info) in &self.tactics {
            if info.techniques.iter().any(|t| t.name == technique) {
                return Some(tactic);
            }
        }
        None
    }

    /// Number of tactics in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tactics.len()
    }

    /// Returns `true` when the table has no tactics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }
}

// ============================================================================
// Behavior Vocabulary
// ============================================================================

/// The set of recognized behavior tags.
///
/// The reference file is a JSON object whose top-level keys are the
/// vocabulary; values carry display metadata that hublint ignores.
#[derive(Debug, Clone, Default)]
pub struct BehaviorVocabulary {
    entries: IndexMap<String, serde_json::Value>,
}

impl BehaviorVocabulary {
    /// Loads the vocabulary from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::MissingFile`] when the file cannot be
    /// read and [`ReferenceError::ParseError`] when it is not a JSON
    /// object.
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path).map_err(|_| ReferenceError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let entries: IndexMap<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| ReferenceError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self { entries })
    }

    /// Builds a vocabulary from a list of known tags. Test seam.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names
                .into_iter()
                .map(|n| (n.into(), serde_json::Value::Null))
                .collect(),
        }
    }

    /// Membership check by key presence.
    #[must_use]
    pub fn contains(&self, behavior: &str) -> bool {
        self.entries.contains_key(behavior)
    }
}

// ============================================================================
// Tests
// ============================================================================
