//! Scenario document schema and file loading.
//!
//! A hub scenario file is a sequence of YAML documents, each describing
//! one detection scenario. Only the descriptive metadata matters here;
//! detection logic keys (filters, groks, and friends) are ignored.

pub mod discovery;

use std::path::Path;

use serde::Deserialize;

use crate::error::HubError;

// ============================================================================
// Schema
// ============================================================================

/// A single detection-scenario definition.
///
/// `name` and `description` are required; a document without them fails
/// the whole run rather than producing a half-keyed taxonomy entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Unique scenario name, used as the taxonomy key.
    pub name: String,

    /// Free-text description, also the source of the fallback label.
    pub description: String,

    /// Classification labels. Absence is a structural error reported per
    /// scenario, not a parse failure.
    #[serde(default)]
    pub labels: Option<Labels>,
}

/// The `labels` mapping of a scenario document.
///
/// Every field is optional; the validator decides which absences are
/// reportable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Labels {
    /// Explicit behavior tag, overrides derivation.
    #[serde(default)]
    pub behavior: Option<String>,

    /// Service the scenario protects (e.g. `ssh`).
    #[serde(default)]
    pub service: Option<String>,

    /// Attack type (e.g. `bruteforce`).
    #[serde(rename = "type", default)]
    pub attack_type: Option<String>,

    /// Targets, one of which may encode a protocol as `protocol.<name>`.
    #[serde(default)]
    pub target: Option<Vec<String>>,

    /// Operating system, the service fallback of last resort.
    #[serde(default)]
    pub os: Option<String>,

    /// Dotted classification tags: `attack.<technique>` or `cve.<id>`.
    #[serde(default)]
    pub classification: Option<Vec<String>>,

    /// Explicit display label.
    #[serde(default)]
    pub label: Option<String>,

    /// Whether the triggering traffic can be spoofed (0 or 1).
    #[serde(default)]
    pub spoofable: Option<i64>,

    /// Detection confidence, 0–100.
    #[serde(default)]
    pub confidence: Option<i64>,
}

// ============================================================================
// Loading
// ============================================================================

/// Loads every scenario document from one YAML file.
///
/// Null documents (e.g. a trailing `---`) are skipped. Any document that
/// fails to parse or deserialize is fatal: dropping it silently would
/// leave a hole in the taxonomy.
///
/// # Errors
///
/// Returns [`HubError::MissingFile`] when the file cannot be read and
/// [`HubError::ParseError`] when a document is malformed.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, HubError> {
    let content = std::fs::read_to_string(path).map_err(|_| HubError::MissingFile {
        path: path.to_path_buf(),
    })?;

    // Handle UTF-8 BOM
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut scenarios = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = serde_yaml::Value::deserialize(document).map_err(|e| HubError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        if value.is_null() {
            continue;
        }

        let scenario: Scenario =
            serde_yaml::from_value(value).map_err(|e| HubError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: e.to_string(),
            })?;
        scenarios.push(scenario);
    }

    Ok(scenarios)
}

// ============================================================================
// Tests
// ============================================================================
