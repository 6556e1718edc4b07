//! Output emission: the JSON taxonomy and the Markdown error report.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use crate::taxonomy::TaxonomyRecord;

/// Map of scenario name → taxonomy record, in first-seen order.
pub type Taxonomy = IndexMap<String, TaxonomyRecord>;

/// Map of scenario name → validation findings, in first-seen order.
pub type ErrorMap = IndexMap<String, Vec<String>>;

/// Writes the taxonomy as pretty-printed JSON (2-space indentation).
///
/// # Errors
///
/// Returns an error when serialization or the write fails.
pub fn write_taxonomy(path: &Path, taxonomy: &Taxonomy) -> Result<()> {
    let json = serde_json::to_string_pretty(taxonomy)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Renders the Markdown error report.
///
/// One bolded scenario-name heading per erring scenario, followed by its
/// findings as a bulleted list in recorded order.
#[must_use]
pub fn render_error_report(errors: &ErrorMap) -> String {
    let mut out = String::new();
    for (scenario, findings) in errors {
        out.push_str(&format!("**{scenario}**:\n"));
        for finding in findings {
            out.push_str(&format!("  - {finding}\n"));
        }
    }
    out
}

/// Writes the Markdown error report.
///
/// The caller is expected to skip this entirely when no scenario erred;
/// an empty report file would read as a stale artifact.
///
/// # Errors
///
/// Returns an error when the write fails.
pub fn write_error_report(path: &Path, errors: &ErrorMap) -> Result<()> {
    std::fs::write(path, render_error_report(errors))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
