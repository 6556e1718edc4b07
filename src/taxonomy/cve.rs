//! CVE identifier extraction from classification tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::hub::Labels;

/// CVE identifier shape. Start-anchored only: a trailing suffix after a
/// valid prefix is tolerated.
static CVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CVE-\d{4}-\d{4,7}").expect("valid regex"));

/// Extracts `cve.*` classification entries as normalized (upper-cased)
/// CVE identifiers.
///
/// Malformed identifiers are excluded and reported as
/// `bad CVE format: <id>`. A missing `classification` key yields empty
/// results with no error.
#[must_use]
pub fn extract_cves(labels: &Labels) -> (Vec<String>, Vec<String>) {
    let mut cves = Vec::new();
    let mut errors = Vec::new();

    let Some(classification) = &labels.classification else {
        return (cves, errors);
    };

    for entry in classification {
        let mut segments = entry.split('.');
        if segments.next() != Some("cve") {
            continue;
        }
        let cve = segments.next().unwrap_or_default().to_uppercase();

        if CVE_RE.is_match(&cve) {
            cves.push(cve);
        } else {
            errors.push(format!("bad CVE format: {cve}"));
        }
    }

    (cves, errors)
}

// ============================================================================
// Tests
// ============================================================================
