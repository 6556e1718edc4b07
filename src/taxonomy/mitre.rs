//! MITRE ATT&CK resolution from classification tags.
//!
//! Classification entries of the form `attack.<technique>` are mapped to
//! `tactic:technique` pairs through the reference table. Entries with any
//! other leading segment (e.g. `cve.*`) are someone else's business.

use crate::hub::Labels;
use crate::reference::MitreTable;

/// Resolves `attack.*` classification entries to `tactic:technique`
/// strings.
///
/// Unknown techniques are skipped and reported as
/// `unknown mitre technique: <name>`. A missing `classification` key
/// yields empty results with no error; whether that is acceptable is the
/// validator's call.
#[must_use]
pub fn resolve_attacks(labels: &Labels, table: &MitreTable) -> (Vec<String>, Vec<String>) {
    let mut attacks = Vec::new();
    let mut errors = Vec::new();

    let Some(classification) = &labels.classification else {
        return (attacks, errors);
    };

    for entry in classification {
        let mut segments = entry.split('.');
        if segments.next() != Some("attack") {
            continue;
        }
        let technique = segments.next().unwrap_or_default();

        match table.tactic_for_technique(technique) {
            Some(tactic) => attacks.push(format!("{tactic}:{technique}")),
            None => errors.push(format!("unknown mitre technique: {technique}")),
        }
    }

    (attacks, errors)
}

// ============================================================================
// Tests
// ============================================================================
