//! Extraction and validation core.
//!
//! One scenario document goes in; a taxonomy record and a list of
//! validation findings come out. Validation collects every finding
//! (it does not stop at the first) so the report shows maintainers the
//! whole picture for each scenario.

pub mod behavior;
pub mod cve;
pub mod label;
pub mod mitre;

use serde::Serialize;

use crate::hub::Scenario;
use crate::reference::{BehaviorVocabulary, MitreTable};

// ============================================================================
// Output Record
// ============================================================================

/// The normalized, validated output unit for one scenario.
///
/// Field order is the emission order in the taxonomy file.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyRecord {
    /// Scenario name (also the taxonomy key).
    pub name: String,

    /// Scenario description, verbatim.
    pub description: String,

    /// Display label, explicit or derived.
    pub label: String,

    /// Zero or one behavior tags; empty when the derived behavior is not
    /// in the vocabulary.
    pub behaviors: Vec<String>,

    /// Resolved `tactic:technique` pairs.
    pub mitre_attacks: Vec<String>,

    /// Detection confidence, 0 when absent.
    pub confidence: i64,

    /// Spoofability flag, 0 when absent.
    pub spoofable: i64,

    /// Normalized CVE identifiers; omitted entirely when none resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cves: Option<Vec<String>>,
}

/// Result of validating one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    /// The taxonomy record, absent only when the scenario has no `labels`
    /// mapping at all.
    pub record: Option<TaxonomyRecord>,

    /// Validation findings, in the order they were detected.
    pub errors: Vec<String>,
}

// ============================================================================
// Validation
// ============================================================================

/// Validates one scenario and builds its taxonomy record.
///
/// A scenario without a top-level `labels` mapping is excluded from the
/// taxonomy entirely; every other finding is advisory and the record is
/// still produced, with defaults for whatever was missing.
#[must_use]
pub fn validate_scenario(
    scenario: &Scenario,
    table: &MitreTable,
    vocabulary: &BehaviorVocabulary,
) -> ScenarioOutcome {
    let mut errors = Vec::new();

    let Some(labels) = &scenario.labels else {
        errors.push("labels not found".to_string());
        return ScenarioOutcome {
            record: None,
            errors,
        };
    };

    let behavior = behavior::resolve(labels);

    let (mitre_attacks, mitre_errors) = mitre::resolve_attacks(labels, table);
    errors.extend(mitre_errors);

    if behavior.is_empty() {
        errors.push("behavior key not found in labels".to_string());
    }

    if mitre_attacks.is_empty() {
        errors.push("mitre_attack key not found in labels".to_string());
    }

    let (cves, cve_errors) = cve::extract_cves(labels);
    errors.extend(cve_errors);

    let mut scenario_label = labels.label.clone().unwrap_or_default();

    let spoofable = labels.spoofable.unwrap_or_else(|| {
        errors.push("spoofable key not found in labels".to_string());
        0
    });

    let confidence = labels.confidence.unwrap_or_else(|| {
        errors.push("confidence key not found in labels".to_string());
        0
    });

    if scenario_label.is_empty() {
        scenario_label = label::derive_label(&scenario.description);
    }

    if scenario_label.is_empty() {
        errors.push("label key not found in labels".to_string());
    }

    let mut behaviors: Vec<String> = Vec::new();
    if vocabulary.contains(&behavior) {
        behaviors.push(behavior);
    } else {
        // The still-empty accumulator is interpolated on purpose; the
        // rendered message is part of the report contract.
        errors.push(format!("Unknown behaviors: {behaviors:?}"));
    }

    let record = TaxonomyRecord {
        name: scenario.name.clone(),
        description: scenario.description.clone(),
        label: scenario_label,
        behaviors,
        mitre_attacks,
        confidence,
        spoofable,
        cves: if cves.is_empty() { None } else { Some(cves) },
    };

    ScenarioOutcome {
        record: Some(record),
        errors,
    }
}

// ============================================================================
// Tests
// ============================================================================
