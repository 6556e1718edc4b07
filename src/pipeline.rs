//! The taxonomy pipeline.
//!
//! One synchronous pass: load reference tables, discover scenario files,
//! parse and validate every scenario, emit the taxonomy and (when needed)
//! the error report. Accumulators live on this function's stack; nothing
//! persists between invocations.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::hub::{self, discovery};
use crate::reference::{BehaviorVocabulary, MitreTable};
use crate::report::{self, ErrorMap, Taxonomy};
use crate::taxonomy;

/// Pipeline inputs, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Hub checkout containing the scenarios tree.
    pub hub: PathBuf,

    /// Taxonomy output path.
    pub output: PathBuf,

    /// Error report output path.
    pub errors: PathBuf,

    /// Behavior vocabulary path.
    pub behaviors: PathBuf,

    /// MITRE reference table path.
    pub mitre: PathBuf,
}

/// Counters for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Scenario files parsed.
    pub files: usize,

    /// Taxonomy records emitted.
    pub scenarios: usize,

    /// Scenarios with at least one validation finding.
    pub scenarios_with_errors: usize,
}

/// Runs the full pipeline once.
///
/// # Errors
///
/// Fails on unreadable reference data, malformed scenario YAML, or an
/// output write failure. Per-scenario validation findings never fail the
/// run; they land in the error report.
pub fn run(options: &PipelineOptions) -> Result<RunSummary> {
    // Stage 1: reference data
    let table = MitreTable::load(&options.mitre)?;
    let vocabulary = BehaviorVocabulary::load(&options.behaviors)?;
    info!(
        tactics = table.len(),
        mitre = %options.mitre.display(),
        behaviors = %options.behaviors.display(),
        "loaded reference tables"
    );

    // Stage 2: discovery
    let files = discovery::discover_scenario_files(&options.hub);
    info!(files = files.len(), hub = %options.hub.display(), "discovered scenario files");

    // Stage 3: parse + validate
    let mut taxonomy = Taxonomy::new();
    let mut errors = ErrorMap::new();

    for path in &files {
        debug!(file = %path.display(), "parsing scenario file");
        let scenarios = hub::load_scenarios(path)?;

        for scenario in scenarios {
            let outcome = taxonomy::validate_scenario(&scenario, &table, &vocabulary);

            if !outcome.errors.is_empty() {
                debug!(
                    scenario = %scenario.name,
                    findings = outcome.errors.len(),
                    "scenario has validation findings"
                );
                errors.insert(scenario.name.clone(), outcome.errors);
            }

            if let Some(record) = outcome.record {
                taxonomy.insert(scenario.name.clone(), record);
            }
        }
    }

    // Stage 4: emission
    report::write_taxonomy(&options.output, &taxonomy)?;

    if errors.is_empty() {
        info!(output = %options.output.display(), scenarios = taxonomy.len(), "taxonomy written");
    } else {
        report::write_error_report(&options.errors, &errors)?;
        warn!(
            scenarios = errors.len(),
            report = %options.errors.display(),
            "validation findings written to error report"
        );
    }

    Ok(RunSummary {
        files: files.len(),
        scenarios: taxonomy.len(),
        scenarios_with_errors: errors.len(),
    })
}

// ============================================================================
// Tests
// ============================================================================
