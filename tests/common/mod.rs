//! Shared integration-test fixture: a throwaway hub checkout plus
//! reference tables, built in a tempdir.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use hublint::pipeline::{self, PipelineOptions, RunSummary};

/// Default MITRE reference table used by most tests.
pub const DEFAULT_MITRE: &str = r#"{
  "credential-access": {"techniques": [{"name": "t1110"}, {"name": "t1552"}]},
  "initial-access": {"techniques": [{"name": "t1190"}]}
}"#;

/// Default behavior vocabulary used by most tests.
pub const DEFAULT_BEHAVIORS: &str = r#"{
  "ssh:bruteforce": {"label": "SSH Bruteforce"},
  "http:exploit": {"label": "HTTP Exploit"}
}"#;

/// A temporary hub checkout with reference tables and output paths.
pub struct HubFixture {
    dir: tempfile::TempDir,
}

impl HubFixture {
    /// Creates a fixture with the default reference tables.
    pub fn new() -> Self {
        Self::with_reference(DEFAULT_MITRE, DEFAULT_BEHAVIORS)
    }

    /// Creates a fixture with custom reference tables.
    pub fn with_reference(mitre: &str, behaviors: &str) -> Self {
        let dir = tempfile::tempdir().expect("create fixture dir");
        fs::write(dir.path().join("mitre_attack.json"), mitre).expect("write mitre table");
        fs::write(dir.path().join("behaviors.json"), behaviors).expect("write behaviors");
        fs::create_dir_all(dir.path().join("hub/scenarios/crowdsecurity"))
            .expect("create scenarios tree");
        Self { dir }
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path to the hub checkout.
    pub fn hub(&self) -> PathBuf {
        self.dir.path().join("hub")
    }

    /// Writes a scenario file into the recognized maintainer folder.
    pub fn add_scenario(&self, file: &str, content: &str) {
        let path = self.hub().join("scenarios/crowdsecurity").join(file);
        fs::write(&path, content).expect("write scenario file");
    }

    /// Writes a scenario file at an arbitrary hub-relative path.
    pub fn add_file(&self, rel: &str, content: &str) {
        let path = self.hub().join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("create parent dirs");
        fs::write(&path, content).expect("write file");
    }

    /// Pipeline options pointing at this fixture.
    pub fn options(&self) -> PipelineOptions {
        PipelineOptions {
            hub: self.hub(),
            output: self.dir.path().join("scenarios.json"),
            errors: self.dir.path().join("scenario_taxonomy_errors.md"),
            behaviors: self.dir.path().join("behaviors.json"),
            mitre: self.dir.path().join("mitre_attack.json"),
        }
    }

    /// Runs the pipeline, panicking on fatal errors.
    pub fn run(&self) -> RunSummary {
        pipeline::run(&self.options()).expect("pipeline run failed")
    }

    /// Reads and parses the emitted taxonomy.
    pub fn taxonomy(&self) -> serde_json::Value {
        let content =
            fs::read_to_string(self.options().output).expect("taxonomy output missing");
        serde_json::from_str(&content).expect("taxonomy output is not valid JSON")
    }

    /// Reads the error report, if one was written.
    pub fn error_report(&self) -> Option<String> {
        fs::read_to_string(self.options().errors).ok()
    }
}
