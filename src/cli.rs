//! CLI argument definitions.
//!
//! hublint exposes a single flat command: point it at a hub checkout and
//! it writes the taxonomy and, when needed, the error report. The hub path
//! is validated after parsing so that an empty value from the environment
//! gets the same diagnostic as a missing flag.

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{ArgAction, Parser};

/// Generate the scenario taxonomy file for a detection hub.
#[derive(Parser, Debug)]
#[command(name = "hublint", author, version, about)]
pub struct Cli {
    /// Path to the hub checkout containing the scenarios tree.
    #[arg(
        long,
        env = "HUBLINT_HUB",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub hub: Option<PathBuf>,

    /// Output taxonomy file path.
    #[arg(short, long, default_value = "./scenarios.json")]
    pub output: PathBuf,

    /// Output error report file path.
    #[arg(short, long, default_value = "./scenario_taxonomy_errors.md")]
    pub errors: PathBuf,

    /// Behavior vocabulary file path.
    #[arg(short, long, default_value = "./behaviors.json", env = "HUBLINT_BEHAVIORS")]
    pub behaviors: PathBuf,

    /// MITRE ATT&CK reference file path.
    #[arg(short, long, default_value = "./mitre_attack.json", env = "HUBLINT_MITRE")]
    pub mitre: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the hub path, or a usage error if it was omitted or empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::HublintError::Usage`] when `--hub` was not
    /// given or resolved to an empty string.
    pub fn require_hub(&self) -> Result<&PathBuf, crate::error::HublintError> {
        match &self.hub {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(crate::error::HublintError::Usage(
                "please provide the hub path with the --hub argument".to_string(),
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
