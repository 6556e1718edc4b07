//! Error types for hublint.
//!
//! Fatal errors (bad arguments, unreadable reference data, malformed
//! scenario YAML) surface here and map to process exit codes. Per-scenario
//! validation findings are not errors in this sense; they are collected as
//! plain strings and end up in the Markdown report.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for hublint CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (unreadable reference data, malformed YAML)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for hublint operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum HublintError {
    /// Invalid command-line usage (e.g. missing hub path)
    #[error("{0}")]
    Usage(String),

    /// Reference table loading error
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Scenario file loading error
    #[error(transparent)]
    Hub(#[from] HubError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HublintError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Reference(_) | Self::Hub(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Reference Data Errors
// ============================================================================

/// Errors loading the read-only reference tables (MITRE mapping and
/// behavior vocabulary).
///
/// Reference data is a prerequisite for the whole run; these errors are
/// always fatal.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Reference file not found or unreadable
    #[error("reference file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Reference file is not valid JSON of the expected shape
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the reference file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },
}

// ============================================================================
// Hub / Scenario File Errors
// ============================================================================

/// Errors loading scenario definition files from the hub.
///
/// A scenario file that fails to parse aborts the run; partial recovery
/// would silently drop scenarios from the taxonomy.
#[derive(Debug, Error)]
pub enum HubError {
    /// Scenario file not found or unreadable
    #[error("scenario file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// YAML parsing or deserialization failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the scenario file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },
}

/// Result type alias for hublint operations.
pub type Result<T> = std::result::Result<T, HublintError>;

// ============================================================================
// Tests
// ============================================================================
