//! hublint - Scenario taxonomy generator and metadata linter
//!
//! This library walks a detection hub's scenario tree, validates each
//! scenario's classification labels against the MITRE ATT&CK reference
//! table and the behavior vocabulary, and emits a consolidated JSON
//! taxonomy plus a Markdown report of validation findings.

pub mod cli;
pub mod error;
pub mod hub;
pub mod observability;
pub mod pipeline;
pub mod reference;
pub mod report;
pub mod taxonomy;
