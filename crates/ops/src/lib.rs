#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! High-level operations for fwsum
//!
//! This crate sits between the CLI and the leaf crates. Each operation is a
//! strictly sequential flow: collect inputs, compute, compare/persist,
//! report. There is no retry logic, no caching and no shared state across
//! invocations.

mod discover;
mod generate;
mod types;
mod verify;

pub use discover::candidate_artifacts;
pub use generate::generate;
pub use types::{GenerateReport, VerificationReport, VerifyOutcome};
pub use verify::verify;

use fwsum_errors::Error;

/// Operation result that can be serialized for CLI output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Manifest generation report
    Generate(GenerateReport),
    /// Verification comparison report
    Verification(VerificationReport),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("result serialization failed: {e}")))
    }

    /// Check if this is a success result
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            OperationResult::Generate(_) => true,
            OperationResult::Verification(report) => report.outcome.is_pass(),
        }
    }
}
