//! Report types returned by operations

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Outcome of a verification comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerifyOutcome {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl VerifyOutcome {
    /// True iff both digest and size matched
    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for VerifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Report produced by manifest generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// Base name recorded in the manifest
    pub file_name: String,
    /// Version recorded in the manifest
    pub version: String,
    /// Lowercase hex digest of the artifact
    pub sha256_hash: String,
    /// Artifact byte count
    pub file_size: u64,
    /// Where the manifest was written
    pub manifest_path: PathBuf,
}

/// Report produced by verification
///
/// Emitted for both PASS and FAIL outcomes; a failed precondition (manifest
/// or artifact unreadable) produces an error instead of a report.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// File name recorded in the manifest (informational)
    pub file_name: String,
    /// Version recorded in the manifest
    pub version: String,
    /// Byte count recorded in the manifest
    pub stored_size: u64,
    /// Byte count of the artifact as it is now
    pub current_size: u64,
    /// Digest recorded in the manifest
    pub stored_sha256: String,
    /// Digest of the artifact as it is now
    pub current_sha256: String,
    /// PASS iff digest and size both match exactly
    pub outcome: VerifyOutcome,
}
