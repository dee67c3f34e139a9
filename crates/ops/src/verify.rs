//! Manifest verification

use crate::types::{VerificationReport, VerifyOutcome};
use fwsum_errors::Error;
use fwsum_hash::Digest;
use fwsum_manifest::ManifestRecord;
use std::path::Path;
use tracing::{debug, info};

/// Verify an artifact against a stored manifest
///
/// Loads the manifest's first record, recomputes the artifact's digest and
/// size, and compares both. Digest comparison is exact, case-sensitive
/// string equality on the hex form; size comparison is exact numeric
/// equality. Both must match for PASS; any mismatch is a single FAIL
/// outcome.
///
/// # Errors
///
/// Returns `ManifestError` if the manifest is missing or malformed and
/// `ArtifactError` if the artifact cannot be read. In those cases no
/// comparison report is produced.
pub async fn verify(manifest: &Path, artifact: &Path) -> Result<VerificationReport, Error> {
    let record = ManifestRecord::load(manifest).await?;
    debug!(
        manifest = %manifest.display(),
        artifact = %artifact.display(),
        "recomputing digest"
    );
    let (digest, current_size) = Digest::hash_file(artifact).await?;

    let current_sha256 = digest.to_hex();
    let outcome = if current_sha256 == record.sha256_hash && current_size == record.file_size {
        VerifyOutcome::Pass
    } else {
        VerifyOutcome::Fail
    };
    info!(%outcome, artifact = %artifact.display(), "verification finished");

    Ok(VerificationReport {
        file_name: record.file_name,
        version: record.version,
        stored_size: record.file_size,
        current_size,
        stored_sha256: record.sha256_hash,
        current_sha256,
        outcome,
    })
}
