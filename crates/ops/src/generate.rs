//! Manifest generation

use crate::types::GenerateReport;
use fwsum_errors::{Error, ValidationError};
use fwsum_hash::Digest;
use fwsum_manifest::ManifestRecord;
use fwsum_types::{is_artifact_path, manifest_path_for, FirmwareVersion, ARTIFACT_EXTENSION};
use std::path::Path;
use tracing::{debug, info};

/// Generate a manifest for an artifact
///
/// Hashes the artifact, records its digest, size, base name and the supplied
/// version, and writes the manifest next to the artifact (same base name,
/// `.json` extension) unless `output` overrides the destination. Any
/// existing manifest at that path is replaced wholesale.
///
/// # Errors
///
/// Returns `ValidationError::WrongExtension` before any I/O if the artifact
/// path does not end in `.bin`; `ArtifactError` if the artifact cannot be
/// read; `ManifestError::WriteFailed` if the manifest cannot be persisted.
pub async fn generate(
    artifact: &Path,
    version: &FirmwareVersion,
    output: Option<&Path>,
) -> Result<GenerateReport, Error> {
    if !is_artifact_path(artifact) {
        return Err(ValidationError::WrongExtension {
            path: artifact.display().to_string(),
            expected: ARTIFACT_EXTENSION.to_string(),
        }
        .into());
    }

    debug!(artifact = %artifact.display(), %version, "hashing artifact");
    let (digest, file_size) = Digest::hash_file(artifact).await?;

    let record = ManifestRecord::for_artifact(artifact, version, &digest, file_size);
    let manifest_path = output.map_or_else(|| manifest_path_for(artifact), Path::to_path_buf);

    record.write_to_file(&manifest_path).await?;
    info!(
        manifest = %manifest_path.display(),
        size = file_size,
        "manifest written"
    );

    Ok(GenerateReport {
        file_name: record.file_name,
        version: record.version,
        sha256_hash: record.sha256_hash,
        file_size,
        manifest_path,
    })
}
