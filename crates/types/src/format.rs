//! File-format conventions for artifacts and manifests
//!
//! Firmware images carry a `.bin` extension and their manifests live next to
//! them with the same base name and a `.json` extension. Extension checks
//! are case-insensitive.

use std::path::{Path, PathBuf};

/// Extension carried by firmware artifacts
pub const ARTIFACT_EXTENSION: &str = "bin";

/// Extension carried by manifest files
pub const MANIFEST_EXTENSION: &str = "json";

/// Check whether a path ends in the given extension, case-insensitively
#[must_use]
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Check whether a path looks like a firmware artifact
#[must_use]
pub fn is_artifact_path(path: &Path) -> bool {
    has_extension(path, ARTIFACT_EXTENSION)
}

/// Check whether a path looks like a manifest
#[must_use]
pub fn is_manifest_path(path: &Path) -> bool {
    has_extension(path, MANIFEST_EXTENSION)
}

/// Derive the manifest path co-located with an artifact
///
/// Replaces the artifact's extension with the manifest extension in the
/// same directory, preserving the base name.
#[must_use]
pub fn manifest_path_for(artifact: &Path) -> PathBuf {
    artifact.with_extension(MANIFEST_EXTENSION)
}
