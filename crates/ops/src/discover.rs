//! Candidate artifact discovery
//!
//! Glue for the directory-assisted verify flow: list the `.bin` files in a
//! directory as an ordered sequence of paths.

use fwsum_errors::Error;
use fwsum_types::is_artifact_path;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List candidate artifacts in a directory, sorted by file name
///
/// A missing directory yields an empty list rather than an error; the
/// caller falls back to free-form path entry.
///
/// # Errors
///
/// Returns an I/O error if the directory exists but cannot be read.
pub async fn candidate_artifacts(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "candidate directory missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io_with_path(&e, dir)),
    };

    let mut candidates = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(&e, dir))?
    {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(&e, &path))?
            .is_file();
        if is_file && is_artifact_path(&path) {
            candidates.push(path);
        }
    }

    candidates.sort();
    Ok(candidates)
}
