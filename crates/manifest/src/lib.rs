#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Firmware manifest handling for fwsum
//!
//! This crate defines the on-disk manifest format and provides
//! serialization/deserialization for manifest records. The wire format is a
//! UTF-8 JSON array containing a single record object; the array container
//! is kept for forward compatibility and only the first record is consumed
//! on read.

use fwsum_errors::{Error, ManifestError};
use fwsum_hash::Digest;
use fwsum_types::FirmwareVersion;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single manifest record pairing an artifact's identity with its digest
///
/// Field order here fixes the serialized key order:
/// `file_name, version, sha256_hash, file_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Base name of the artifact at generation time (informational only)
    #[serde(default)]
    pub file_name: String,
    /// Version string in `m.n.p` form, validated at creation time
    #[serde(default)]
    pub version: String,
    /// Lowercase hex SHA-256 digest of the artifact content
    #[serde(default)]
    pub sha256_hash: String,
    /// Artifact byte count at generation time
    #[serde(default)]
    pub file_size: u64,
}

impl ManifestRecord {
    /// Create a record for an artifact
    ///
    /// The stored file name is the artifact's base name; the directory part
    /// is deliberately not recorded.
    #[must_use]
    pub fn for_artifact(
        artifact: &Path,
        version: &FirmwareVersion,
        digest: &Digest,
        file_size: u64,
    ) -> Self {
        let file_name = artifact
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            version: version.to_string(),
            sha256_hash: digest.to_hex(),
            file_size,
        }
    }

    /// Parse the first record out of manifest JSON content
    ///
    /// Additional records after the first are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Malformed` if the content is not valid JSON,
    /// is not an array, is an empty array, or its first element is not a
    /// non-empty object.
    pub fn from_json(content: &str) -> Result<Self, Error> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ManifestError::Malformed {
                message: e.to_string(),
            })?;

        let records = value.as_array().ok_or_else(|| ManifestError::Malformed {
            message: "manifest root must be a JSON array".to_string(),
        })?;

        let first = records.first().ok_or_else(|| ManifestError::Malformed {
            message: "manifest contains no records".to_string(),
        })?;

        let fields = first
            .as_object()
            .filter(|obj| !obj.is_empty())
            .ok_or_else(|| ManifestError::Malformed {
                message: "first manifest record is empty".to_string(),
            })?;

        serde_json::from_value(serde_json::Value::Object(fields.clone())).map_err(|e| {
            ManifestError::Malformed {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load the first record from a manifest file
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotFound` if the file is absent and
    /// `ManifestError::Malformed` if the content fails `from_json`.
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::from(ManifestError::NotFound {
                    path: path.display().to_string(),
                })
            } else {
                Error::io_with_path(&e, path)
            }
        })?;
        Self::from_json(&content)
    }

    /// Serialize to manifest JSON (single-record array, 2-space indent)
    ///
    /// # Errors
    ///
    /// Returns an internal error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(std::slice::from_ref(self))
            .map_err(|e| Error::internal(format!("manifest serialization failed: {e}")))
    }

    /// Write the record to a manifest file, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::WriteFailed` if the destination cannot be
    /// created or written.
    pub async fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        let content = self.to_json()?;
        tokio::fs::write(path, content).await.map_err(|e| {
            ManifestError::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let record = ManifestRecord {
            file_name: "fw.bin".to_string(),
            version: "2.1.0".to_string(),
            sha256_hash: "ae4b3280e56e2faf83f414a6e3dabe9d5fbe18976544c05fed121accb85b53fc"
                .to_string(),
            file_size: 3,
        };

        let json = record.to_json().unwrap();
        // Array container, 2-space indent, stable key order
        assert!(json.starts_with("[\n  {\n"));
        let file_name_at = json.find("\"file_name\"").unwrap();
        let version_at = json.find("\"version\"").unwrap();
        let hash_at = json.find("\"sha256_hash\"").unwrap();
        let size_at = json.find("\"file_size\"").unwrap();
        assert!(file_name_at < version_at);
        assert!(version_at < hash_at);
        assert!(hash_at < size_at);

        let back = ManifestRecord::from_json(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_fields_default() {
        let record = ManifestRecord::from_json(r#"[{"file_name": "fw.bin"}]"#).unwrap();
        assert_eq!(record.file_name, "fw.bin");
        assert_eq!(record.version, "");
        assert_eq!(record.sha256_hash, "");
        assert_eq!(record.file_size, 0);
    }

    #[test]
    fn test_extra_records_ignored() {
        let record = ManifestRecord::from_json(
            r#"[{"file_name": "a.bin", "file_size": 1}, {"file_name": "b.bin"}]"#,
        )
        .unwrap();
        assert_eq!(record.file_name, "a.bin");
        assert_eq!(record.file_size, 1);
    }

    #[test]
    fn test_malformed_content() {
        for content in [
            "",
            "{not json",
            "{}",                  // not an array
            "[]",                  // empty collection
            "[{}]",                // first record empty
            "[null]",              // first record absent
            "[42]",                // first record not an object
            "\"just a string\"",
        ] {
            let err = ManifestRecord::from_json(content).unwrap_err();
            assert!(
                matches!(err, Error::Manifest(ManifestError::Malformed { .. })),
                "expected Malformed for {content:?}, got {err:?}"
            );
        }
    }
}
