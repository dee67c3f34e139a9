#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! SHA-256 content digests for firmware artifacts
//!
//! This crate computes the digest and byte size of an artifact in a single
//! streaming pass. The digest is defined over the full byte stream; the
//! chunk size used for reading never changes the result.

use fwsum_errors::{ArtifactError, Error};
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Size of chunks for streaming digest computation
const CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// A SHA-256 digest value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; 32],
}

impl Digest {
    /// Create a digest from raw bytes
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Convert to lowercase hex string (64 characters)
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse from hex string
    ///
    /// # Errors
    /// Returns an error if the input string is not valid hexadecimal or is
    /// not exactly 64 characters (32 bytes).
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex::decode(s).map_err(|e| {
            fwsum_errors::ManifestError::Malformed {
                message: format!("invalid hex digest: {e}"),
            }
        })?;

        if bytes.len() != 32 {
            return Err(fwsum_errors::ManifestError::Malformed {
                message: format!("digest must be 32 bytes, got {}", bytes.len()),
            }
            .into());
        }

        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Self::from_bytes(array))
    }

    /// Compute the digest of a byte slice
    #[must_use]
    pub fn from_data(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self::from_bytes(hash.into())
    }

    /// Compute the digest and byte size of a file in one pass
    ///
    /// # Errors
    /// Returns `ArtifactError::NotFound` if the path does not exist and
    /// `ArtifactError::Io` for any other open or read failure. On failure
    /// no partial digest or size is produced.
    pub async fn hash_file(path: &Path) -> Result<(Self, u64), Error> {
        let file = File::open(path)
            .await
            .map_err(|e| ArtifactError::from_io_with_path(&e, path))?;

        hash_reader(file, CHUNK_SIZE)
            .await
            .map_err(|e| ArtifactError::from_io_with_path(&e, path).into())
    }
}

/// Compute the digest and byte count of everything a reader yields
///
/// The chunk size only controls read granularity; any value produces the
/// same digest for the same byte stream.
///
/// # Errors
/// Returns the underlying I/O error if a read fails.
pub async fn hash_reader<R>(mut reader: R, chunk_size: usize) -> std::io::Result<(Digest, u64)>
where
    R: AsyncReadExt + Unpin,
{
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; chunk_size.max(1)];
    let mut total_bytes = 0u64;

    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        total_bytes += n as u64;
    }

    Ok((Digest::from_bytes(hasher.finalize().into()), total_bytes))
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
