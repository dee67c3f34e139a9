//! Manifest read/write error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("manifest not found: {path}")]
    NotFound { path: String },

    #[error("malformed manifest: {message}")]
    Malformed { message: String },

    #[error("failed to write manifest {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl UserFacingError for ManifestError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("Generate a manifest first with `fwsum generate`."),
            Self::Malformed { .. } => {
                Some("The manifest must be a JSON array with one record; regenerate it.")
            }
            Self::WriteFailed { .. } => {
                Some("Check free disk space and permissions on the output directory.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "manifest.not_found",
            Self::Malformed { .. } => "manifest.malformed",
            Self::WriteFailed { .. } => "manifest.write_failed",
        };
        Some(code)
    }
}
