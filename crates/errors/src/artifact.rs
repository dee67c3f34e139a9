//! Artifact (firmware image) read error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    NotFound { path: String },

    #[error("failed to read artifact {path}: {message}")]
    Io { path: String, message: String },
}

impl ArtifactError {
    /// Convert an `io::Error` into an `ArtifactError` with an associated path
    #[must_use]
    pub fn from_io_with_path(err: &std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.display().to_string(),
            },
            _ => Self::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl UserFacingError for ArtifactError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("Check the .bin path and try again."),
            Self::Io { .. } => Some("Check filesystem permissions on the artifact."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "artifact.not_found",
            Self::Io { .. } => "artifact.io",
        };
        Some(code)
    }
}
