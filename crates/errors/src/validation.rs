//! Input validation error types
//!
//! These fire before any file I/O is attempted.

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("invalid version: {input}")]
    InvalidVersion { input: String },

    #[error("{path} does not have the required .{expected} extension")]
    WrongExtension { path: String, expected: String },
}

impl UserFacingError for ValidationError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidVersion { .. } => {
                Some("Use three dot-separated integers, e.g. 1.0.0.")
            }
            Self::WrongExtension { .. } => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidVersion { .. } => "validation.invalid_version",
            Self::WrongExtension { .. } => "validation.wrong_extension",
        };
        Some(code)
    }
}
