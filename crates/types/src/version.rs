//! Firmware version parsing
//!
//! Versions are three dot-separated non-negative integers (`m.n.p`).
//! The format is deliberately stricter than semver: no pre-release or
//! build suffixes, no `v` prefix, no sign characters.

use fwsum_errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A firmware version in `major.minor.patch` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FirmwareVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl FirmwareVersion {
    /// Create a new firmware version
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string in strict `m.n.p` form
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidVersion` unless the input is exactly
    /// three dot-separated runs of ASCII digits.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidVersion {
            input: input.to_string(),
        };

        let mut parts = input.split('.');
        let mut components = [0u64; 3];
        for slot in &mut components {
            let part = parts.next().ok_or_else(invalid)?;
            // u64::from_str would admit a leading '+'; the format does not
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse::<u64>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}

impl FromStr for FirmwareVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for FirmwareVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FirmwareVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
