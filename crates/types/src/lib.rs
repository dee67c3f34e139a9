#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the fwsum manifest tool
//!
//! This crate provides the firmware version type and the file-format
//! conventions (artifact/manifest extensions, manifest path derivation)
//! shared by the manifest and ops crates.

pub mod format;
pub mod version;

pub use format::{
    has_extension, is_artifact_path, is_manifest_path, manifest_path_for, ARTIFACT_EXTENSION,
    MANIFEST_EXTENSION,
};
pub use version::FirmwareVersion;
