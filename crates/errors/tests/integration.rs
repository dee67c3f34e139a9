//! Integration tests for error conversions and user-facing rendering

use fwsum_errors::{ArtifactError, Error, ManifestError, UserFacingError, ValidationError};

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    match err {
        Error::Io { kind, .. } => assert_eq!(kind, std::io::ErrorKind::PermissionDenied),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_artifact_not_found_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = ArtifactError::from_io_with_path(&io, std::path::Path::new("fw.bin"));
    assert!(matches!(err, ArtifactError::NotFound { .. }));
    assert_eq!(err.user_code(), Some("artifact.not_found"));
}

#[test]
fn test_artifact_other_io_keeps_path_and_message() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = ArtifactError::from_io_with_path(&io, std::path::Path::new("fw.bin"));
    match &err {
        ArtifactError::Io { path, message } => {
            assert_eq!(path, "fw.bin");
            assert!(message.contains("denied"));
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_domain_errors_wrap_into_umbrella() {
    let err: Error = ManifestError::Malformed {
        message: "not an array".to_string(),
    }
    .into();
    assert_eq!(err.user_code(), Some("manifest.malformed"));
    assert!(err.user_message().contains("not an array"));

    let err: Error = ValidationError::InvalidVersion {
        input: "v1.2.3".to_string(),
    }
    .into();
    assert_eq!(err.user_code(), Some("validation.invalid_version"));
    assert!(err.user_hint().is_some());
}

#[test]
fn test_serde_json_error_maps_to_malformed() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Manifest(ManifestError::Malformed { .. })));
}

#[test]
fn test_cancelled_display() {
    assert_eq!(Error::Cancelled.to_string(), "operation cancelled");
}
