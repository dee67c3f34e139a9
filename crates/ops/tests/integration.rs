//! Integration tests for ops crate
//!
//! Exercises the generate/verify round trip and the mutation, truncation
//! and malformed-manifest failure paths end to end on real files.

use fwsum_errors::{ArtifactError, Error, ManifestError, ValidationError};
use fwsum_ops::{candidate_artifacts, generate, verify, OperationResult, VerifyOutcome};
use fwsum_types::FirmwareVersion;
use std::path::Path;
use tempfile::tempdir;

async fn write_artifact(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    tokio::fs::write(&path, content).await.unwrap();
    path
}

#[tokio::test]
async fn test_generate_then_verify_passes() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"\x00\x01\x02").await;
    let version = FirmwareVersion::parse("2.1.0").unwrap();

    let report = generate(&artifact, &version, None).await.unwrap();
    assert_eq!(report.file_name, "fw.bin");
    assert_eq!(report.version, "2.1.0");
    assert_eq!(report.file_size, 3);
    assert_eq!(
        report.sha256_hash,
        "ae4b3280e56e2faf83f414a6e3dabe9d5fbe18976544c05fed121accb85b53fc"
    );
    assert_eq!(report.manifest_path, temp.path().join("fw.json"));

    let verification = verify(&report.manifest_path, &artifact).await.unwrap();
    assert_eq!(verification.outcome, VerifyOutcome::Pass);
    assert_eq!(verification.stored_size, verification.current_size);
    assert_eq!(verification.stored_sha256, verification.current_sha256);
    assert!(OperationResult::Verification(verification).is_success());
}

#[tokio::test]
async fn test_explicit_output_path() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"payload").await;
    let output = temp.path().join("elsewhere.json");
    let version = FirmwareVersion::parse("1.0.0").unwrap();

    let report = generate(&artifact, &version, Some(&output)).await.unwrap();
    assert_eq!(report.manifest_path, output);
    assert!(output.exists());
}

#[tokio::test]
async fn test_single_byte_mutation_fails_with_equal_sizes() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"\x00\x01\x02").await;
    let version = FirmwareVersion::parse("1.0.0").unwrap();
    let report = generate(&artifact, &version, None).await.unwrap();

    tokio::fs::write(&artifact, b"\x00\x01\x03").await.unwrap();

    let verification = verify(&report.manifest_path, &artifact).await.unwrap();
    assert_eq!(verification.outcome, VerifyOutcome::Fail);
    assert_eq!(verification.stored_size, verification.current_size);
    assert_ne!(verification.stored_sha256, verification.current_sha256);
}

#[tokio::test]
async fn test_truncation_fails() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"\x00\x01\x02\x03").await;
    let version = FirmwareVersion::parse("1.0.0").unwrap();
    let report = generate(&artifact, &version, None).await.unwrap();

    tokio::fs::write(&artifact, b"\x00\x01").await.unwrap();

    let verification = verify(&report.manifest_path, &artifact).await.unwrap();
    assert_eq!(verification.outcome, VerifyOutcome::Fail);
    assert_ne!(verification.stored_size, verification.current_size);
}

#[tokio::test]
async fn test_generate_rejects_wrong_extension_before_io() {
    let temp = tempdir().unwrap();
    // Deliberately never created: the extension check must fire first
    let artifact = temp.path().join("fw.hex");
    let version = FirmwareVersion::parse("1.0.0").unwrap();

    let err = generate(&artifact, &version, None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::WrongExtension { .. })
    ));
}

#[tokio::test]
async fn test_generate_missing_artifact() {
    let temp = tempdir().unwrap();
    let artifact = temp.path().join("fw.bin");
    let version = FirmwareVersion::parse("1.0.0").unwrap();

    let err = generate(&artifact, &version, None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Artifact(ArtifactError::NotFound { .. })
    ));
    // Nothing written on failure
    assert!(!temp.path().join("fw.json").exists());
}

#[tokio::test]
async fn test_verify_stops_on_malformed_manifest() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"content").await;
    let manifest = temp.path().join("fw.json");
    tokio::fs::write(&manifest, "[]").await.unwrap();

    let err = verify(&manifest, &artifact).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Manifest(ManifestError::Malformed { .. })
    ));
}

#[tokio::test]
async fn test_verify_missing_artifact() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"content").await;
    let version = FirmwareVersion::parse("1.0.0").unwrap();
    let report = generate(&artifact, &version, None).await.unwrap();

    tokio::fs::remove_file(&artifact).await.unwrap();

    let err = verify(&report.manifest_path, &artifact).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Artifact(ArtifactError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_candidate_artifacts_sorted_and_filtered() {
    let temp = tempdir().unwrap();
    write_artifact(temp.path(), "b.bin", b"b").await;
    write_artifact(temp.path(), "a.bin", b"a").await;
    write_artifact(temp.path(), "A.BIN", b"A").await;
    write_artifact(temp.path(), "notes.txt", b"n").await;
    write_artifact(temp.path(), "fw.json", b"[]").await;
    tokio::fs::create_dir(temp.path().join("sub.bin"))
        .await
        .unwrap();

    let candidates = candidate_artifacts(temp.path()).await.unwrap();
    let names: Vec<_> = candidates
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A.BIN", "a.bin", "b.bin"]);
}

#[tokio::test]
async fn test_candidate_artifacts_missing_dir_is_empty() {
    let temp = tempdir().unwrap();
    let candidates = candidate_artifacts(&temp.path().join("Output")).await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_result_json_shape() {
    let temp = tempdir().unwrap();
    let artifact = write_artifact(temp.path(), "fw.bin", b"\x00\x01\x02").await;
    let version = FirmwareVersion::parse("2.1.0").unwrap();
    let report = generate(&artifact, &version, None).await.unwrap();

    let verification = verify(&report.manifest_path, &artifact).await.unwrap();
    let json = OperationResult::Verification(verification).to_json().unwrap();
    assert!(json.contains("\"outcome\": \"PASS\""));
    assert!(json.contains("\"stored_size\": 3"));
}
