//! Integration tests for manifest crate

use fwsum_errors::{Error, ManifestError};
use fwsum_hash::Digest;
use fwsum_manifest::ManifestRecord;
use fwsum_types::FirmwareVersion;
use std::path::Path;
use tempfile::tempdir;

#[tokio::test]
async fn test_manifest_file_operations() {
    let temp = tempdir().unwrap();
    let manifest_path = temp.path().join("fw.json");

    let digest = Digest::from_data(b"\x00\x01\x02");
    let version = FirmwareVersion::parse("2.1.0").unwrap();
    let record = ManifestRecord::for_artifact(Path::new("/build/Output/fw.bin"), &version, &digest, 3);

    assert_eq!(record.file_name, "fw.bin");
    assert_eq!(record.version, "2.1.0");
    assert_eq!(
        record.sha256_hash,
        "ae4b3280e56e2faf83f414a6e3dabe9d5fbe18976544c05fed121accb85b53fc"
    );
    assert_eq!(record.file_size, 3);

    record.write_to_file(&manifest_path).await.unwrap();

    let loaded = ManifestRecord::load(&manifest_path).await.unwrap();
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn test_regeneration_overwrites_wholesale() {
    let temp = tempdir().unwrap();
    let manifest_path = temp.path().join("fw.json");

    let version = FirmwareVersion::parse("1.0.0").unwrap();
    let first = ManifestRecord::for_artifact(
        Path::new("fw.bin"),
        &version,
        &Digest::from_data(b"old"),
        3,
    );
    first.write_to_file(&manifest_path).await.unwrap();

    let second = ManifestRecord::for_artifact(
        Path::new("fw.bin"),
        &FirmwareVersion::parse("1.0.1").unwrap(),
        &Digest::from_data(b"new content"),
        11,
    );
    second.write_to_file(&manifest_path).await.unwrap();

    let loaded = ManifestRecord::load(&manifest_path).await.unwrap();
    assert_eq!(loaded, second);
}

#[tokio::test]
async fn test_load_missing_manifest() {
    let temp = tempdir().unwrap();
    let err = ManifestRecord::load(&temp.path().join("absent.json"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Manifest(ManifestError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_load_malformed_manifest() {
    let temp = tempdir().unwrap();
    let manifest_path = temp.path().join("bad.json");
    tokio::fs::write(&manifest_path, "[]").await.unwrap();

    let err = ManifestRecord::load(&manifest_path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Manifest(ManifestError::Malformed { .. })
    ));
}
