use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use trace_core::{AnalysisOptions, ChecksumKind};
use trace_scan::{ConfigStore, Error, load_options};

#[test]
fn test_load_options_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.toml");
    fs::write(&file_path, "checksum_kinds = [\"sha1\"]\npath_match = false\n").unwrap();

    let options = load_options(&file_path).unwrap();

    assert_eq!(
        options,
        AnalysisOptions {
            checksum_kinds: vec![ChecksumKind::Sha1],
            path_match: false,
        }
    );
}

#[test]
fn test_load_options_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.json");
    fs::write(&file_path, r#"{"checksum_kinds": ["md5"]}"#).unwrap();

    let options = load_options(&file_path).unwrap();

    assert_eq!(options.checksum_kinds, vec![ChecksumKind::Md5]);
    assert!(options.path_match, "unset fields keep their defaults");
}

#[test]
fn test_load_options_yml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.yml");
    fs::write(&file_path, "path_match: false\n").unwrap();

    let options = load_options(&file_path).unwrap();

    assert_eq!(options.checksum_kinds, vec![ChecksumKind::Sha1, ChecksumKind::Md5]);
    assert!(!options.path_match);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.toml");
    fs::write(&file_path, "").unwrap();

    let options = load_options(&file_path).unwrap();
    assert_eq!(options, AnalysisOptions::default());
}

#[test]
fn test_unknown_checksum_kind_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.toml");
    fs::write(&file_path, "checksum_kinds = [\"sha256\"]\n").unwrap();

    let err = load_options(&file_path).unwrap_err();
    match err {
        Error::ConfigParse { format, message, .. } => {
            assert_eq!(format, "TOML");
            assert!(message.contains("sha256"), "message was: {message}");
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_unknown_field_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.json");
    fs::write(&file_path, r#"{"fuzzy": true}"#).unwrap();

    let err = load_options(&file_path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }), "got {err:?}");
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tracecode.ini");
    fs::write(&file_path, "path_match = false").unwrap();

    let store = ConfigStore::new();
    let result: Result<AnalysisOptions, _> = store.load(&file_path);

    match result {
        Err(Error::UnsupportedFormat { extension }) => assert_eq!(extension, "ini"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_missing_config_is_io_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("absent.toml");

    let err = load_options(&file_path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("absent.toml"));
}
