//! Analysis over the checked-in scan fixtures in `test-fixtures/scans/`.
//!
//! Each scenario directory holds a `develop.json` and `deploy.json` ScanCode
//! document and the `expected.json` results map.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use trace_core::analyze;
use trace_scan::load_codebase;

fn scenario_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/scans")
        .join(name)
}

fn expected_text(name: &str) -> String {
    fs::read_to_string(scenario_dir(name).join("expected.json")).unwrap()
}

#[rstest]
#[case::codebase("codebase")]
#[case::mirrored("mirrored")]
#[case::webapp("webapp")]
fn test_scenario_matches_expected(#[case] name: &str) {
    let dir = scenario_dir(name);
    let develop = load_codebase(dir.join("develop.json")).unwrap();
    let deploy = load_codebase(dir.join("deploy.json")).unwrap();

    let result = analyze(develop.resources(), deploy.resources());

    let actual = serde_json::to_value(&result).unwrap();
    let expected: Value = serde_json::from_str(&expected_text(name)).unwrap();
    assert_eq!(actual, expected);
}

#[rstest]
#[case::codebase("codebase")]
#[case::mirrored("mirrored")]
#[case::webapp("webapp")]
fn test_scenario_keeps_develop_order(#[case] name: &str) {
    let dir = scenario_dir(name);
    let develop = load_codebase(dir.join("develop.json")).unwrap();
    let deploy = load_codebase(dir.join("deploy.json")).unwrap();
    let result = analyze(develop.resources(), deploy.resources());

    let expected = expected_text(name);
    let mut expected_order: Vec<&str> = result.paths().collect();
    expected_order.sort_by_key(|path| expected.find(&format!("\n  \"{path}\": {{")).unwrap());

    assert_eq!(result.paths().collect::<Vec<_>>(), expected_order);
}

#[test]
fn test_codebase_leaves_ambiguous_and_unbuilt_files_untraced() {
    let dir = scenario_dir("codebase");
    let develop = load_codebase(dir.join("develop.json")).unwrap();
    let deploy = load_codebase(dir.join("deploy.json")).unwrap();

    let result = analyze(develop.resources(), deploy.resources());

    assert!(!result.contains("docs/README"), "bare file name shared by two deploy paths");
    assert!(!result.contains("tests/test_adler.c"), "never deployed");
    assert_eq!(result.len(), 6);
}

#[test]
fn test_swapping_sides_is_not_symmetric() {
    let dir = scenario_dir("webapp");
    let develop = load_codebase(dir.join("develop.json")).unwrap();
    let deploy = load_codebase(dir.join("deploy.json")).unwrap();

    let forward = analyze(develop.resources(), deploy.resources());
    let backward = analyze(deploy.resources(), develop.resources());

    assert!(forward.contains("src/main/java/org/acme/web/Login.java"));
    assert!(backward.contains("WEB-INF/classes/org/acme/web/Login.class"));
    assert!(!backward.contains("WEB-INF/lib/acme-util.jar"));
}
