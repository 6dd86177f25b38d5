//! Load, configure and analyze through the library crates together.

use pretty_assertions::assert_eq;
use trace_core::{ChecksumKind, Confidence, DeploymentAnalysis, Matcher, Resource};
use trace_scan::{load_codebase, load_options};
use trace_test_utils::ScanPair;
use trace_test_utils::codebase::mirrored_deployment;

#[test]
fn test_scan_files_to_results() {
    let (develop, deploy) = mirrored_deployment();
    let scans = ScanPair::new(&develop, &deploy);

    let develop = load_codebase(scans.develop()).unwrap();
    let deploy = load_codebase(scans.deploy()).unwrap();
    let result = DeploymentAnalysis::new(develop.resources(), deploy.resources()).run();

    let guide = result.get("project/docs/guide.txt").expect("guide.txt is traced");
    assert_eq!(guide.matched_resources().len(), 2);
    assert!(
        guide
            .matched_resources()
            .iter()
            .all(|m| m.matcher() == Matcher::ChecksumMatch && m.confidence() == Confidence::Exact)
    );
}

#[test]
fn test_options_file_restricts_checksum_kinds() {
    let develop = [Resource::new("pkg/data.bin").with_sha1("s-dev").with_md5("m-shared")];
    let deploy = [Resource::new("opt/blob").with_sha1("s-dep").with_md5("m-shared")];
    let scans = ScanPair::new(&develop, &deploy);

    let sha1_only = scans.write_file("sha1.yaml", "checksum_kinds: [sha1]\n");
    let all_kinds = scans.write_file("all.json", "{}");

    let develop = load_codebase(scans.develop()).unwrap();
    let deploy = load_codebase(scans.deploy()).unwrap();

    let restricted = DeploymentAnalysis::new(develop.resources(), deploy.resources())
        .with_options(load_options(&sha1_only).unwrap())
        .run();
    assert!(restricted.is_empty());

    let full = DeploymentAnalysis::new(develop.resources(), deploy.resources())
        .with_options(load_options(&all_kinds).unwrap())
        .run();
    let matched = full.get("pkg/data.bin").unwrap().matched_resources();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].path(), "opt/blob");
    assert_eq!(matched[0].checksum_matchtype(), Some(ChecksumKind::Md5));
}

#[test]
fn test_results_serialize_into_scan_order_document() {
    let develop = [
        Resource::new("b/second.c").with_sha1("2"),
        Resource::new("a/first.c").with_sha1("1"),
    ];
    let deploy = [
        Resource::new("out/first.o").with_sha1("1"),
        Resource::new("out/second.o").with_sha1("2"),
    ];
    let scans = ScanPair::new(&develop, &deploy);

    let develop = load_codebase(scans.develop()).unwrap();
    let deploy = load_codebase(scans.deploy()).unwrap();
    let result = trace_core::analyze(develop.resources(), deploy.resources());

    let text = serde_json::to_string_pretty(&result).unwrap();
    assert!(text.find("\"b/second.c\"").unwrap() < text.find("\"a/first.c\"").unwrap());
}
