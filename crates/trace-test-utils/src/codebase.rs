//! In-memory inventories for common matching scenarios.

use trace_core::Resource;

/// Build a file resource with a sha1 checksum.
pub fn file(path: &str, sha1: &str) -> Resource {
    Resource::new(path).with_sha1(sha1)
}

/// Two Java sources, one compiled to an identical class file and one whose
/// class file differs in content.
///
/// Returns `(develop, deploy)`:
///
/// - `src/com/acme/A.java` (sha1 `X`) and `src/com/acme/B.java` (sha1 `Y`)
/// - `com/acme/A.class` (sha1 `X`) and `com/acme/B.class` (sha1 `Z`)
pub fn java_sources_and_classes() -> (Vec<Resource>, Vec<Resource>) {
    let develop = vec![
        file("src/com/acme/A.java", "X"),
        file("src/com/acme/B.java", "Y"),
    ];
    let deploy = vec![
        file("com/acme/A.class", "X"),
        file("com/acme/B.class", "Z"),
    ];
    (develop, deploy)
}

/// A develop tree copied verbatim into two deployed roots.
///
/// Every develop file has the same content as both of its copies, so checksum
/// matching yields two targets per file.
pub fn mirrored_deployment() -> (Vec<Resource>, Vec<Resource>) {
    let develop = vec![
        Resource::directory("project/docs"),
        Resource::new("project/docs/guide.txt")
            .with_sha1("a1")
            .with_md5("m1")
            .with_size(120),
        Resource::new("project/docs/notes.txt")
            .with_sha1("a2")
            .with_md5("m2")
            .with_size(64),
    ];
    let deploy = vec![
        Resource::new("share/doc/guide.txt").with_sha1("a1").with_md5("m1"),
        Resource::new("share/doc/notes.txt").with_sha1("a2").with_md5("m2"),
        Resource::new("backup/doc/guide.txt").with_sha1("a1").with_md5("m1"),
        Resource::new("backup/doc/notes.txt").with_sha1("a2").with_md5("m2"),
    ];
    (develop, deploy)
}
