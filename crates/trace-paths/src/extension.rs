//! Extension normalization for cross-extension path matching
//!
//! A source file and the artifact built from it usually share a stem but not
//! an extension (`Foo.java` and `Foo.class`). Stripping a fixed set of known
//! source and compiled extensions lets the suffix comparator see them as the
//! same trailing segment.

/// Source and compiled-artifact extensions removed before suffix comparison.
pub const KNOWN_EXTENSIONS: [&str; 8] = [
    ".java", ".py", ".c", ".cpp", ".class", ".o", ".exe", ".pyc",
];

/// Strip a known extension from the end of `path`.
///
/// The path is cut at its rightmost `.` when it ends with one of
/// [`KNOWN_EXTENSIONS`]; any other path is returned unchanged. Matching is
/// case-sensitive.
///
/// ```
/// use trace_paths::strip_known_extension;
///
/// assert_eq!(strip_known_extension("src/com/Foo.java"), "src/com/Foo");
/// assert_eq!(strip_known_extension("src/ui.test/readme"), "src/ui.test/readme");
/// ```
pub fn strip_known_extension(path: &str) -> &str {
    if !KNOWN_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return path;
    }
    path.rsplit_once('.').map_or(path, |(stem, _)| stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_known_extension() {
        for ext in KNOWN_EXTENSIONS {
            let path = format!("dir/name{ext}");
            assert_eq!(strip_known_extension(&path), "dir/name", "extension {ext}");
        }
    }

    #[test]
    fn keeps_unknown_extension() {
        assert_eq!(strip_known_extension("lib/archive.jar"), "lib/archive.jar");
        assert_eq!(strip_known_extension("docs/README.md"), "docs/README.md");
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(strip_known_extension("src/Main.JAVA"), "src/Main.JAVA");
    }

    #[test]
    fn only_strips_the_last_extension() {
        assert_eq!(strip_known_extension("bin/tool.tar.exe"), "bin/tool.tar");
    }
}
