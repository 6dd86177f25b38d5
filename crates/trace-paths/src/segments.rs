//! Common leading and trailing segment runs between two paths

/// Split a path into its `/`-separated segments.
///
/// Leading and trailing slashes are ignored, so `/a/b/` and `a/b` have the
/// same segments. A lone `/` or an empty string has no segments at all.
/// Empty segments from doubled slashes in the middle of a path are kept.
pub fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Count the trailing segments shared by two segment sequences.
pub fn common_suffix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Count the leading segments shared by two segment sequences.
pub fn common_prefix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Return the longest common trailing run of whole segments of two paths.
///
/// The result is the common path re-joined with `/` and the number of
/// segments in it, or `(None, 0)` when the last segments already differ.
///
/// ```
/// use trace_paths::common_path_suffix;
///
/// assert_eq!(
///     common_path_suffix("/z/b/c", "/a/b/c"),
///     (Some("b/c".to_string()), 2)
/// );
/// assert_eq!(common_path_suffix("/", "/"), (None, 0));
/// ```
pub fn common_path_suffix(a: &str, b: &str) -> (Option<String>, usize) {
    let a = segments(a);
    let b = segments(b);
    let count = common_suffix_len(&a, &b);
    joined(&a[a.len() - count..], count)
}

/// Return the longest common leading run of whole segments of two paths.
///
/// Mirror of [`common_path_suffix`].
pub fn common_path_prefix(a: &str, b: &str) -> (Option<String>, usize) {
    let a = segments(a);
    let b = segments(b);
    let count = common_prefix_len(&a, &b);
    joined(&a[..count], count)
}

fn joined(common: &[&str], count: usize) -> (Option<String>, usize) {
    if count == 0 {
        (None, 0)
    } else {
        (Some(common.join("/")), count)
    }
}
