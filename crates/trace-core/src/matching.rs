//! Path-suffix match aggregation

use std::collections::HashSet;

use trace_paths::{common_suffix_len, segments, strip_known_extension};

/// Top-ranked deploy paths returned by [`match_paths`].
#[derive(Debug, Clone)]
pub struct PathMatches<'a> {
    inner: std::vec::IntoIter<&'a str>,
}

impl<'a> Iterator for PathMatches<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PathMatches<'_> {}

/// Match one develop path against candidate deploy paths by common suffix.
///
/// Known source and compiled extensions are stripped from both sides before
/// counting common trailing segments. Every candidate sharing the longest
/// suffix is returned, in candidate order and without repeats. When the best
/// suffix is a single segment and several candidates share it, nothing is
/// returned: a bare file name in common is too weak to choose between them.
///
/// ```
/// use trace_core::match_paths;
///
/// let deployed = ["com/nexb/plugin/ui/core.class", "com/nexb/plugin/ui/test.class"];
/// let matches: Vec<_> = match_paths("/home/test/src/com/nexb/plugin/ui/core.java", deployed).collect();
/// assert_eq!(matches, ["com/nexb/plugin/ui/core.class"]);
/// ```
pub fn match_paths<'a, I>(path: &str, candidates: I) -> PathMatches<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let develop = segments(strip_known_extension(path));
    let mut best = 0;
    let mut tops: Vec<&'a str> = Vec::new();
    let mut seen: HashSet<&'a str> = HashSet::new();

    for candidate in candidates {
        let count = common_suffix_len(&develop, &segments(strip_known_extension(candidate)));
        if count == 0 || count < best {
            continue;
        }
        if count > best {
            best = count;
            tops.clear();
            seen.clear();
        }
        if seen.insert(candidate) {
            tops.push(candidate);
        }
    }

    if best == 1 && tops.len() > 1 {
        tops.clear();
    }

    PathMatches {
        inner: tops.into_iter(),
    }
}
