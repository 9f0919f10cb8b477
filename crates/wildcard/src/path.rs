use memchr::memchr;

use crate::pattern::matches;

/// Reserved path component standing for any number of intermediate levels.
///
/// The tokenizer keeps it as a single component; giving it a meaning when matching
/// is up to the caller.
pub const ELLIPSIS: &str = "...";

/// Default path separator.
pub const DEFAULT_SEPARATOR: char = '/';

/// Splits a path into its components.
///
/// A single leading separator is skipped. The three character sequence `...` at the
/// start of a component always forms an [`ELLIPSIS`] component, even if the separator
/// is `.` itself.
///
/// # Examples
///
/// ```
/// use wildcard::split_path;
///
/// assert_eq!(split_path("/a/.../b*/d", '/'), ["a", "...", "b*", "d"]);
/// assert_eq!(split_path("a...b", '.'), ["a", "...", "b"]);
/// assert!(split_path("", '/').is_empty());
/// ```
pub fn split_path(path: &str, separator: char) -> Vec<String> {
    let mut result = Vec::new();
    let mut rest = if path.starts_with(separator) {
        skip_separator(path, separator)
    } else {
        path
    };

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(ELLIPSIS) {
            result.push(ELLIPSIS.to_owned());
            rest = tail.strip_prefix(separator).unwrap_or(tail);
            continue;
        }

        match find(rest, separator) {
            Some(i) => {
                result.push(rest[..i].to_owned());
                rest = skip_separator(&rest[i..], separator);
            }
            None => {
                result.push(rest.to_owned());
                break;
            }
        }
    }

    result
}

/// Tests whether subject path components match pattern components position by position.
///
/// Sequences of different length never match; a `*` component matches exactly one
/// subject component.
///
/// # Examples
///
/// ```
/// use wildcard::matches_path;
///
/// assert!(matches_path(&["a", "b", "c"], &["a", "b", "*"]));
/// assert!(!matches_path(&["a", "b", "c"], &["*"]));
/// ```
pub fn matches_path<S, P>(subject: &[S], pattern: &[P]) -> bool
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    subject.len() == pattern.len()
        && subject
            .iter()
            .zip(pattern)
            .all(|(s, p)| matches(s.as_ref(), p.as_ref()))
}

/// Skips the separator at the start of `tail` unless it is the first dot of an ellipsis.
#[inline]
fn skip_separator(tail: &str, separator: char) -> &str {
    let after = &tail[separator.len_utf8()..];
    if tail.starts_with(ELLIPSIS) && !after.starts_with(ELLIPSIS) {
        tail
    } else {
        after
    }
}

#[inline]
fn find(haystack: &str, separator: char) -> Option<usize> {
    if separator.is_ascii() {
        memchr(separator as u8, haystack.as_bytes())
    } else {
        haystack.find(separator)
    }
}
