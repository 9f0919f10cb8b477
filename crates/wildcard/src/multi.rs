use std::fmt;

use crate::error::Result;
use crate::pattern::{Pattern, matches};

/// Separator between sub-patterns of a multi-pattern.
pub const SUB_PATTERN_SEPARATOR: char = ' ';

/// Tests whether the subject matches any of the space separated sub-patterns.
///
/// Empty sub-patterns produced by leading, trailing or consecutive spaces are kept,
/// and each of them matches only an empty subject. The subject itself is never split.
///
/// # Examples
///
/// ```
/// use wildcard::matches_multiple;
///
/// assert!(matches_multiple("cat", "cad cat"));
/// assert!(matches_multiple("diffuse.R", "[RGB] *.[RGB]"));
/// assert!(!matches_multiple("cat", "cad "));
/// ```
#[inline]
pub fn matches_multiple(subject: &str, pattern: &str) -> bool {
    pattern
        .split(SUB_PATTERN_SEPARATOR)
        .any(|sub| matches(subject, sub))
}

// ---

/// A list of alternative patterns parsed from a space separated string.
///
/// ```
/// use wildcard::MultiPattern;
///
/// let pattern = MultiPattern::new("[RGB] *.[RGB]");
/// assert!(pattern.matches("R"));
/// assert!(pattern.matches("diffuse.G"));
/// assert!(!pattern.matches("diffuse.A"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MultiPattern {
    patterns: Vec<Pattern>,
}

impl MultiPattern {
    /// Creates a new multi-pattern, splitting it into sub-patterns.
    pub fn new(raw: &str) -> Self {
        Self {
            patterns: raw.split(SUB_PATTERN_SEPARATOR).map(Pattern::new).collect(),
        }
    }

    /// Creates a new multi-pattern, rejecting it if any of its sub-patterns is malformed.
    pub fn try_new(raw: &str) -> Result<Self> {
        Ok(Self {
            patterns: raw
                .split(SUB_PATTERN_SEPARATOR)
                .map(Pattern::try_new)
                .collect::<Result<_>>()?,
        })
    }

    /// Tests whether the subject matches at least one of the sub-patterns.
    #[inline]
    pub fn matches(&self, subject: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(subject))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

impl fmt::Display for MultiPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", SUB_PATTERN_SEPARATOR)?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}
