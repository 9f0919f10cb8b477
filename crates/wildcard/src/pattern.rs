use std::fmt;
use std::str::FromStr;

use memchr::{memchr, memchr3};

use crate::class::Class;
use crate::error::{Error, Result};
use crate::utf8::utf8_char_width;

/// Tests whether the pattern contains any of the `*`, `?`, `[` or `\` characters.
///
/// The pattern is scanned as raw text without interpreting escapes, so an escaped
/// metacharacter, a lone trailing backslash or an unterminated class all count.
/// This makes it a cheap pre-filter for deciding whether plain string comparison
/// is enough.
///
/// # Examples
///
/// ```
/// use wildcard::has_wildcards;
///
/// assert!(has_wildcards("diffuse.*"));
/// assert!(has_wildcards(r"\?"));
/// assert!(!has_wildcards("diffuse.R"));
/// assert!(!has_wildcards(""));
/// ```
#[inline]
pub fn has_wildcards(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    memchr3(b'*', b'?', b'[', bytes).is_some() || memchr(b'\\', bytes).is_some()
}

/// Tests whether the entire subject matches the pattern.
///
/// Pattern syntax:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
/// - `[abc]`, `[a-z]` match one character from the set, `[!abc]` one character not in it;
///   a `-` at the start or at the end of the set is literal
/// - `\x` matches `x` literally, for any character `x`
/// - any other character matches itself
///
/// A pattern with an unterminated class never matches. A lone trailing `\` escapes nothing
/// and matches no characters.
///
/// # Examples
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches("dogfish", "*fish"));
/// assert!(matches("catD", "cat[A-Z]"));
/// assert!(matches("catD", "cat[!CEF]"));
/// assert!(matches("x-", "x[d-]"));
/// assert!(!matches("dogcollar", "*fish"));
/// ```
pub fn matches(subject: &str, pattern: &str) -> bool {
    let mut p = 0;
    let mut s = 0;
    // Pattern position right after the last `*` and subject position it has absorbed up to.
    let mut resume: Option<(usize, usize)> = None;

    loop {
        match Token::scan(pattern, p) {
            Some((Token::AnyRun, next)) => {
                if next == pattern.len() {
                    return true;
                }
                resume = Some((next, s));
                p = next;
                continue;
            }
            Some((Token::Unterminated, _)) => {
                return false;
            }
            Some((token, next)) => {
                if let Some(after) = token.consume(subject, s) {
                    p = next;
                    s = after;
                    continue;
                }
            }
            None => {
                if s == subject.len() {
                    return true;
                }
            }
        }

        match resume {
            Some((rp, rs)) if rs < subject.len() => {
                let rs = rs + utf8_char_width(subject.as_bytes()[rs]);
                resume = Some((rp, rs));
                p = rp;
                s = rs;
            }
            _ => return false,
        }
    }
}

/// Checks that the pattern is well-formed.
///
/// Returns [`Error::UnterminatedClass`] if a `[` has no closing `]`.
///
/// # Examples
///
/// ```
/// use wildcard::{validate, Error};
///
/// assert_eq!(validate("cat[A-Z]"), Ok(()));
/// assert_eq!(validate("cat[abc"), Err(Error::UnterminatedClass { offset: 3 }));
/// ```
pub fn validate(pattern: &str) -> Result<()> {
    let mut pos = 0;
    while let Some((token, next)) = Token::scan(pattern, pos) {
        if let Token::Unterminated = token {
            return Err(Error::UnterminatedClass { offset: pos });
        }
        pos = next;
    }
    Ok(())
}

// ---

/// A wildcard pattern for matching text strings.
///
/// The pattern keeps its source text and is re-scanned on every match, which keeps
/// construction free and matching allocation-free.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.[RGB]");
/// assert!(pattern.matches("diffuse.R"));
/// assert!(!pattern.matches("diffuse.A"));
///
/// let pattern = Pattern::new(r"file\*.txt");
/// assert!(pattern.matches("file*.txt"));
/// assert!(!pattern.matches("file123.txt"));
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Pattern {
    raw: String,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; a malformed pattern simply never matches.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Creates a new pattern from a string, rejecting malformed patterns.
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// assert!(Pattern::try_new("[abc]").is_ok());
    /// assert!(Pattern::try_new("[abc").is_err());
    /// ```
    pub fn try_new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self { raw })
    }

    /// Tests whether the pattern matches the entire text.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        matches(text, &self.raw)
    }

    /// Tests whether the pattern contains any metacharacters.
    #[inline]
    pub fn has_wildcards(&self) -> bool {
        has_wildcards(&self.raw)
    }

    /// Returns the source text of the pattern.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(char),
    AnyOne,
    AnyRun,
    Class(Class<'a>),
    // trailing `\` with nothing to escape
    Nothing,
    // `[` without a closing `]`
    Unterminated,
}

impl<'a> Token<'a> {
    /// Scans the token at the given byte position and returns it with the position of the next one.
    #[inline]
    fn scan(pattern: &'a str, pos: usize) -> Option<(Self, usize)> {
        let ch = pattern[pos..].chars().next()?;
        let next = pos + ch.len_utf8();

        Some(match ch {
            '*' => (Self::AnyRun, next),
            '?' => (Self::AnyOne, next),
            '\\' => match pattern[next..].chars().next() {
                Some(escaped) => (Self::Literal(escaped), next + escaped.len_utf8()),
                None => (Self::Nothing, next),
            },
            '[' => match Class::parse(&pattern[next..]) {
                Some((class, len)) => (Self::Class(class), next + len),
                None => (Self::Unterminated, pattern.len()),
            },
            _ => (Self::Literal(ch), next),
        })
    }

    /// Consumes the subject at the given byte position and returns the position after it.
    #[inline]
    fn consume(&self, subject: &str, pos: usize) -> Option<usize> {
        if let Self::Nothing = self {
            return Some(pos);
        }

        let ch = subject[pos..].chars().next()?;
        let hit = match self {
            Self::Literal(c) => *c == ch,
            Self::AnyOne => true,
            Self::Class(class) => class.matches(ch),
            Self::AnyRun | Self::Nothing | Self::Unterminated => false,
        };

        hit.then_some(pos + ch.len_utf8())
    }
}
