use std::str::Chars;

use memchr::memchr;

/// A bracket class such as `[a-z]` or `[!0-9]`, borrowed from the pattern it was scanned from.
///
/// The member list is kept unparsed and is walked on each lookup, so a class costs
/// nothing beyond two words to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Class<'a> {
    negated: bool,
    members: &'a str,
}

impl<'a> Class<'a> {
    /// Parses a class from the pattern text that follows the opening `[`.
    ///
    /// Returns the class together with the number of bytes it occupies, including the
    /// closing `]`, or `None` if the class is not terminated.
    #[inline]
    pub(crate) fn parse(input: &'a str) -> Option<(Self, usize)> {
        let negated = input.starts_with('!');
        let start = negated as usize;
        let end = start + memchr(b']', &input.as_bytes()[start..])?;

        Some((
            Self {
                negated,
                members: &input[start..end],
            },
            end + 1,
        ))
    }

    /// Tests whether the class accepts the given character.
    #[inline]
    pub(crate) fn matches(&self, ch: char) -> bool {
        self.members().any(|member| member.contains(ch)) != self.negated
    }

    fn members(&self) -> Members<'a> {
        Members {
            chars: self.members.chars(),
        }
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Member {
    Single(char),
    Range(char, char),
}

impl Member {
    #[inline]
    fn contains(self, ch: char) -> bool {
        match self {
            Self::Single(c) => c == ch,
            Self::Range(lo, hi) => (lo..=hi).contains(&ch),
        }
    }
}

// ---

/// Iterates over class members.
///
/// A `-` forms a range only when it has a member on both sides, so a leading or
/// trailing hyphen is taken literally.
struct Members<'a> {
    chars: Chars<'a>,
}

impl Iterator for Members<'_> {
    type Item = Member;

    fn next(&mut self) -> Option<Member> {
        let lo = self.chars.next()?;

        let mut ahead = self.chars.clone();
        if ahead.next() == Some('-') {
            if let Some(hi) = ahead.next() {
                self.chars = ahead;
                return Some(Member::Range(lo, hi));
            }
        }

        Some(Member::Single(lo))
    }
}
