// third-party imports
use wildcard::{ELLIPSIS, MultiPattern, SUB_PATTERN_SEPARATOR, matches_path, split_path};

// local imports
use crate::error::Result;

// ---

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Mode {
    /// Names are matched as a whole.
    #[default]
    Name,
    /// Names are split into path components which are matched one by one.
    Path,
}

// ---

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MatchOptions {
    pub mode: Mode,
    pub separator: char,
    pub strict: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            separator: wildcard::DEFAULT_SEPARATOR,
            strict: false,
        }
    }
}

// ---

/// A path pattern where an ellipsis component matches any number of subject components.
///
/// Components between ellipses are matched positionally, so `*` still matches
/// exactly one component.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PathPattern {
    components: Vec<String>,
}

impl PathPattern {
    pub fn new(raw: &str, separator: char) -> Self {
        Self::from_components(split_path(raw, separator))
    }

    /// Creates a path pattern, rejecting it if any of its components is malformed.
    pub fn try_new(raw: &str, separator: char) -> std::result::Result<Self, wildcard::Error> {
        let components = split_path(raw, separator);
        for component in &components {
            wildcard::validate(component)?;
        }
        Ok(Self::from_components(components))
    }

    pub fn from_components(components: Vec<String>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn matches<S: AsRef<str>>(&self, subject: &[S]) -> bool {
        Self::partial_match(&self.components, subject)
    }

    fn partial_match<S: AsRef<str>>(pattern: &[String], subject: &[S]) -> bool {
        let Some(i) = pattern.iter().position(|c| c == ELLIPSIS) else {
            return matches_path(subject, pattern);
        };

        let (head, tail) = (&pattern[..i], &pattern[i + 1..]);
        if subject.len() < head.len() || !matches_path(&subject[..head.len()], head) {
            return false;
        }

        let rest = &subject[head.len()..];
        (0..=rest.len()).any(|skip| Self::partial_match(tail, &rest[skip..]))
    }
}

// ---

#[derive(Debug)]
enum Selector {
    Name(MultiPattern),
    Path(Vec<PathPattern>),
}

// ---

/// Selects names matching any of the included multi-patterns and none of the excluded ones.
///
/// Without included patterns every name that is not excluded is selected.
#[derive(Debug, Default)]
pub struct NameFilter {
    options: MatchOptions,
    include: Vec<Selector>,
    exclude: Vec<Selector>,
}

impl NameFilter {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            options,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn include(&mut self, pattern: &str) -> Result<&mut Self> {
        log::debug!("include {:?}", pattern);
        let selector = self.compile(pattern)?;
        self.include.push(selector);
        Ok(self)
    }

    pub fn exclude(&mut self, pattern: &str) -> Result<&mut Self> {
        log::debug!("exclude {:?}", pattern);
        let selector = self.compile(pattern)?;
        self.exclude.push(selector);
        Ok(self)
    }

    pub fn matches(&self, name: &str) -> bool {
        let components = match self.options.mode {
            Mode::Name => Vec::new(),
            Mode::Path => split_path(name, self.options.separator),
        };

        let hit = |selector: &Selector| match selector {
            Selector::Name(pattern) => pattern.matches(name),
            Selector::Path(patterns) => patterns.iter().any(|p| p.matches(&components)),
        };

        (self.include.is_empty() || self.include.iter().any(hit)) && !self.exclude.iter().any(hit)
    }

    fn compile(&self, pattern: &str) -> Result<Selector> {
        let MatchOptions {
            mode,
            separator,
            strict,
        } = self.options;

        Ok(match (mode, strict) {
            (Mode::Name, false) => Selector::Name(MultiPattern::new(pattern)),
            (Mode::Name, true) => Selector::Name(MultiPattern::try_new(pattern)?),
            (Mode::Path, false) => Selector::Path(
                pattern
                    .split(SUB_PATTERN_SEPARATOR)
                    .map(|sub| PathPattern::new(sub, separator))
                    .collect(),
            ),
            (Mode::Path, true) => Selector::Path(
                pattern
                    .split(SUB_PATTERN_SEPARATOR)
                    .map(|sub| PathPattern::try_new(sub, separator))
                    .collect::<std::result::Result<_, _>>()?,
            ),
        })
    }
}

#[cfg(test)]
mod tests;
