// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::{InvalidSeparatorError, Result};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub separator: Separator,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Settings {
    /// Loads settings layering the given files over the embedded defaults.
    pub fn load<I>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        for file in files {
            log::debug!("add configuration source {:?} (required: {})", file.path, file.required);
            builder = builder.add_source(
                File::from(file.path.as_path())
                    .format(FileFormat::Toml)
                    .required(file.required),
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            strict: false,
            exclude: Vec::new(),
        }
    }
}

// ---

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

// ---

/// Path component separator, exactly one character.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Separator(char);

impl Separator {
    pub fn char(self) -> char {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(wildcard::DEFAULT_SEPARATOR)
    }
}

impl From<char> for Separator {
    fn from(value: char) -> Self {
        Self(value)
    }
}

impl From<Separator> for char {
    fn from(value: Separator) -> Self {
        value.0
    }
}

impl TryFrom<String> for Separator {
    type Error = InvalidSeparatorError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Self(ch)),
            _ => Err(InvalidSeparatorError { value }),
        }
    }
}
