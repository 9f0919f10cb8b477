// std imports
use std::path::PathBuf;

// local imports
use crate::error::Result;
use crate::settings::{Settings, SourceFile};

// ---

pub const APP_NAME: &str = "strmatch";

/// Environment variable overriding the location of the user configuration file.
pub const ENV_CONFIG: &str = "STRMATCH_CONFIG";

/// Returns the location of the optional user configuration file.
pub fn default_file() -> Option<PathBuf> {
    match std::env::var_os(ENV_CONFIG) {
        Some(path) => Some(path.into()),
        None => dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml")),
    }
}

/// Starts loading settings from the given configuration files.
pub fn at<I, P>(files: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader {
        files: files.into_iter().map(Into::into).collect(),
        no_default: false,
    }
}

// ---

pub struct Loader {
    files: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    /// Skips the user configuration file.
    pub fn no_default(self, value: bool) -> Self {
        Self {
            no_default: value,
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        let default = if self.no_default { None } else { default_file() };

        Settings::load(
            default
                .map(|path| SourceFile::new(path).required(false))
                .into_iter()
                .chain(self.files.into_iter().map(SourceFile::new)),
        )
    }
}
