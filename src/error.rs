// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] wildcard::Error),
    #[error("failed to write json: {0}")]
    Json(#[from] json::Error),
}

/// InvalidSeparatorError is an error which may occur when parsing a path separator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid separator {value:?}, use exactly one character")]
pub struct InvalidSeparatorError {
    pub value: String,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
