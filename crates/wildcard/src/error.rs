use thiserror::Error;

/// Error is an error which may occur when a pattern is validated in strict mode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unterminated character class starting at offset {offset}")]
    UnterminatedClass { offset: usize },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
