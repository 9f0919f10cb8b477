//! Shell-style glob matching for names and delimited paths.
//!
//! This crate decides whether a name, such as an attribute name or a scene path,
//! is selected by a glob pattern. All functions are pure, allocation-free where
//! possible and never fail: a malformed pattern simply does not match.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one character
//! - `[abc]`, `[a-z]` - Matches one character from the set
//! - `[!abc]` - Matches one character not in the set
//! - `\x` - Matches `x` literally
//! - Any other character matches itself
//!
//! A `-` at the start or at the end of a set is a literal hyphen.
//!
//! # Multiple Patterns
//!
//! A multi-pattern is a list of patterns separated by spaces, matching if any of them does:
//!
//! ```
//! use wildcard::matches_multiple;
//!
//! assert!(matches_multiple("diffuse.R", "[RGB] *.[RGB]"));
//! assert!(!matches_multiple("diffuse.A", "[RGB] *.[RGB]"));
//! ```
//!
//! # Paths
//!
//! Paths are split into components and matched component by component:
//!
//! ```
//! use wildcard::{matches_path, split_path};
//!
//! let subject = split_path("/geo/sphere1", '/');
//! let pattern = split_path("/geo/sphere?", '/');
//! assert!(matches_path(&subject, &pattern));
//! ```

mod class;
mod error;
mod multi;
mod path;
mod pattern;
mod utf8;

pub use error::{Error, Result};
pub use multi::{MultiPattern, SUB_PATTERN_SEPARATOR, matches_multiple};
pub use path::{DEFAULT_SEPARATOR, ELLIPSIS, matches_path, split_path};
pub use pattern::{Pattern, has_wildcards, matches, validate};
