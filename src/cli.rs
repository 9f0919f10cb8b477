// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// ---

/// Shell-style glob filter for attribute names and scene paths.
///
/// Prints the names that match PATTERN, a list of space separated patterns supporting
/// '*', '?', '[abc]', '[a-z]', '[!abc]' and '\x' escapes.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Pattern to match, sub-patterns are separated by spaces.
    #[arg(name = "PATTERN", required_unless_present = "split")]
    pub pattern: Option<String>,

    /// Names to match, read line by line from standard input if none are given.
    #[arg(name = "NAME")]
    pub names: Vec<String>,

    /// Match names as paths, component by component, where '...' matches any number of components.
    #[arg(short, long, overrides_with = "path")]
    pub path: bool,

    /// Path component separator [default: /].
    #[arg(short, long, env = "STRMATCH_SEPARATOR", overrides_with = "separator")]
    pub separator: Option<char>,

    /// Exclude names matching the pattern, can be repeated.
    #[arg(short = 'x', long, number_of_values = 1)]
    pub exclude: Vec<String>,

    /// Fail on malformed patterns instead of treating them as never matching.
    #[arg(long, env = "STRMATCH_STRICT")]
    pub strict: bool,

    /// Print names that do not match.
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Print only the number of selected names.
    #[arg(short, long)]
    pub count: bool,

    /// Print path components of each name as a JSON array instead of filtering, all positional arguments are treated as names.
    #[arg(long)]
    pub split: bool,

    /// Configuration file, can be repeated.
    #[arg(long, number_of_values = 1)]
    pub config: Vec<PathBuf>,

    /// Do not load the user configuration file.
    #[arg(long)]
    pub no_default_config: bool,
}
