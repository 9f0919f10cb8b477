// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod settings;

// public uses
pub use app::App;
pub use filtering::{MatchOptions, Mode, NameFilter, PathPattern};
pub use settings::Settings;
