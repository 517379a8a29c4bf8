#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

/// Endpoint used when neither the command line, the environment nor a
/// config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";
