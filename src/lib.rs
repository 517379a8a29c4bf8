#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::TomlConfig;
pub use crate::core::{
    api::ApiClient,
    request::{callback, no_callback, Callback, PendingRequest},
};
pub use domain::model::ApiResponse;
pub use utils::error::{ApiError, Result};
