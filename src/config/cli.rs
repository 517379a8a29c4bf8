use crate::config::{TomlConfig, DEFAULT_ENDPOINT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pumphouse-api")]
#[command(about = "Drive the REST endpoints of a pumphouse migration service")]
pub struct CliConfig {
    /// Base URL of the service; overrides the config file.
    #[arg(long, env = "PUMPHOUSE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// TOML file with an [api] section.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// GET /resources
    Resources,
    /// POST /reset
    Reset,
    /// POST /tenants/<TENANT_ID>
    MigrateTenant { tenant_id: String },
    /// POST /hosts/<HOST_NAME>
    EvacuateHost { host_name: String },
}

impl CliConfig {
    /// Fills in settings from `--config` that were not given on the command
    /// line or through the environment.
    pub fn merge_config_file(&mut self) -> Result<()> {
        let Some(path) = &self.config else {
            return Ok(());
        };

        tracing::debug!("Loading config file: {}", path.display());
        let file = TomlConfig::from_file(path)?;
        if self.endpoint.is_none() {
            self.endpoint = Some(file.endpoint().to_string());
        }
        self.verbose = self.verbose || file.verbose();
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", ConfigProvider::endpoint(self))?;
        match &self.command {
            Command::MigrateTenant { tenant_id } => validate_non_empty_string("tenant_id", tenant_id),
            Command::EvacuateHost { host_name } => validate_non_empty_string("host_name", host_name),
            Command::Resources | Command::Reset => Ok(()),
        }
    }
}
