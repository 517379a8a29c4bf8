use clap::Parser;
use pumphouse_api::app::command::{run_command, EXIT_FAILURE, EXIT_SUCCESS};
use pumphouse_api::utils::{logger, validation::Validate};
use pumphouse_api::{ApiClient, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // The config file may turn on verbose logging, so merge it before the
    // subscriber exists and report a load failure afterwards.
    let merged = config.merge_config_file();
    logger::init_logger(&config, config.json_logs);

    if let Err(e) = merged {
        tracing::error!("Failed to load config file: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(EXIT_FAILURE);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    let api = ApiClient::from_config(&config);
    tracing::info!("Using endpoint {}", api.endpoint());

    let outcome = run_command(&api, &config.command).await?;
    if let Some(rendered) = outcome.render() {
        println!("{}", rendered);
    }

    let code = outcome.exit_code();
    match &outcome.error {
        Some(e) if outcome.response.is_some() => {
            tracing::warn!("Request completed with error status: {}", e)
        }
        Some(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("❌ {}", e);
        }
        None => {}
    }

    if code != EXIT_SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
