use crate::domain::ports::ConfigProvider;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "pumphouse_api=debug,info"
    } else {
        "pumphouse_api=info"
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)))
}

/// Installs the subscriber matching the already-merged configuration.
pub fn init_logger<C: ConfigProvider>(config: &C, json: bool) {
    if json {
        init_json_logger(config.verbose());
    } else {
        init_cli_logger(config.verbose());
    }
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// One flat JSON object per event, so CI collectors can index `message`
/// and the event fields without walking span lists.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(true),
        )
        .init();
}
