mod check;

use clap::Parser;
use kunai_core::config::load_config;
use kunai_rfc::rfc::validation::ValidationPolicy;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use crate::check::{Args, check_types};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let args = Args::parse();
    let policy = args.apply(ValidationPolicy::from_config(&config.validation)?);

    tracing::info!(
        version = %policy.target,
        strict = policy.strict,
        count = args.types.len(),
        "Checking ADR TYPE values"
    );

    let warnings = check_types(&args.types, policy)?;

    if warnings.is_empty() {
        tracing::info!(version = %policy.target, "All TYPE values are supported");
    }

    Ok(())
}
