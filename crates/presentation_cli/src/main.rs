//! ticket-watch
//!
//! Queries the Vale passenger train availability API for one date and
//! reports the result to a Telegram chat.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use application::{CheckReport, TicketCheckService};
use clap::Parser;
use infrastructure::{
    AppConfig, ConfigSources, TelegramNotifierAdapter, ValeAvailabilityAdapter,
    load_route_catalog,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, log_filter_from_verbosity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let report = run(&cli).await?;

    if report.delivery.delivered {
        info!(attempts = report.delivery.attempts, "Done");
    } else {
        warn!(
            attempts = report.delivery.attempts,
            "Report could not be delivered"
        );
    }
    Ok(())
}

/// Wire the adapters from configuration and run one check
async fn run(cli: &Cli) -> anyhow::Result<CheckReport> {
    let mut sources = ConfigSources::default().with_env_file(&cli.env_file);
    if let Some(path) = &cli.config {
        sources = sources.with_config_file(path);
    }

    let mut config = AppConfig::load(&sources).context("Failed to load configuration")?;
    if cli.insecure {
        config.availability.accept_invalid_certs = true;
    }

    let catalog = load_route_catalog(&cli.codigos)?;
    let telegram = config.telegram.client_config()?;

    let availability = ValeAvailabilityAdapter::from_config(&config.availability)
        .context("Failed to create availability client")?;
    let notifier = TelegramNotifierAdapter::from_config(&telegram)
        .context("Failed to create Telegram client")?;

    let service = TicketCheckService::new(Arc::new(availability), Arc::new(notifier), catalog)
        .with_calendar(config.calendar()?)
        .with_retry_policy(config.delivery.clone());

    let request = cli.search_request();
    info!(
        date = %request.outbound_date,
        origin = %request.origin,
        destination = %request.destination,
        "Checking availability"
    );

    Ok(service.run(&request).await?)
}
