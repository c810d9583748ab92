//! Reviewbot
//!
//! A long-running worker that watches the review status of the most recent
//! homework submission and reports every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: flags with environment fallback, credentials gated up front
//! - Repositories: status API and messenger behind async traits
//! - Scheduler: fixed-interval poll loop with de-duplication and failure policy
//!
//! The process runs until it is killed. It exits non-zero only when required
//! configuration is absent or the status API answers with an unexpected status.

mod config;
mod error;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Args, Config};
use crate::repository::{Notifier, StatusRepository};
use crate::scheduler::{IntervalTicker, StatusPoller};
use reviewbot_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    info!("Starting reviewbot");

    if let Err(e) = run(args).await {
        error!(fatal = true, "Reviewbot stopped: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Initializes logging to stderr and, if configured, to an append-only file
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewbot=info,reviewbot_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

/// Checks configuration, builds the clients and runs the poll loop
async fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    config.validate()?;

    info!(
        "Loaded configuration: endpoint={}, chat_id={}, retry_period={:?}",
        config.endpoint, config.chat_id, config.retry_period
    );

    let statuses: Arc<dyn StatusRepository> = Arc::new(
        PracticumClient::new(
            config.endpoint.clone(),
            config.practicum_token.clone(),
            config.request_timeout,
        )
        .context("Failed to build status API client")?,
    );

    let notifier: Arc<dyn Notifier> = Arc::new(
        TelegramClient::new(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            config.chat_id.clone(),
            config.request_timeout,
        )
        .context("Failed to build Telegram client")?,
    );

    let mut poller = StatusPoller::new(&config, statuses, notifier);
    let mut ticker = IntervalTicker::new(config.retry_period);

    poller.run(&mut ticker).await?;

    Ok(())
}
