//! Buildwatch Poller
//!
//! Watches a set of buildbot builders and keeps an aggregate "all green"
//! status visible on the terminal and, optionally, on a generated static
//! status page.
//!
//! Architecture:
//! - Configuration: CLI flags with environment fallbacks
//! - Client: typed HTTP access to the buildbot JSON API
//! - Scheduler: the indefinite fetch/aggregate/wait loop
//! - Render: sinks that publish each board snapshot
//!
//! The poller fans out one fetch per builder each cycle, waits for all
//! of them to settle, then sleeps 30s (or 60s after a cycle where every
//! fetch rejected) before the next cycle.

mod config;
mod render;
mod scheduler;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buildwatch_client::BuildbotClient;

use crate::config::Config;
use crate::render::{ConsoleSink, HtmlSink, StatusSink};
use crate::scheduler::StatusPoller;

#[derive(Parser)]
#[command(name = "buildwatch")]
#[command(about = "Buildbot status poller with an aggregate all-green flag", long_about = None)]
struct Cli {
    /// Base URL of the buildbot builders directory
    #[arg(long, env = "BUILDWATCH_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Comma-separated builder names
    #[arg(long, env = "BUILDWATCH_BUILDERS", default_value = config::DEFAULT_BUILDERS)]
    builders: String,

    /// Seconds between cycles
    #[arg(long, env = "BUILDWATCH_POLL_INTERVAL", default_value_t = 30)]
    poll_interval: u64,

    /// Seconds before retrying after a cycle where every fetch rejected
    #[arg(long, env = "BUILDWATCH_FAILURE_BACKOFF", default_value_t = 60)]
    failure_backoff: u64,

    /// Write a static status page to this path after every cycle
    #[arg(long, env = "BUILDWATCH_HTML_OUT")]
    html_out: Option<PathBuf>,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "buildwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::new(cli.base_url, config::parse_builders(&cli.builders));
    config.poll_interval = Duration::from_secs(cli.poll_interval);
    config.failure_backoff = Duration::from_secs(cli.failure_backoff);
    config.html_out = cli.html_out;
    config.validate()?;

    info!(
        "Watching {} builders at {}",
        config.builders.len(),
        config.base_url
    );

    let client = Arc::new(BuildbotClient::new(config.base_url.clone()));

    let mut sinks: Vec<Box<dyn StatusSink>> = vec![Box::new(ConsoleSink::new())];
    if let Some(path) = &config.html_out {
        info!("Writing status page to {}", path.display());
        sinks.push(Box::new(HtmlSink::new(path.clone())));
    }

    let mut poller = StatusPoller::new(config, client, sinks);

    if cli.once {
        let outcome = poller.run_cycle().await;
        info!(
            "Single cycle done: {}/{} builders resolved",
            outcome.resolved, outcome.attempted
        );
        return Ok(());
    }

    poller.run().await;

    Ok(())
}
