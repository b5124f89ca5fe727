//! RedTail Seat Monitor CLI
//!
//! Watches one course in the ASU class catalog and pings a webhook when
//! seat availability changes.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use redtail::{
    error::{AppError, Result},
    models::{Config, SearchCriteria, SearchType},
    pipeline::{SectionNotifier, run_monitor},
    services::{DiscordWebhook, fetch_terms},
    utils::http::{HttpPageFetcher, create_client},
};

/// RedTail - Course Seat Monitor
#[derive(Parser, Debug)]
#[command(name = "redtail", version, about = "Course catalog seat monitor")]
struct Cli {
    /// 3-letter subject code, e.g. CSE
    #[arg(long)]
    subject: String,

    /// Term name, e.g. "Fall 2025"
    #[arg(long)]
    term: String,

    /// Catalog number, e.g. 571
    #[arg(long)]
    number: u32,

    /// Seconds between queries (default: 10, or monitor.poll_interval_secs
    /// from the config file)
    #[arg(long)]
    sleep_time: Option<u64>,

    /// Seat filter: all or open
    #[arg(long, default_value = "all")]
    search_type: SearchType,

    /// Path to the config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("RedTail seat monitor starting...");

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    let poll_secs = cli.sleep_time.unwrap_or(config.monitor.poll_interval_secs);
    if poll_secs == 0 {
        return Err(AppError::config("--sleep-time must be positive"));
    }

    // Both the webhook destination and the term catalog must resolve
    // before the loop starts; either missing is fatal here.
    let webhook_url = std::env::var("WEBHOOK_URL")
        .map_err(|_| AppError::config("WEBHOOK_URL is not set in environment variables"))?;

    let client = create_client(&config.http)?;
    let fetcher = HttpPageFetcher::new(
        client.clone(),
        Duration::from_secs(config.http.render_wait_secs),
    );

    log::info!("Fetching term catalog...");
    let terms = fetch_terms(&fetcher, &config.monitor.base_url).await?;
    if terms.is_empty() {
        return Err(AppError::config("Term catalog came back empty"));
    }
    log::info!("Loaded {} terms", terms.len());

    let criteria = SearchCriteria::new(
        &cli.subject,
        &cli.term,
        cli.number,
        cli.search_type,
        &terms,
    )?;

    let webhook = DiscordWebhook::new(client, webhook_url, config.webhook.username.as_str());
    let notifier = SectionNotifier::new(&webhook, criteria.course_title());

    run_monitor(
        &config,
        &criteria,
        &fetcher,
        &notifier,
        Duration::from_secs(poll_secs),
    )
    .await
}
