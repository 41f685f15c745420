//! Publication list sync - Entry Point
//!
//! Runs once and exits; meant to be scheduled (cron, CI) to refresh a site.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use publications_sync::config::{Config, api, defaults};
use publications_sync::pipeline::{self, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "publications-sync")]
#[command(about = "Refresh a static publication list from Semantic Scholar")]
#[command(version)]
struct Cli {
    /// Semantic Scholar author ID tried first
    #[arg(long, default_value = defaults::AUTHOR_ID, env = "PUBLICATIONS_AUTHOR_ID")]
    author_id: String,

    /// Author name searched when the ID yields no works
    #[arg(long, default_value = defaults::AUTHOR_NAME, env = "PUBLICATIONS_AUTHOR_NAME")]
    author_name: String,

    /// Directory for publications.json and publications.html
    #[arg(long, default_value = defaults::OUTPUT_DIR, env = "PUBLICATIONS_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Graph API base URL
    #[arg(long, default_value = api::GRAPH_API, env = "SEMANTIC_SCHOLAR_API_URL")]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        author = %cli.author_name,
        "Starting publication fetcher"
    );

    let mut config = Config::new()
        .with_author(cli.author_id, cli.author_name)
        .with_output_dir(cli.output_dir);
    config.graph_api_url = cli.api_url;

    match pipeline::run(&config).await? {
        RunOutcome::Published(summary) => {
            tracing::info!(
                total = summary.total,
                years = summary.buckets,
                author_id = %summary.author_id,
                fallback = summary.used_fallback,
                "Done"
            );
        }
        RunOutcome::NoPublications => {
            tracing::warn!("No output written");
        }
    }

    Ok(())
}
