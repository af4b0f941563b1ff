use clap::Parser;
use newsintel::application::summary::IngestSummary;
use newsintel::cli::commands::{Cli, Commands};
use newsintel::config::IngestConfig;
use newsintel::NewsIntel;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command).await {
        error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = IngestConfig::from_env();

    match cmd {
        Commands::Ingest {
            snapshot,
            no_snapshot,
            db,
            delay_ms,
            timeout_secs,
        } => {
            if let Some(path) = snapshot {
                config.snapshot_path = Some(path);
            }
            if no_snapshot {
                config.snapshot_path = None;
            }
            if db.is_some() {
                config.db_path = db;
            }
            if let Some(ms) = delay_ms {
                config.page_delay = Duration::from_millis(ms);
            }
            if let Some(secs) = timeout_secs {
                config.fetch_timeout = Duration::from_secs(secs);
            }

            let ni = NewsIntel::new(&config)?;
            let started = std::time::Instant::now();
            let report = ni.ingest().await;
            info!(
                articles = report.articles.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "ingestion finished"
            );

            let summary = IngestSummary::from_articles(&report.articles);
            println!("{}", serde_json::to_string_pretty(&report.feeds)?);
            println!("{}", serde_json::to_string_pretty(&report.persisted)?);
            print!("{summary}");
        }
        Commands::Latest { limit, db } => {
            let ni = open_store(config, db)?;
            let articles = ni.latest_news(Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
        Commands::Stocks { symbols, db } => {
            let ni = open_store(config, db)?;
            let articles = ni.news_for_stocks(&symbols)?;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
    }
    Ok(())
}

fn open_store(mut config: IngestConfig, db: Option<String>) -> Result<NewsIntel, Box<dyn std::error::Error>> {
    if db.is_some() {
        config.db_path = db;
    }
    if config.db_path.is_none() {
        return Err("no database configured: pass --db or set NEWSINTEL_DB".into());
    }
    config.snapshot_path = None;
    Ok(NewsIntel::new(&config)?)
}
