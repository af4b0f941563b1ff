use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newsintel", about = "Indian market news scraper and stock relevance index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape all sources, score and rank the stories, then persist them
    Ingest {
        /// Snapshot file (overrides NEWSINTEL_SNAPSHOT)
        #[arg(long, conflicts_with = "no_snapshot")]
        snapshot: Option<PathBuf>,
        /// Skip the JSON snapshot
        #[arg(long)]
        no_snapshot: bool,
        /// SQLite database path (overrides NEWSINTEL_DB)
        #[arg(long)]
        db: Option<String>,
        /// Pause between pages of the same site, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Per-request timeout, in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Most recently published stored articles
    Latest {
        #[arg(long, default_value = "20")]
        limit: usize,
        #[arg(long)]
        db: Option<String>,
    },
    /// Stored articles mentioning any of the given NSE symbols
    Stocks {
        #[arg(required = true)]
        symbols: Vec<String>,
        #[arg(long)]
        db: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingest_flags() {
        let cli = Cli::parse_from([
            "newsintel", "ingest", "--db", "news.db", "--no-snapshot", "--delay-ms", "0",
        ]);
        match cli.command {
            Commands::Ingest {
                snapshot,
                no_snapshot,
                db,
                delay_ms,
                timeout_secs,
            } => {
                assert_eq!(snapshot, None);
                assert!(no_snapshot);
                assert_eq!(db.as_deref(), Some("news.db"));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(timeout_secs, None);
            }
            _ => panic!("expected ingest"),
        }
    }

    #[test]
    fn test_snapshot_conflicts_with_no_snapshot() {
        let parsed = Cli::try_parse_from([
            "newsintel", "ingest", "--snapshot", "out.json", "--no-snapshot",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_stocks_requires_symbol() {
        assert!(Cli::try_parse_from(["newsintel", "stocks"]).is_err());
        let cli = Cli::parse_from(["newsintel", "stocks", "tcs", "INFY"]);
        assert!(matches!(cli.command, Commands::Stocks { ref symbols, .. } if symbols.len() == 2));
    }
}
