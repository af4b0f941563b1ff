use crate::infrastructure::http::fetcher::DEFAULT_TIMEOUT;
use crate::infrastructure::snapshot::json_file::DEFAULT_SNAPSHOT_PATH;
use crate::infrastructure::sources::DEFAULT_PAGE_DELAY;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Runtime settings for an ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestConfig {
    /// SQLite path; `None` skips the durable store.
    pub db_path: Option<String>,
    /// Snapshot destination; `None` skips the JSON export.
    pub snapshot_path: Option<PathBuf>,
    pub fetch_timeout: Duration,
    pub page_delay: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            snapshot_path: Some(PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            fetch_timeout: DEFAULT_TIMEOUT,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

impl IngestConfig {
    /// Read `NEWSINTEL_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = non_empty("NEWSINTEL_DB")
            .and_then(|v| sqlite_path("NEWSINTEL_DB", v))
            .or_else(|| non_empty("DATABASE_URL").and_then(|v| sqlite_path("DATABASE_URL", v)));
        let snapshot_path = non_empty("NEWSINTEL_SNAPSHOT")
            .map(PathBuf::from)
            .or(defaults.snapshot_path);

        let fetch_timeout = non_empty("NEWSINTEL_TIMEOUT_SECS")
            .and_then(|v| parse_number("NEWSINTEL_TIMEOUT_SECS", &v))
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch_timeout);
        let page_delay = non_empty("NEWSINTEL_PAGE_DELAY_MS")
            .and_then(|v| parse_number("NEWSINTEL_PAGE_DELAY_MS", &v))
            .map(Duration::from_millis)
            .unwrap_or(defaults.page_delay);

        Self {
            db_path,
            snapshot_path,
            fetch_timeout,
            page_delay,
        }
    }
}

/// Only plain file paths name a SQLite store; `postgres://...` and other URLs are ignored.
fn sqlite_path(key: &str, value: String) -> Option<String> {
    if value.contains("://") {
        warn!(key, "ignoring database URL, expected a SQLite file path");
        return None;
    }
    Some(value)
}

fn parse_number(key: &str, value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(key, value, error = %e, "ignoring invalid setting, using default");
            None
        }
    }
}
