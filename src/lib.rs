pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::enrich::Enricher;
use crate::application::ingest::{IngestReport, IngestUseCase};
use crate::application::news_query::NewsQueryUseCase;
use crate::application::persist::PersistenceSink;
use crate::config::IngestConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::news_repository::{NewsRepository, StoredArticle};
use crate::domain::ports::page_fetcher::PageFetcher;
use crate::domain::ports::snapshot_writer::SnapshotWriter;
use crate::domain::values::lexicon::SentimentLexicon;
use crate::domain::values::symbol_table::SymbolTable;
use crate::infrastructure::http::fetcher::HttpFetcher;
use crate::infrastructure::snapshot::json_file::JsonFileSnapshot;
use crate::infrastructure::sources::{
    business_standard, economic_times, moneycontrol, NewsFeed, SourceAdapter,
};
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::news_repo::SqliteNewsRepo;
use crate::infrastructure::sqlite::unavailable::UnavailableStore;
use rusqlite::Connection;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

pub struct NewsIntel {
    ingest_uc: IngestUseCase,
    query_uc: Option<NewsQueryUseCase>,
}

impl NewsIntel {
    /// Wire the three live sites, the configured snapshot and the configured database.
    pub fn new(config: &IngestConfig) -> Result<Self, DomainError> {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(
            HttpFetcher::new(config.fetch_timeout).map_err(|e| DomainError::Config(e.to_string()))?,
        );
        Ok(Self::with_feeds(config, default_feeds(fetcher, config.page_delay)))
    }

    /// Configured outputs around caller-supplied feeds.
    ///
    /// A database that cannot be opened is logged and replaced by a store that
    /// fails every call; scraping and the snapshot still run.
    pub fn with_feeds(config: &IngestConfig, feeds: Vec<Arc<dyn NewsFeed>>) -> Self {
        let snapshot: Option<Arc<dyn SnapshotWriter>> = config
            .snapshot_path
            .as_ref()
            .map(|p| Arc::new(JsonFileSnapshot::new(p.clone())) as Arc<dyn SnapshotWriter>);

        let repo = config.db_path.as_deref().map(connect_store);

        Self::with_components(feeds, snapshot, repo)
    }

    pub fn with_components(
        feeds: Vec<Arc<dyn NewsFeed>>,
        snapshot: Option<Arc<dyn SnapshotWriter>>,
        repo: Option<Arc<dyn NewsRepository>>,
    ) -> Self {
        let symbols = Arc::new(SymbolTable::nse_default());
        let enricher = Enricher::new(
            symbols.clone(),
            Arc::new(SentimentLexicon::market_default()),
        );
        Self {
            ingest_uc: IngestUseCase::new(
                feeds,
                enricher,
                PersistenceSink::new(snapshot, repo.clone()),
            ),
            query_uc: repo.map(|repo| NewsQueryUseCase::new(repo, symbols)),
        }
    }

    pub async fn ingest(&self) -> IngestReport {
        self.ingest_uc.run().await
    }

    pub fn latest_news(&self, limit: Option<usize>) -> Result<Vec<StoredArticle>, DomainError> {
        self.query()?.latest(limit)
    }

    pub fn news_for_stocks(&self, symbols: &[String]) -> Result<Vec<StoredArticle>, DomainError> {
        self.query()?.for_stocks(symbols)
    }

    fn query(&self) -> Result<&NewsQueryUseCase, DomainError> {
        self.query_uc
            .as_ref()
            .ok_or_else(|| DomainError::Config("no database configured (set NEWSINTEL_DB)".into()))
    }
}

/// Moneycontrol, Economic Times and Business Standard, in that order.
pub fn default_feeds(fetcher: Arc<dyn PageFetcher>, page_delay: Duration) -> Vec<Arc<dyn NewsFeed>> {
    [moneycontrol::LAYOUT, economic_times::LAYOUT, business_standard::LAYOUT]
        .into_iter()
        .map(|layout| {
            Arc::new(SourceAdapter::new(layout, fetcher.clone(), page_delay)) as Arc<dyn NewsFeed>
        })
        .collect()
}

fn connect_store(db_path: &str) -> Arc<dyn NewsRepository> {
    match open_repository(db_path) {
        Ok(repo) => repo,
        Err(e) => {
            error!(db = db_path, error = %e, "database unavailable, articles will not be stored");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}

/// Open (or create) the SQLite store at `db_path` and bring its schema up to date.
pub fn open_repository(db_path: &str) -> Result<Arc<dyn NewsRepository>, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    if db_path != ":memory:" {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    }
    run_migrations(&conn)?;
    Ok(Arc::new(SqliteNewsRepo::new(conn)))
}
