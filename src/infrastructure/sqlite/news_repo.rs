use crate::domain::entities::article::Article;
use crate::domain::error::PersistenceError;
use crate::domain::ports::news_repository::*;
use crate::domain::values::news_source::NewsSource;
use crate::domain::values::sentiment::Sentiment;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;
use tracing::{debug, warn};

const SELECT_COLS: &str =
    "n.id, n.headline, n.summary, n.source, n.url, n.published_at, n.sentiment, n.impact_score";

pub struct SqliteNewsRepo {
    conn: Mutex<Connection>,
}

impl SqliteNewsRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_article(row: &rusqlite::Row) -> Result<StoredArticle, rusqlite::Error> {
        let source_str: String = row.get(3)?;
        let published_str: String = row.get(5)?;
        let sentiment_str: String = row.get(6)?;

        Ok(StoredArticle {
            id: row.get(0)?,
            headline: row.get(1)?,
            summary: row.get(2)?,
            source: source_str.parse().unwrap_or_else(|_| {
                warn!(source = %source_str, "invalid source in row, defaulting to Moneycontrol");
                NewsSource::Moneycontrol
            }),
            url: row.get(4)?,
            published_at: DateTime::parse_from_rfc3339(&published_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            sentiment: sentiment_str.parse().unwrap_or_else(|_| {
                warn!(sentiment = %sentiment_str, "invalid sentiment in row, defaulting to neutral");
                Sentiment::default()
            }),
            impact_score: row.get(7)?,
            relevant_stocks: Vec::new(),
        })
    }

    fn attach_symbols(
        conn: &Connection,
        mut articles: Vec<StoredArticle>,
    ) -> Result<Vec<StoredArticle>, PersistenceError> {
        let mut stmt = conn
            .prepare(
                "SELECT stock_symbol FROM news_stock_relevance WHERE news_id = ?1 ORDER BY stock_symbol",
            )
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        for article in &mut articles {
            article.relevant_stocks = stmt
                .query_map(params![article.id], |r| r.get::<_, String>(0))
                .map_err(|e| PersistenceError::Write(e.to_string()))?
                .filter_map(|r| r.ok())
                .collect();
        }
        Ok(articles)
    }
}

fn timestamp(dt: DateTime<Utc>) -> String {
    // Fixed width so the TEXT column sorts chronologically.
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl NewsRepository for SqliteNewsRepo {
    fn insert_article(&self, article: &Article) -> Result<bool, PersistenceError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        // Dropping the transaction without commit rolls back this article only.
        let tx = conn
            .transaction()
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        let inserted = tx
            .execute(
                "INSERT INTO news_articles (headline, summary, source, url, published_at, sentiment, impact_score, scraped_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(url) DO NOTHING",
                params![
                    article.headline(),
                    article.summary(),
                    article.source().to_string(),
                    article.url(),
                    timestamp(article.published_at()),
                    article.sentiment().to_string(),
                    article.impact_score().value(),
                    timestamp(Utc::now()),
                ],
            )
            .map_err(|e| PersistenceError::Write(format!("Failed to insert article: {e}")))?;

        if inserted == 0 {
            debug!(url = article.url(), "article already stored");
            return Ok(false);
        }

        let news_id = tx.last_insert_rowid();
        for symbol in article.relevant_symbols() {
            tx.execute(
                "INSERT INTO news_stock_relevance (news_id, stock_symbol, relevance_score)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT DO NOTHING",
                params![news_id, symbol, DEFAULT_RELEVANCE],
            )
            .map_err(|e| PersistenceError::Write(format!("Failed to insert relevance: {e}")))?;
        }

        tx.commit()
            .map_err(|e| PersistenceError::Write(format!("Commit failed: {e}")))?;
        Ok(true)
    }

    fn latest(&self, limit: usize) -> Result<Vec<StoredArticle>, PersistenceError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM news_articles n ORDER BY n.published_at DESC, n.id ASC LIMIT ?1"
        );
        let articles = {
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| PersistenceError::Write(e.to_string()))?;
            let rows: Vec<StoredArticle> = stmt
                .query_map(params![limit as i64], Self::row_to_article)
                .map_err(|e| PersistenceError::Write(e.to_string()))?
                .filter_map(|r| r.ok())
                .collect();
            rows
        };
        Self::attach_symbols(&conn, articles)
    }

    fn for_symbols(&self, symbols: &[String]) -> Result<Vec<StoredArticle>, PersistenceError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self
            .conn
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;

        let placeholders: Vec<String> = (1..=symbols.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "SELECT DISTINCT {SELECT_COLS} FROM news_articles n
             JOIN news_stock_relevance r ON n.id = r.news_id
             WHERE r.stock_symbol IN ({})
             ORDER BY n.published_at DESC, n.id ASC",
            placeholders.join(", ")
        );
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            symbols.iter().map(|s| s as &dyn rusqlite::types::ToSql).collect();

        let articles = {
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| PersistenceError::Write(e.to_string()))?;
            let rows: Vec<StoredArticle> = stmt
                .query_map(params_refs.as_slice(), Self::row_to_article)
                .map_err(|e| PersistenceError::Write(e.to_string()))?
                .filter_map(|r| r.ok())
                .collect();
            rows
        };
        Self::attach_symbols(&conn, articles)
    }

    fn article_count(&self) -> Result<usize, PersistenceError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        conn.query_row("SELECT COUNT(*) FROM news_articles", [], |r| r.get::<_, i64>(0))
            .map(|n| n as usize)
            .map_err(|e| PersistenceError::Write(e.to_string()))
    }

    fn relevance_count(&self) -> Result<usize, PersistenceError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        conn.query_row("SELECT COUNT(*) FROM news_stock_relevance", [], |r| r.get::<_, i64>(0))
            .map(|n| n as usize)
            .map_err(|e| PersistenceError::Write(e.to_string()))
    }
}
