use crate::domain::error::PersistenceError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), PersistenceError> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS news_articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            headline TEXT NOT NULL,
            summary TEXT NOT NULL,
            source TEXT NOT NULL,
            url TEXT NOT NULL UNIQUE,
            published_at TEXT NOT NULL,
            sentiment TEXT NOT NULL,
            impact_score REAL NOT NULL,
            scraped_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS news_stock_relevance (
            news_id INTEGER NOT NULL REFERENCES news_articles(id) ON DELETE CASCADE,
            stock_symbol TEXT NOT NULL,
            relevance_score REAL NOT NULL,
            UNIQUE (news_id, stock_symbol)
        );

        CREATE INDEX IF NOT EXISTS idx_news_published ON news_articles(published_at);
        CREATE INDEX IF NOT EXISTS idx_relevance_symbol ON news_stock_relevance(stock_symbol);
        ",
    )
    .map_err(|e| PersistenceError::Connection(format!("Migration failed: {e}")))
}
