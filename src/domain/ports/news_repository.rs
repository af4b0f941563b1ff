use crate::domain::entities::article::Article;
use crate::domain::error::PersistenceError;
use crate::domain::values::news_source::NewsSource;
use crate::domain::values::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Weight recorded on every article→symbol edge.
pub const DEFAULT_RELEVANCE: f64 = 0.8;

/// An article row as read back from the store.
#[derive(Debug, Clone, Serialize)]
pub struct StoredArticle {
    pub id: i64,
    pub headline: String,
    pub summary: String,
    pub source: NewsSource,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub impact_score: f64,
    pub relevant_stocks: Vec<String>,
}

pub trait NewsRepository: Send + Sync {
    /// Insert keyed by URL, ignoring conflicts. Relevance edges are written only
    /// for a newly inserted row. Returns whether a row was inserted.
    fn insert_article(&self, article: &Article) -> Result<bool, PersistenceError>;
    fn latest(&self, limit: usize) -> Result<Vec<StoredArticle>, PersistenceError>;
    fn for_symbols(&self, symbols: &[String]) -> Result<Vec<StoredArticle>, PersistenceError>;
    fn article_count(&self) -> Result<usize, PersistenceError>;
    fn relevance_count(&self) -> Result<usize, PersistenceError>;
}
