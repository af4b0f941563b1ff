use crate::domain::entities::article::Article;
use crate::domain::error::PersistenceError;
use crate::domain::ports::news_repository::{NewsRepository, StoredArticle};

/// Stands in for a configured database that could not be opened.
///
/// Every call fails with the original connection error, so writes are counted
/// as per-article failures and the rest of the run is unaffected.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> PersistenceError {
        PersistenceError::Connection(self.reason.clone())
    }
}

impl NewsRepository for UnavailableStore {
    fn insert_article(&self, _article: &Article) -> Result<bool, PersistenceError> {
        Err(self.error())
    }

    fn latest(&self, _limit: usize) -> Result<Vec<StoredArticle>, PersistenceError> {
        Err(self.error())
    }

    fn for_symbols(&self, _symbols: &[String]) -> Result<Vec<StoredArticle>, PersistenceError> {
        Err(self.error())
    }

    fn article_count(&self) -> Result<usize, PersistenceError> {
        Err(self.error())
    }

    fn relevance_count(&self) -> Result<usize, PersistenceError> {
        Err(self.error())
    }
}
