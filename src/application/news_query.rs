use crate::domain::error::DomainError;
use crate::domain::ports::news_repository::{NewsRepository, StoredArticle};
use crate::domain::values::symbol_table::SymbolTable;
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_LATEST_LIMIT: usize = 20;

pub struct NewsQueryUseCase {
    repo: Arc<dyn NewsRepository>,
    symbols: Arc<SymbolTable>,
}

impl NewsQueryUseCase {
    pub fn new(repo: Arc<dyn NewsRepository>, symbols: Arc<SymbolTable>) -> Self {
        Self { repo, symbols }
    }

    pub fn latest(&self, limit: Option<usize>) -> Result<Vec<StoredArticle>, DomainError> {
        Ok(self.repo.latest(limit.unwrap_or(DEFAULT_LATEST_LIMIT))?)
    }

    /// Articles linked to any of `symbols` (case-insensitive), newest first.
    pub fn for_stocks(&self, symbols: &[String]) -> Result<Vec<StoredArticle>, DomainError> {
        let symbols: Vec<String> = symbols
            .iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        if symbols.is_empty() {
            return Err(DomainError::InvalidInput("at least one stock symbol is required".into()));
        }
        for symbol in symbols.iter().filter(|s| !self.symbols.contains(s)) {
            warn!(%symbol, "symbol is not tracked, no articles are linked to it");
        }
        Ok(self.repo.for_symbols(&symbols)?)
    }
}
