use crate::domain::values::news_source::NewsSource;
use std::path::PathBuf;
use thiserror::Error;

/// One page could not be retrieved.
#[derive(Debug, Error)]
#[error("Fetch failed for {url}: {cause}")]
pub struct FetchError {
    pub url: String,
    pub cause: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            url: url.into(),
            cause: cause.to_string(),
        }
    }
}

/// A listing-page candidate did not have the structure its layout expects.
#[derive(Debug, Error)]
#[error("Parse error ({source_name}): {reason}")]
pub struct ParseError {
    pub source_name: NewsSource,
    pub reason: String,
}

impl ParseError {
    pub fn new(source_name: NewsSource, reason: impl Into<String>) -> Self {
        Self {
            source_name,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database write error: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
#[error("Snapshot export to {path:?} failed: {reason}")]
pub struct ExportError {
    pub path: PathBuf,
    pub reason: String,
}

/// Errors surfaced by the facade; the ingestion run itself never returns one.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<PersistenceError> for DomainError {
    fn from(e: PersistenceError) -> Self {
        DomainError::Database(e.to_string())
    }
}
