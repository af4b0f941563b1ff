use crate::domain::error::FetchError;
use async_trait::async_trait;

/// Retrieves raw page bytes for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
