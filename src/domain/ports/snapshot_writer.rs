use crate::domain::entities::article::Article;
use crate::domain::error::ExportError;
use async_trait::async_trait;

/// Writes the ranked article list to a portable snapshot, replacing any previous one.
#[async_trait]
pub trait SnapshotWriter: Send + Sync {
    async fn write(&self, articles: &[Article]) -> Result<(), ExportError>;

    /// Where the snapshot lands, for logging.
    fn destination(&self) -> String;
}
