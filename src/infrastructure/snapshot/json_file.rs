//! Pretty-printed JSON snapshot of a run's ranked articles.
//!
//! The file is a UTF-8 array of records with `headline`, `summary`, `source`,
//! `url`, `published_at` (RFC 3339), `sentiment`, `relevant_stocks` and
//! `impact_score`. Each run replaces the previous file: the JSON is written to
//! a hidden sibling first and then renamed over the destination.

use crate::domain::entities::article::Article;
use crate::domain::error::ExportError;
use crate::domain::ports::snapshot_writer::SnapshotWriter;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const DEFAULT_SNAPSHOT_PATH: &str = "scraped_news.json";

pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".into());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn export_error(&self, reason: impl ToString) -> ExportError {
        ExportError {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl SnapshotWriter for JsonFileSnapshot {
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    async fn write(&self, articles: &[Article]) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(articles).map_err(|e| self.export_error(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.export_error(e))?;
        }

        let staging = self.staging_path();
        fs::write(&staging, json.as_bytes())
            .await
            .map_err(|e| self.export_error(e))?;
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(self.export_error(e));
        }

        info!(count = articles.len(), "wrote snapshot");
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
