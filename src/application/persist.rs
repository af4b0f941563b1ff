use crate::domain::entities::article::Article;
use crate::domain::ports::news_repository::NewsRepository;
use crate::domain::ports::snapshot_writer::SnapshotWriter;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn, Span};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistOutcome {
    pub snapshot_written: bool,
    pub rows_inserted: usize,
    pub rows_already_stored: usize,
    pub failures: usize,
}

/// Writes a run's ranked articles to the snapshot file and the database.
///
/// Either output may be absent. A failure in one never stops the other, and a
/// failed article never stops the rest of the batch.
pub struct PersistenceSink {
    snapshot: Option<Arc<dyn SnapshotWriter>>,
    repo: Option<Arc<dyn NewsRepository>>,
}

impl PersistenceSink {
    pub fn new(
        snapshot: Option<Arc<dyn SnapshotWriter>>,
        repo: Option<Arc<dyn NewsRepository>>,
    ) -> Self {
        Self { snapshot, repo }
    }

    #[instrument(level = "info", skip_all, fields(count = articles.len()))]
    pub async fn persist(&self, articles: &[Article]) -> PersistOutcome {
        let mut outcome = PersistOutcome::default();

        if let Some(snapshot) = &self.snapshot {
            match snapshot.write(articles).await {
                Ok(()) => outcome.snapshot_written = true,
                Err(e) => error!(
                    destination = %snapshot.destination(),
                    error = %e,
                    "snapshot export failed"
                ),
            }
        }

        let Some(repo) = &self.repo else {
            info!("no database configured, skipping durable store");
            return outcome;
        };

        // Repository calls block.
        let repo = Arc::clone(repo);
        let batch = articles.to_vec();
        let span = Span::current();
        let stored = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            store_batch(repo.as_ref(), &batch)
        })
        .await;

        match stored {
            Ok((inserted, already_stored, failures)) => {
                outcome.rows_inserted = inserted;
                outcome.rows_already_stored = already_stored;
                outcome.failures = failures;
            }
            Err(e) => {
                error!(error = %e, "durable store task failed");
                outcome.failures = articles.len();
            }
        }

        info!(
            inserted = outcome.rows_inserted,
            already_stored = outcome.rows_already_stored,
            failures = outcome.failures,
            "stored articles"
        );
        outcome
    }
}

/// Insert each article in its own transaction. Returns (inserted, already stored, failed).
fn store_batch(repo: &dyn NewsRepository, articles: &[Article]) -> (usize, usize, usize) {
    let (mut inserted, mut already_stored, mut failures) = (0, 0, 0);
    for article in articles {
        match repo.insert_article(article) {
            Ok(true) => inserted += 1,
            Ok(false) => already_stored += 1,
            Err(e) => {
                warn!(url = article.url(), error = %e, "failed to store article");
                failures += 1;
            }
        }
    }
    (inserted, already_stored, failures)
}
