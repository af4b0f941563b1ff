use crate::application::dedupe::dedupe;
use crate::application::enrich::Enricher;
use crate::application::persist::{PersistOutcome, PersistenceSink};
use crate::application::rank::rank;
use crate::domain::entities::article::Article;
use crate::domain::values::news_source::NewsSource;
use crate::infrastructure::sources::NewsFeed;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Per-source bookkeeping for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedReport {
    pub source: NewsSource,
    pub candidates: usize,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub candidates_rejected: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Deduplicated articles, highest impact first.
    pub articles: Vec<Article>,
    pub feeds: Vec<FeedReport>,
    pub enrichment_rejected: usize,
    pub duplicates_dropped: usize,
    pub persisted: PersistOutcome,
}

/// One scrape-enrich-rank-persist pass over every configured feed.
///
/// The run never fails as a whole: a feed that errors contributes nothing and
/// the remaining feeds still run.
pub struct IngestUseCase {
    feeds: Vec<Arc<dyn NewsFeed>>,
    enricher: Enricher,
    sink: PersistenceSink,
}

impl IngestUseCase {
    pub fn new(feeds: Vec<Arc<dyn NewsFeed>>, enricher: Enricher, sink: PersistenceSink) -> Self {
        Self {
            feeds,
            enricher,
            sink,
        }
    }

    #[instrument(level = "info", skip_all, fields(feeds = self.feeds.len()))]
    pub async fn run(&self) -> IngestReport {
        let mut candidates = Vec::new();
        let mut feeds = Vec::with_capacity(self.feeds.len());

        for feed in &self.feeds {
            match feed.collect().await {
                Ok(outcome) => {
                    feeds.push(FeedReport {
                        source: outcome.source,
                        candidates: outcome.candidates.len(),
                        pages_fetched: outcome.pages_fetched,
                        pages_failed: outcome.pages_failed,
                        candidates_rejected: outcome.candidates_rejected,
                        error: None,
                    });
                    candidates.extend(outcome.candidates);
                }
                Err(e) => {
                    error!(source = %feed.source(), error = %e, "feed failed");
                    feeds.push(FeedReport {
                        source: feed.source(),
                        candidates: 0,
                        pages_fetched: 0,
                        pages_failed: 0,
                        candidates_rejected: 0,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let candidate_count = candidates.len();
        let enriched = self.enricher.enrich_all(candidates);
        let enrichment_rejected = candidate_count - enriched.len();

        let enriched_count = enriched.len();
        let unique = dedupe(enriched);
        let duplicates_dropped = enriched_count - unique.len();

        let articles = rank(unique);
        info!(
            candidates = candidate_count,
            articles = articles.len(),
            duplicates = duplicates_dropped,
            "ranked articles"
        );

        let persisted = self.sink.persist(&articles).await;

        IngestReport {
            articles,
            feeds,
            enrichment_rejected,
            duplicates_dropped,
            persisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::article::RawCandidate;
    use crate::domain::values::lexicon::SentimentLexicon;
    use crate::domain::values::sentiment::Sentiment;
    use crate::domain::values::symbol_table::SymbolTable;
    use crate::infrastructure::sources::{FeedError, FeedOutcome};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    struct FixedFeed {
        source: NewsSource,
        candidates: Vec<RawCandidate>,
    }

    #[async_trait]
    impl NewsFeed for FixedFeed {
        fn source(&self) -> NewsSource {
            self.source
        }

        async fn collect(&self) -> Result<FeedOutcome, FeedError> {
            Ok(FeedOutcome {
                source: self.source,
                candidates: self.candidates.clone(),
                pages_fetched: 1,
                pages_failed: 0,
                candidates_rejected: 0,
            })
        }
    }

    struct BrokenFeed;

    #[async_trait]
    impl NewsFeed for BrokenFeed {
        fn source(&self) -> NewsSource {
            NewsSource::BusinessStandard
        }

        async fn collect(&self) -> Result<FeedOutcome, FeedError> {
            Err(FeedError::Config("bad selector 'li['".into()))
        }
    }

    fn candidate(source: NewsSource, headline: &str, path: &str, hours_ago: i64) -> RawCandidate {
        RawCandidate {
            source,
            headline: headline.into(),
            summary: headline.into(),
            url: format!("https://news.example/{path}"),
            published_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    fn use_case(feeds: Vec<Arc<dyn NewsFeed>>) -> IngestUseCase {
        IngestUseCase::new(
            feeds,
            Enricher::new(
                Arc::new(SymbolTable::nse_default()),
                Arc::new(SentimentLexicon::market_default()),
            ),
            PersistenceSink::new(None, None),
        )
    }

    #[tokio::test]
    async fn test_broken_feed_does_not_stop_run() {
        let mc = FixedFeed {
            source: NewsSource::Moneycontrol,
            candidates: vec![candidate(
                NewsSource::Moneycontrol,
                "TCS shares surge 5% on strong Q4 earnings beat",
                "tcs",
                2,
            )],
        };
        let report = use_case(vec![Arc::new(BrokenFeed), Arc::new(mc)]).run().await;

        assert_eq!(report.articles.len(), 1);
        assert_eq!(report.feeds.len(), 2);
        assert!(report.feeds[0].error.as_deref().unwrap().contains("bad selector"));
        assert_eq!(report.feeds[1].candidates, 1);

        let tcs = &report.articles[0];
        assert_eq!(tcs.sentiment(), Sentiment::Positive);
        assert_eq!(tcs.impact_score().value(), 0.8);
    }

    #[tokio::test]
    async fn test_cross_source_duplicates_and_ranking() {
        let mc = FixedFeed {
            source: NewsSource::Moneycontrol,
            candidates: vec![
                candidate(NewsSource::Moneycontrol, "Markets close flat ahead of holiday", "flat", 1),
                candidate(NewsSource::Moneycontrol, "Infosys and Wipro rally on strong deal wins", "it", 3),
            ],
        };
        let et = FixedFeed {
            source: NewsSource::EconomicTimes,
            candidates: vec![candidate(
                NewsSource::EconomicTimes,
                "Infosys and Wipro Rally on strong deal wins!",
                "it-et",
                0,
            )],
        };
        let report = use_case(vec![Arc::new(mc), Arc::new(et)]).run().await;

        assert_eq!(report.duplicates_dropped, 1);
        assert_eq!(report.articles.len(), 2);
        // first-seen copy survives and outranks the neutral story
        assert_eq!(report.articles[0].source(), NewsSource::Moneycontrol);
        assert!(report.articles[0].headline().starts_with("Infosys"));
        assert_eq!(report.articles[0].impact_score().value(), 0.9);
        assert_eq!(report.articles[1].impact_score().value(), 0.5);
    }

    #[tokio::test]
    async fn test_no_feeds_is_empty_report() {
        let report = use_case(Vec::new()).run().await;
        assert!(report.articles.is_empty());
        assert_eq!(report.persisted, PersistOutcome::default());
    }
}
