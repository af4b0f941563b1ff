use crate::domain::values::impact::ImpactScore;
use crate::domain::values::news_source::NewsSource;
use crate::domain::values::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Headlines this short (after trimming) are navigation links, not stories.
pub const MIN_HEADLINE_CHARS: usize = 10;

/// A story as pulled off a listing page, before enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    pub source: NewsSource,
    pub headline: String,
    pub summary: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

impl RawCandidate {
    /// Headline and summary joined, as fed to the symbol and sentiment scorers.
    pub fn analysis_text(&self) -> String {
        format!("{} {}", self.headline, self.summary)
    }
}

/// An enriched news item. Fields are read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    headline: String,
    summary: String,
    source: NewsSource,
    url: String,
    published_at: DateTime<Utc>,
    sentiment: Sentiment,
    #[serde(rename = "relevant_stocks")]
    relevant_symbols: BTreeSet<String>,
    impact_score: ImpactScore,
}

impl Article {
    pub fn new(
        candidate: RawCandidate,
        sentiment: Sentiment,
        relevant_symbols: BTreeSet<String>,
        impact_score: ImpactScore,
    ) -> Result<Self, String> {
        if candidate.url.is_empty() || !is_absolute(&candidate.url) {
            return Err(format!("Article URL must be absolute, got '{}'", candidate.url));
        }
        if candidate.headline.trim().chars().count() <= MIN_HEADLINE_CHARS {
            return Err(format!("Headline too short: '{}'", candidate.headline));
        }

        Ok(Self {
            headline: candidate.headline,
            summary: candidate.summary,
            source: candidate.source,
            url: candidate.url,
            published_at: candidate.published_at,
            sentiment,
            relevant_symbols,
            impact_score,
        })
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn source(&self) -> NewsSource {
        self.source
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn relevant_symbols(&self) -> &BTreeSet<String> {
        &self.relevant_symbols
    }

    pub fn impact_score(&self) -> ImpactScore {
        self.impact_score
    }
}

pub(crate) fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
