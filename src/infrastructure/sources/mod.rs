//! Listing-page adapters for the supported news sites.
//!
//! Every site is scraped by the same [`SourceAdapter`]; what differs is the
//! [`SiteLayout`] it is constructed with (pages to visit, container selector,
//! headline fallback chain, summary/time selectors, origin).

pub mod business_standard;
pub mod economic_times;
pub mod moneycontrol;

use crate::domain::entities::article::{is_absolute, RawCandidate, MIN_HEADLINE_CHARS};
use crate::domain::error::ParseError;
use crate::domain::ports::page_fetcher::PageFetcher;
use crate::domain::values::news_source::NewsSource;
use crate::domain::values::relative_time::parse_relative_time;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Pause between consecutive page requests to the same site.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// A source of raw candidates, run once per ingestion.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    fn source(&self) -> NewsSource;

    async fn collect(&self) -> Result<FeedOutcome, FeedError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The layout itself is unusable, so no page can be read.
    #[error("Config error: {0}")]
    Config(String),
}

/// What one feed produced, with per-page bookkeeping.
#[derive(Debug, Clone)]
pub struct FeedOutcome {
    pub source: NewsSource,
    pub candidates: Vec<RawCandidate>,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub candidates_rejected: usize,
}

impl FeedOutcome {
    fn empty(source: NewsSource) -> Self {
        Self {
            source,
            candidates: Vec::new(),
            pages_fetched: 0,
            pages_failed: 0,
            candidates_rejected: 0,
        }
    }
}

/// How the headline text and link are read once the headline element is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Headline text is the element's own text; the link is its own `href`
    /// when the element is an anchor, else the first `a[href]` inside it.
    HeadlineElement,
    /// The headline element must wrap an anchor, whose text is the headline.
    NestedAnchor,
}

/// Structural rules for one site's listing pages.
#[derive(Debug, Clone, Copy)]
pub struct SiteLayout {
    pub source: NewsSource,
    pub origin: &'static str,
    pub pages: &'static [&'static str],
    pub container: &'static str,
    pub max_items: usize,
    pub headline_chain: &'static [&'static str],
    pub link_mode: LinkMode,
    pub summary: Option<&'static str>,
    pub time: Option<&'static str>,
}

struct Selectors {
    container: Selector,
    headline_chain: Vec<Selector>,
    anchor: Selector,
    summary: Option<Selector>,
    time: Option<Selector>,
}

impl Selectors {
    fn compile(layout: &SiteLayout) -> Result<Self, ParseError> {
        let parse = |css: &str| {
            Selector::parse(css)
                .map_err(|e| ParseError::new(layout.source, format!("bad selector '{css}': {e:?}")))
        };
        Ok(Self {
            container: parse(layout.container)?,
            headline_chain: layout
                .headline_chain
                .iter()
                .map(|css| parse(css))
                .collect::<Result<_, _>>()?,
            anchor: parse("a")?,
            summary: layout.summary.map(parse).transpose()?,
            time: layout.time.map(parse).transpose()?,
        })
    }
}

pub struct SourceAdapter {
    layout: SiteLayout,
    origin: String,
    fetcher: Arc<dyn PageFetcher>,
    page_delay: Duration,
}

impl SourceAdapter {
    pub fn new(layout: SiteLayout, fetcher: Arc<dyn PageFetcher>, page_delay: Duration) -> Self {
        Self {
            layout,
            origin: layout.origin.to_string(),
            fetcher,
            page_delay,
        }
    }

    /// Point the adapter at another origin (a mirror or a local test server).
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    pub fn page_urls(&self) -> Vec<String> {
        self.layout
            .pages
            .iter()
            .map(|p| format!("{}{}", self.origin, p))
            .collect()
    }

    /// Pull candidates out of one listing page.
    ///
    /// The outer error covers the whole page; inner errors cover one candidate.
    /// Candidates whose headline is too short are dropped silently.
    pub fn extract(
        &self,
        html: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<Vec<Result<RawCandidate, ParseError>>, ParseError> {
        let selectors = Selectors::compile(&self.layout)?;
        let document = Html::parse_document(html);

        let results = document
            .select(&selectors.container)
            .take(self.layout.max_items)
            .filter_map(|item| {
                self.extract_candidate(item, &selectors, captured_at)
                    .transpose()
            })
            .collect();
        Ok(results)
    }

    fn extract_candidate(
        &self,
        item: ElementRef,
        selectors: &Selectors,
        captured_at: DateTime<Utc>,
    ) -> Result<Option<RawCandidate>, ParseError> {
        let source = self.layout.source;
        let headline_el = selectors
            .headline_chain
            .iter()
            .find_map(|sel| item.select(sel).next())
            .ok_or_else(|| ParseError::new(source, "no headline element"))?;

        let (headline, href) = match self.layout.link_mode {
            LinkMode::HeadlineElement => {
                let href = if headline_el.value().name() == "a" {
                    headline_el.value().attr("href")
                } else {
                    headline_el
                        .select(&selectors.anchor)
                        .find_map(|a| a.value().attr("href"))
                };
                (element_text(headline_el), href)
            }
            LinkMode::NestedAnchor => {
                let anchor = headline_el
                    .select(&selectors.anchor)
                    .next()
                    .ok_or_else(|| ParseError::new(source, "headline has no link"))?;
                (element_text(anchor), anchor.value().attr("href"))
            }
        };

        if headline.chars().count() <= MIN_HEADLINE_CHARS {
            debug!(%source, %headline, "dropping short headline");
            return Ok(None);
        }

        let href = href
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ParseError::new(source, format!("no link target for '{headline}'")))?;
        let url = self.absolutize(href);

        let summary = selectors
            .summary
            .as_ref()
            .and_then(|sel| item.select(sel).next())
            .map(element_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| headline.clone());

        let published_at = selectors
            .time
            .as_ref()
            .and_then(|sel| item.select(sel).next())
            .map(|el| parse_relative_time(&element_text(el), captured_at))
            .unwrap_or(captured_at);

        Ok(Some(RawCandidate {
            source,
            headline,
            summary,
            url,
            published_at,
        }))
    }

    fn absolutize(&self, href: &str) -> String {
        if is_absolute(href) {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.origin, href)
        } else {
            format!("{}/{}", self.origin, href)
        }
    }
}

#[async_trait]
impl NewsFeed for SourceAdapter {
    fn source(&self) -> NewsSource {
        self.layout.source
    }

    #[instrument(level = "info", skip_all, fields(source = %self.layout.source))]
    async fn collect(&self) -> Result<FeedOutcome, FeedError> {
        Selectors::compile(&self.layout).map_err(|e| FeedError::Config(e.to_string()))?;
        let mut outcome = FeedOutcome::empty(self.layout.source);

        for (i, url) in self.page_urls().into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.page_delay).await;
            }

            let bytes = match self.fetcher.fetch(&url).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    error!(%url, error = %e, "page fetch failed");
                    outcome.pages_failed += 1;
                    continue;
                }
            };

            let html = String::from_utf8_lossy(&bytes);
            match self.extract(&html, Utc::now()) {
                Ok(results) => {
                    outcome.pages_fetched += 1;
                    for result in results {
                        match result {
                            Ok(candidate) => outcome.candidates.push(candidate),
                            Err(e) => {
                                warn!(%url, error = %e, "skipping candidate");
                                outcome.candidates_rejected += 1;
                            }
                        }
                    }
                }
                Err(e) => {
                    error!(%url, error = %e, "page parse failed");
                    outcome.pages_failed += 1;
                }
            }
        }

        info!(
            count = outcome.candidates.len(),
            pages_fetched = outcome.pages_fetched,
            pages_failed = outcome.pages_failed,
            "collected candidates"
        );
        Ok(outcome)
    }
}

/// Visible text with runs of whitespace collapsed.
fn element_text(el: ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::domain::error::FetchError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned bodies by URL; anything else is a fetch error.
    #[derive(Default)]
    pub struct StaticFetcher {
        pages: HashMap<String, String>,
        pub requested: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        pub fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .map(|b| b.as_bytes().to_vec())
                .ok_or_else(|| FetchError::new(url, "connection refused"))
        }
    }
}
