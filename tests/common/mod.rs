//! Shared test helpers.
#![allow(dead_code)]

use chrono::{Duration, Utc};
use newsintel::domain::entities::article::{Article, RawCandidate};
use newsintel::domain::ports::news_repository::NewsRepository;
use newsintel::domain::ports::page_fetcher::PageFetcher;
use newsintel::domain::values::impact::ImpactScore;
use newsintel::domain::values::news_source::NewsSource;
use newsintel::domain::values::sentiment::Sentiment;
use newsintel::infrastructure::http::fetcher::HttpFetcher;
use newsintel::infrastructure::sources::{NewsFeed, SiteLayout, SourceAdapter};
use newsintel::open_repository;
use std::collections::BTreeSet;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MONEYCONTROL_BUSINESS: &str = r#"
<html><body><ul>
  <li class="clearfix">
    <h2><a href="/news/business/markets/tcs-q4-123.html">TCS shares surge 5% on strong Q4 earnings beat</a></h2>
    <span class="ago">2 hours ago</span>
  </li>
  <li class="clearfix">
    <h2><a href="/news/business/short.html">Markets!</a></h2>
  </li>
</ul></body></html>"#;

pub const MONEYCONTROL_MARKETS: &str = r#"
<ul>
  <li class="clearfix">
    <h2><a href="/news/business/markets/it-rally-7.html">Infosys and Wipro rally on strong deal wins</a></h2>
    <p>Large deal momentum continued into the new quarter.</p>
    <span class="ago">30 minutes ago</span>
  </li>
</ul>"#;

pub const ECONOMIC_TIMES_MARKETS: &str = r#"
<div class="eachStory">
  <h3><a href="/markets/stocks/news/hdfc-bank-slides/articleshow/11.cms">HDFC Bank shares slide on weak loan growth</a></h3>
  <p>Margins under pressure.</p>
</div>
<div class="eachStory">
  <h3><a href="/markets/stocks/news/it-rally/articleshow/12.cms">Infosys and Wipro rally on strong deal wins</a></h3>
</div>"#;

pub const ECONOMIC_TIMES_EARNINGS: &str = r#"
<div class="eachStory">
  <h2><a href="https://economictimes.indiatimes.com/markets/earnings/maruti/13.cms">Maruti Suzuki quarterly profit beats estimates</a></h2>
</div>"#;

pub const BUSINESS_STANDARD_COMPANIES: &str = r#"
<div class="listingstyle">
  <h2><a href="/companies/news/reliance-jio-14">Reliance Industries board to consider bonus issue</a></h2>
  <p>Shareholders could receive one bonus share for each held.</p>
</div>"#;

pub async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// A live adapter for `layout`, pointed at `server` with no pacing.
pub fn feed(layout: SiteLayout, server: &MockServer, timeout: std::time::Duration) -> Arc<dyn NewsFeed> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(timeout).unwrap());
    Arc::new(
        SourceAdapter::new(layout, fetcher, std::time::Duration::ZERO).with_origin(server.uri()),
    )
}

pub fn setup_repo() -> Arc<dyn NewsRepository> {
    open_repository(":memory:").unwrap()
}

pub fn make_article(url: &str, headline: &str, symbols: &[&str], hours_ago: i64) -> Article {
    let symbols: BTreeSet<String> = symbols.iter().map(|s| s.to_string()).collect();
    Article::new(
        RawCandidate {
            source: NewsSource::Moneycontrol,
            headline: headline.to_string(),
            summary: headline.to_string(),
            url: url.to_string(),
            published_at: Utc::now() - Duration::hours(hours_ago),
        },
        Sentiment::Neutral,
        symbols.clone(),
        ImpactScore::from_signals(Sentiment::Neutral, symbols.len()),
    )
    .unwrap()
}
