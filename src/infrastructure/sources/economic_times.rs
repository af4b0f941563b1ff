use super::{LinkMode, SiteLayout};
use crate::domain::values::news_source::NewsSource;

/// Economic Times market listings: `div.eachStory`, linked headline in `h3`
/// or `h2`. No usable timestamps, so stories take the capture time.
pub const LAYOUT: SiteLayout = SiteLayout {
    source: NewsSource::EconomicTimes,
    origin: "https://economictimes.indiatimes.com",
    pages: &["/markets", "/markets/stocks", "/markets/earnings"],
    container: "div.eachStory",
    max_items: 10,
    headline_chain: &["h3", "h2"],
    link_mode: LinkMode::NestedAnchor,
    summary: Some("p"),
    time: None,
};
