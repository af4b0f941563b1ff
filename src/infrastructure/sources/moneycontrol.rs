use super::{LinkMode, SiteLayout};
use crate::domain::values::news_source::NewsSource;

/// Moneycontrol business listings: `li.clearfix` items, headline in `h2`
/// (or a bare anchor), relative timestamp in `span.ago`.
pub const LAYOUT: SiteLayout = SiteLayout {
    source: NewsSource::Moneycontrol,
    origin: "https://www.moneycontrol.com",
    pages: &[
        "/news/business/",
        "/news/business/markets/",
        "/news/business/earnings/",
    ],
    container: "li.clearfix",
    max_items: 15,
    headline_chain: &["h2", "a"],
    link_mode: LinkMode::HeadlineElement,
    summary: Some("p"),
    time: Some("span.ago"),
};
