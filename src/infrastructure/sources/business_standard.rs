use super::{LinkMode, SiteLayout};
use crate::domain::values::news_source::NewsSource;

/// Business Standard listings: `div.listingstyle`, linked headline in `h2` or `h3`.
pub const LAYOUT: SiteLayout = SiteLayout {
    source: NewsSource::BusinessStandard,
    origin: "https://www.business-standard.com",
    pages: &["/markets", "/companies"],
    container: "div.listingstyle",
    max_items: 10,
    headline_chain: &["h2", "h3"],
    link_mode: LinkMode::NestedAnchor,
    summary: Some("p"),
    time: None,
};
