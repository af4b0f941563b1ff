use crate::domain::entities::article::Article;
use std::collections::HashSet;
use tracing::debug;

const KEY_TOKENS: usize = 10;

/// Normalized headline prefix used to spot the same story across sources.
///
/// Lowercased, reduced to `[a-z0-9 ]` (other whitespace becomes a space),
/// whitespace collapsed, first ten words.
pub fn dedup_key(headline: &str) -> String {
    let cleaned: String = headline
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' => Some(c),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect();

    cleaned
        .split_whitespace()
        .take(KEY_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first article seen for each key, preserving order.
pub fn dedupe(articles: Vec<Article>) -> Vec<Article> {
    let before = articles.len();
    let mut seen = HashSet::new();
    let unique: Vec<Article> = articles
        .into_iter()
        .filter(|a| seen.insert(dedup_key(a.headline())))
        .collect();
    debug!(before, after = unique.len(), "deduplicated articles");
    unique
}
