use crate::domain::entities::article::Article;
use std::cmp::Ordering;

/// Highest impact first, then most recent. Stable for exact ties.
pub fn rank(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| {
        b.impact_score()
            .value()
            .partial_cmp(&a.impact_score().value())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.published_at().cmp(&a.published_at()))
    });
    articles
}
