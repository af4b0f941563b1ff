use crate::domain::entities::article::Article;
use crate::domain::values::sentiment::Sentiment;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

const TOP_SYMBOLS: usize = 5;

/// Counts a caller reports after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub top_symbols: Vec<SymbolMention>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolMention {
    pub symbol: String,
    pub count: usize,
}

impl IngestSummary {
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut summary = IngestSummary {
            total: articles.len(),
            ..Default::default()
        };

        let mut mentions: HashMap<&str, usize> = HashMap::new();
        for article in articles {
            match article.sentiment() {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }
            for symbol in article.relevant_symbols() {
                *mentions.entry(symbol.as_str()).or_default() += 1;
            }
        }

        let mut top: Vec<SymbolMention> = mentions
            .into_iter()
            .map(|(symbol, count)| SymbolMention {
                symbol: symbol.to_string(),
                count,
            })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.symbol.cmp(&b.symbol)));
        top.truncate(TOP_SYMBOLS);
        summary.top_symbols = top;
        summary
    }
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total articles: {}", self.total)?;
        writeln!(
            f,
            "Sentiment: {} positive, {} negative, {} neutral",
            self.positive, self.negative, self.neutral
        )?;
        if !self.top_symbols.is_empty() {
            let top: Vec<String> = self
                .top_symbols
                .iter()
                .map(|m| format!("{}({})", m.symbol, m.count))
                .collect();
            writeln!(f, "Top mentioned stocks: {}", top.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::article::RawCandidate;
    use crate::domain::values::impact::ImpactScore;
    use crate::domain::values::news_source::NewsSource;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn article(n: usize, sentiment: Sentiment, symbols: &[&str]) -> Article {
        let symbols: BTreeSet<String> = symbols.iter().map(|s| s.to_string()).collect();
        Article::new(
            RawCandidate {
                source: NewsSource::EconomicTimes,
                headline: format!("Headline number {n}"),
                summary: String::new(),
                url: format!("https://et.example/{n}"),
                published_at: Utc::now(),
            },
            sentiment,
            symbols.clone(),
            ImpactScore::from_signals(sentiment, symbols.len()),
        )
        .unwrap()
    }

    #[test]
    fn test_counts_and_top_symbols() {
        let articles = vec![
            article(1, Sentiment::Positive, &["TCS", "INFY"]),
            article(2, Sentiment::Positive, &["TCS"]),
            article(3, Sentiment::Negative, &["WIPRO", "INFY", "TCS"]),
            article(4, Sentiment::Neutral, &["SBIN", "LT", "MARUTI"]),
        ];
        let summary = IngestSummary::from_articles(&articles);

        assert_eq!(summary.total, 4);
        assert_eq!((summary.positive, summary.negative, summary.neutral), (2, 1, 1));
        let top: Vec<(&str, usize)> = summary
            .top_symbols
            .iter()
            .map(|m| (m.symbol.as_str(), m.count))
            .collect();
        assert_eq!(
            top,
            vec![("TCS", 3), ("INFY", 2), ("LT", 1), ("MARUTI", 1), ("SBIN", 1)]
        );
    }

    #[test]
    fn test_empty_run() {
        let summary = IngestSummary::from_articles(&[]);
        assert_eq!(summary, IngestSummary::default());
        assert!(!summary.to_string().contains("Top mentioned"));
    }
}
