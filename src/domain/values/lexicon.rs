use crate::domain::values::sentiment::Sentiment;

const POSITIVE: &[&str] = &[
    "surge", "rally", "gain", "rise", "up", "positive", "strong", "growth", "bullish",
    "optimistic", "boost", "soar", "jump", "climb", "advance", "outperform", "beat", "exceed",
    "record", "high", "profit", "revenue", "expansion", "acquisition", "merger", "dividend",
    "bonus", "split",
];

const NEGATIVE: &[&str] = &[
    "fall", "drop", "decline", "down", "negative", "weak", "loss", "crash", "bearish",
    "pessimistic", "plunge", "tumble", "slide", "slump", "retreat", "underperform", "miss",
    "disappoint", "low", "deficit", "concern", "worry", "layoff", "restructure", "debt",
    "lawsuit", "investigation", "penalty",
];

/// Keyword lists used to classify headline polarity.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: positive.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            negative: negative.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn market_default() -> Self {
        Self::new(POSITIVE.iter(), NEGATIVE.iter())
    }

    /// Classify `text` by comparing how many positive vs negative keywords it contains.
    ///
    /// Each keyword counts once if it occurs anywhere as a substring.
    pub fn score(&self, text: &str) -> Sentiment {
        let text = text.to_lowercase();
        let positive = count_present(&self.positive, &text);
        let negative = count_present(&self.negative, &text);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::market_default()
    }
}

fn count_present(words: &[String], text: &str) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> SentimentLexicon {
        SentimentLexicon::market_default()
    }

    #[test]
    fn test_positive_headline() {
        assert_eq!(
            lexicon().score("TCS shares surge 5% on strong Q4 earnings beat"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_negative_headline() {
        assert_eq!(
            lexicon().score("Wipro shares plunge after weak guidance"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(lexicon().score("Board meeting scheduled on Friday"), Sentiment::Neutral);
        assert_eq!(lexicon().score(""), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(lexicon().score("rally then crash"), Sentiment::Neutral);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // "upgrade" contains "up"
        assert_eq!(lexicon().score("Analysts upgrade the stock"), Sentiment::Positive);
    }

    #[test]
    fn test_swapping_keywords_flips_polarity() {
        let lex = SentimentLexicon::new(["surge", "rally"], ["plunge", "crash"]);
        let original = "Markets surge as banks rally";
        let swapped = "Markets plunge as banks crash";
        assert_eq!(lex.score(original), Sentiment::Positive);
        assert_eq!(lex.score(swapped), Sentiment::Negative);
    }

    #[test]
    fn test_deterministic() {
        let text = "Sensex gains while midcaps slide";
        let first = lexicon().score(text);
        for _ in 0..10 {
            assert_eq!(lexicon().score(text), first);
        }
    }
}
