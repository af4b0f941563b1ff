use crate::domain::entities::article::{Article, RawCandidate};
use crate::domain::values::impact::ImpactScore;
use crate::domain::values::lexicon::SentimentLexicon;
use crate::domain::values::symbol_table::SymbolTable;
use std::sync::Arc;
use tracing::warn;

/// Turns raw candidates into scored articles using the shared lookup tables.
pub struct Enricher {
    symbols: Arc<SymbolTable>,
    lexicon: Arc<SentimentLexicon>,
}

impl Enricher {
    pub fn new(symbols: Arc<SymbolTable>, lexicon: Arc<SentimentLexicon>) -> Self {
        Self { symbols, lexicon }
    }

    pub fn enrich(&self, candidate: RawCandidate) -> Result<Article, String> {
        let text = candidate.analysis_text();
        let relevant_symbols = self.symbols.extract_symbols(&text);
        let sentiment = self.lexicon.score(&text);
        let impact = ImpactScore::from_signals(sentiment, relevant_symbols.len());
        Article::new(candidate, sentiment, relevant_symbols, impact)
    }

    /// Enrich every candidate, dropping (and logging) any that fail validation.
    pub fn enrich_all(&self, candidates: Vec<RawCandidate>) -> Vec<Article> {
        candidates
            .into_iter()
            .filter_map(|c| {
                let url = c.url.clone();
                match self.enrich(c) {
                    Ok(article) => Some(article),
                    Err(e) => {
                        warn!(%url, error = %e, "dropping candidate");
                        None
                    }
                }
            })
            .collect()
    }
}
