use std::collections::BTreeSet;

/// Canonical equity symbols and the company names/abbreviations that refer to them.
///
/// Built once and shared read-only; entries keep their insertion order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

#[derive(Debug, Clone)]
struct SymbolEntry {
    symbol: String,
    // Stored uppercased for case-insensitive matching.
    aliases: Vec<String>,
}

impl SymbolTable {
    pub fn new<S, A>(entries: impl IntoIterator<Item = (S, Vec<A>)>) -> Self
    where
        S: Into<String>,
        A: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(symbol, aliases)| SymbolEntry {
                    symbol: symbol.into(),
                    aliases: aliases.iter().map(|a| a.as_ref().to_uppercase()).collect(),
                })
                .collect(),
        }
    }

    /// NSE large caps tracked by default.
    pub fn nse_default() -> Self {
        Self::new([
            ("TCS", vec!["TCS", "Tata Consultancy Services", "Tata Consultancy"]),
            ("RELIANCE", vec!["Reliance", "RIL", "Reliance Industries"]),
            ("HDFCBANK", vec!["HDFC Bank", "HDFC", "Housing Development Finance Corporation"]),
            ("INFY", vec!["Infosys", "INFY"]),
            ("ICICIBANK", vec!["ICICI Bank", "ICICI"]),
            ("SBIN", vec!["SBI", "State Bank", "State Bank of India"]),
            ("WIPRO", vec!["Wipro"]),
            ("MARUTI", vec!["Maruti", "Maruti Suzuki"]),
            ("SUNPHARMA", vec!["Sun Pharma", "Sun Pharmaceutical"]),
            ("TATAMOTORS", vec!["Tata Motors"]),
            ("BHARTIARTL", vec!["Bharti Airtel", "Airtel"]),
            ("HCLTECH", vec!["HCL Technologies", "HCL Tech", "HCL"]),
            ("ASIANPAINT", vec!["Asian Paints"]),
            ("KOTAKBANK", vec!["Kotak Mahindra Bank", "Kotak Bank", "Kotak"]),
            ("LT", vec!["Larsen & Toubro", "L&T", "Larsen and Toubro"]),
            ("AXISBANK", vec!["Axis Bank"]),
            ("BAJFINANCE", vec!["Bajaj Finance"]),
            ("ULTRACEMCO", vec!["UltraTech Cement"]),
            ("NESTLEIND", vec!["Nestle India"]),
            ("POWERGRID", vec!["Power Grid Corporation"]),
        ])
    }

    /// Symbols whose aliases appear anywhere in `text`.
    ///
    /// Plain case-insensitive substring matching: "ICICI" also matches inside
    /// a longer word.
    pub fn extract_symbols(&self, text: &str) -> BTreeSet<String> {
        let haystack = text.to_uppercase();
        self.entries
            .iter()
            .filter(|e| e.aliases.iter().any(|alias| haystack.contains(alias.as_str())))
            .map(|e| e.symbol.clone())
            .collect()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|e| e.symbol == symbol)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::nse_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_alias_case_insensitively() {
        let table = SymbolTable::nse_default();
        let found = table.extract_symbols("infosys and tata consultancy post results");
        assert_eq!(found, BTreeSet::from(["INFY".to_string(), "TCS".to_string()]));
    }

    #[test]
    fn test_symbol_reported_once_for_many_aliases() {
        let table = SymbolTable::nse_default();
        let found = table.extract_symbols("Reliance Industries (RIL) shares: Reliance rallies");
        assert_eq!(found.len(), 1);
        assert!(found.contains("RELIANCE"));
    }

    #[test]
    fn test_substring_overlap_is_kept() {
        // "HDFC Bank" also carries the bare "HDFC" alias; both resolve to HDFCBANK.
        // "Tata Motors" does not imply TCS.
        let table = SymbolTable::nse_default();
        let found = table.extract_symbols("HDFC Bank and Tata Motors");
        assert_eq!(
            found,
            BTreeSet::from(["HDFCBANK".to_string(), "TATAMOTORS".to_string()])
        );
    }

    #[test]
    fn test_only_table_symbols_are_returned() {
        let table = SymbolTable::nse_default();
        let found = table.extract_symbols("Apple and Microsoft lead Nasdaq while SBI climbs");
        assert!(found.iter().all(|s| table.contains(s)));
        assert!(found.contains("SBIN"));
    }

    #[test]
    fn test_empty_text() {
        assert!(SymbolTable::nse_default().extract_symbols("").is_empty());
    }

    #[test]
    fn test_custom_table() {
        let table = SymbolTable::new([("ACME", vec!["Acme Corp"])]);
        assert!(table.contains("ACME"));
        assert!(!table.contains("TCS"));
        assert!(table.extract_symbols("ACME CORP wins bid").contains("ACME"));
    }
}
