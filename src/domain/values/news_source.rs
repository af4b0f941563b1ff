use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The site an article was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewsSource {
    #[serde(rename = "Moneycontrol")]
    Moneycontrol,
    #[serde(rename = "Economic Times")]
    EconomicTimes,
    #[serde(rename = "Business Standard")]
    BusinessStandard,
}

impl NewsSource {
    /// Every source, in the order the pipeline invokes them.
    pub const ALL: [NewsSource; 3] = [
        NewsSource::Moneycontrol,
        NewsSource::EconomicTimes,
        NewsSource::BusinessStandard,
    ];
}

impl fmt::Display for NewsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsSource::Moneycontrol => write!(f, "Moneycontrol"),
            NewsSource::EconomicTimes => write!(f, "Economic Times"),
            NewsSource::BusinessStandard => write!(f, "Business Standard"),
        }
    }
}

impl FromStr for NewsSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moneycontrol" => Ok(NewsSource::Moneycontrol),
            "economic times" | "economictimes" | "et" => Ok(NewsSource::EconomicTimes),
            "business standard" | "businessstandard" | "bs" => Ok(NewsSource::BusinessStandard),
            _ => Err(format!("Unknown news source: {s}")),
        }
    }
}
