use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub symbol: String,
    pub sector: String,
    pub company: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub market_cap: f64,
    #[serde(default)]
    pub pe: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    pub volume: f64,
}

impl StockSummary {
    pub fn validate(&self) -> Result<(), SummaryError> {
        let invalid = |reason: &str| SummaryError::Invalid {
            symbol: self.symbol.clone(),
            reason: reason.to_string(),
        };

        if !ticker_regex().is_match(&self.symbol) {
            return Err(invalid("symbol must be an uppercase ticker"));
        }
        if self.sector.trim().is_empty() {
            return Err(invalid("sector is empty"));
        }
        if self.company.trim().is_empty() {
            return Err(invalid("company is empty"));
        }
        for (name, value) in [
            ("price", self.price),
            ("marketCap", self.market_cap),
            ("volume", self.volume),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(&format!("{name} must be a non-negative number")));
            }
        }
        if !self.change.is_finite() || !self.change_percent.is_finite() {
            return Err(invalid("change and changePercent must be finite"));
        }
        Ok(())
    }
}

static TICKER_REGEX: OnceLock<Regex> = OnceLock::new();

fn ticker_regex() -> &'static Regex {
    TICKER_REGEX.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9.\-]{0,9}$").expect("invalid regex"))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    Missing(String),
    Invalid { symbol: String, reason: String },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::Missing(symbol) => write!(f, "no summary available for {symbol}"),
            SummaryError::Invalid { symbol, reason } => {
                write!(f, "invalid summary for {symbol}: {reason}")
            }
        }
    }
}

impl std::error::Error for SummaryError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Overview,
    Charts,
    Financials,
    Technicals,
    Ownership,
    Similar,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::Overview,
        TabId::Charts,
        TabId::Financials,
        TabId::Technicals,
        TabId::Ownership,
        TabId::Similar,
    ];

    pub fn index(self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Charts => 1,
            TabId::Financials => 2,
            TabId::Technicals => 3,
            TabId::Ownership => 4,
            TabId::Similar => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Charts => "Charts",
            TabId::Financials => "Financials",
            TabId::Technicals => "Technicals",
            TabId::Ownership => "Ownership",
            TabId::Similar => "Similar",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Charts => "charts",
            TabId::Financials => "financials",
            TabId::Technicals => "technicals",
            TabId::Ownership => "ownership",
            TabId::Similar => "similar",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TabId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == needle)
            .ok_or_else(|| format!("unknown tab `{s}`"))
    }
}

#[cfg(test)]
pub(crate) fn sample_summary() -> StockSummary {
    StockSummary {
        symbol: "AAPL".into(),
        sector: "Technology".into(),
        company: "Apple Inc.".into(),
        price: 150.75,
        change: 5.25,
        change_percent: 3.5,
        market_cap: 2.5e12,
        pe: Some(30.5),
        dividend_yield: Some(1.25),
        volume: 1.2e9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_wraps_in_strip_order() {
        assert_eq!(TabId::Overview.next(), TabId::Charts);
        assert_eq!(TabId::Similar.next(), TabId::Overview);
        assert_eq!(TabId::Overview.prev(), TabId::Similar);
        for tab in TabId::ALL {
            assert_eq!(TabId::from_index(tab.index()), Some(tab));
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(TabId::from_index(6), None);
    }

    #[test]
    fn tab_parses_identifiers_case_insensitively() {
        assert_eq!("Technicals".parse::<TabId>(), Ok(TabId::Technicals));
        assert_eq!(" similar ".parse::<TabId>(), Ok(TabId::Similar));
        assert!("news".parse::<TabId>().is_err());
        assert_eq!(TabId::Ownership.to_string(), "ownership");
    }

    #[test]
    fn summary_deserializes_camel_case_fields() {
        let json = serde_json::json!({
            "symbol": "MSFT",
            "sector": "Technology",
            "company": "Microsoft Corporation",
            "price": 410.0,
            "change": -1.5,
            "changePercent": -0.36,
            "marketCap": 3.05e12,
            "volume": 2.1e7
        });
        let summary: StockSummary = serde_json::from_value(json).expect("summary");
        assert_eq!(summary.change_percent, -0.36);
        assert_eq!(summary.pe, None);
        assert_eq!(summary.dividend_yield, None);
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn validate_rejects_lowercase_ticker_and_negative_price() {
        let mut summary = sample_summary();
        summary.symbol = "aapl".into();
        assert!(matches!(
            summary.validate(),
            Err(SummaryError::Invalid { .. })
        ));

        let mut summary = sample_summary();
        summary.price = -1.0;
        let err = summary.validate().unwrap_err();
        assert!(err.to_string().contains("price"), "{err}");
    }

    #[test]
    fn validate_does_not_cross_check_change_percent() {
        let mut summary = sample_summary();
        summary.change_percent = 99.0;
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn missing_error_names_symbol() {
        let err = SummaryError::Missing("TSLA".into());
        assert_eq!(err.to_string(), "no summary available for TSLA");
    }
}
