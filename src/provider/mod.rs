use std::{collections::HashMap, sync::Arc};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;

use crate::{
    config::{AppConfig, ProviderKind},
    types::StockSummary,
};

pub mod file;

/// `Ok(None)` means the symbol is unknown.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<Option<StockSummary>>;

    fn name(&self) -> &'static str;
}

pub struct FixtureProvider {
    records: HashMap<String, StockSummary>,
}

impl FixtureProvider {
    pub fn new(records: impl IntoIterator<Item = StockSummary>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|summary| (summary.symbol.clone(), summary))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new([StockSummary {
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
        }])
    }
}

#[async_trait]
impl SummaryProvider for FixtureProvider {
    async fn fetch(&self, symbol: &str) -> Result<Option<StockSummary>> {
        Ok(self.records.get(&symbol.to_ascii_uppercase()).cloned())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

pub fn build_provider(config: &AppConfig) -> Result<Arc<dyn SummaryProvider>> {
    match config.provider {
        ProviderKind::Fixture => Ok(Arc::new(FixtureProvider::builtin())),
        ProviderKind::File => {
            let path = config
                .fixture_path
                .clone()
                .ok_or_else(|| anyhow!("provider = \"file\" requires fixture_path"))
                .context("invalid provider configuration")?;
            Ok(Arc::new(file::FileProvider::new(path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_fixture_serves_demo_quote() -> Result<()> {
        let provider = FixtureProvider::builtin();
        let summary = provider.fetch("aapl").await?.expect("AAPL fixture");
        assert_eq!(summary.company, "Apple Inc.");
        assert_eq!(summary.price, 150.75);
        assert!(summary.validate().is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_symbol_yields_none() -> Result<()> {
        let provider = FixtureProvider::builtin();
        assert!(provider.fetch("ZZZZ").await?.is_none());
        Ok(())
    }

    #[test]
    fn file_provider_requires_path() {
        let config = AppConfig {
            provider: ProviderKind::File,
            ..AppConfig::default()
        };
        let err = build_provider(&config).err().expect("missing path");
        assert!(format!("{err:#}").contains("fixture_path"));
    }

    #[test]
    fn default_config_builds_fixture_provider() -> Result<()> {
        let provider = build_provider(&AppConfig::default())?;
        assert_eq!(provider.name(), "fixture");
        Ok(())
    }
}
