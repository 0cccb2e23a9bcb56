use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::SummaryProvider;
use crate::types::StockSummary;

pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<StockSummary>> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read fixture file {}", self.path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid fixture format in {}", self.path.display()))
    }
}

#[async_trait]
impl SummaryProvider for FileProvider {
    #[instrument(skip(self))]
    async fn fetch(&self, symbol: &str) -> Result<Option<StockSummary>> {
        let records = self.load().await?;
        debug!(count = records.len(), path = %self.path.display(), "fixture records loaded");
        let wanted = symbol.to_ascii_uppercase();
        let Some(summary) = records.into_iter().find(|s| s.symbol == wanted) else {
            return Ok(None);
        };
        summary.validate()?;
        Ok(Some(summary))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
