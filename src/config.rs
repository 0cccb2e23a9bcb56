use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::{theme::ThemeMode, types::TabId};

const DEFAULT_CONFIG_BASENAME: &str = "screener.toml";
const DEFAULT_SYMBOL: &str = "AAPL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub symbol: String,
    pub initial_tab: TabId,
    pub theme: ThemeMode,
    pub provider: ProviderKind,
    pub fixture_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&config_path_from_env())?;
        if let Ok(symbol) = std::env::var("SCREENER_SYMBOL") {
            cfg.symbol = symbol;
        }
        if let Some(symbol) = symbol_from_arg(std::env::args().nth(1))? {
            cfg.symbol = symbol;
        }
        cfg.normalize();
        Ok(cfg)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("invalid config format in {}", path.display()))?;
        cfg.normalize();
        Ok(cfg)
    }

    fn normalize(&mut self) {
        let symbol = self.symbol.trim().to_ascii_uppercase();
        self.symbol = if symbol.is_empty() {
            DEFAULT_SYMBOL.to_string()
        } else {
            symbol
        };
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            initial_tab: TabId::default(),
            theme: ThemeMode::default(),
            provider: ProviderKind::default(),
            fixture_path: None,
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Fixture,
    File,
}

fn symbol_from_arg(arg: Option<String>) -> Result<Option<String>> {
    match arg {
        Some(arg) if arg.starts_with('-') => {
            bail!("unexpected option `{arg}`; usage: screener [SYMBOL]")
        }
        other => Ok(other),
    }
}

fn config_path_from_env() -> PathBuf {
    std::env::var("SCREENER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_BASENAME))
}
