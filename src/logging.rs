use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "SCREENER_LOG";

// stdout belongs to the UI, so logs only go to a file
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_log_file_is_a_no_op() -> Result<()> {
        init(None)
    }

    #[test]
    fn creates_log_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("screener.log");
        init(Some(&path))?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn unwritable_path_reports_context() {
        let err = init(Some(Path::new("/nonexistent-dir/screener.log"))).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
