//! Configuration loading.

use tracing::debug;

use noor_core::config::TrackerConfig;
use noor_core::error::Result;

use crate::paths::NoorPaths;

/// Loads `config.toml`, falling back to the built-in defaults when the file
/// does not exist.
///
/// A file that exists but fails to parse is a `Config` error: a broken
/// roster should stop startup, not silently fall back.
pub async fn load_config(paths: &NoorPaths) -> Result<TrackerConfig> {
    let path = paths.config_file()?;
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(TrackerConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    let config: TrackerConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NoorPaths::new(Some(temp_dir.path()));

        let config = load_config(&paths).await.unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[tokio::test]
    async fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "members = [\"A\", \"B\"]\npoll_interval_secs = 10\n",
        )
        .unwrap();
        let paths = NoorPaths::new(Some(temp_dir.path()));

        let config = load_config(&paths).await.unwrap();
        assert_eq!(config.members, vec!["A", "B"]);
        assert_eq!(config.poll_interval_secs, 10);
    }

    #[tokio::test]
    async fn test_broken_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "members = not-a-list").unwrap();
        let paths = NoorPaths::new(Some(temp_dir.path()));

        assert!(load_config(&paths).await.is_err());
    }
}
