use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse punchlist.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read punchlist.toml from the data directory. A missing file yields
/// the default config; a present-but-invalid file is an error.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join("punchlist.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.storage.file, "tasks.json");
    }

    #[test]
    fn config_file_is_honored() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("punchlist.toml"),
            "[storage]\nfile = \"work.json\"\n",
        )
        .unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.storage.file, "work.json");
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("punchlist.toml"), "storage = 3").unwrap();
        assert!(read_config(dir.path()).is_err());
    }
}
