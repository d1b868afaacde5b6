use serde::{Deserialize, Serialize};

/// Configuration from punchlist.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub badge: BadgeConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the task snapshot, relative to the data directory
    #[serde(default = "default_storage_file")]
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_storage_file(),
        }
    }
}

fn default_storage_file() -> String {
    "tasks.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Badge background color pushed alongside the count
    #[serde(default = "default_badge_color")]
    pub color: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        BadgeConfig {
            color: default_badge_color(),
        }
    }
}

fn default_badge_color() -> String {
    crate::io::badge::BADGE_COLOR.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed sample tasks on first run
    #[serde(default = "default_true")]
    pub samples: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig { samples: true }
    }
}

fn default_true() -> bool {
    true
}
