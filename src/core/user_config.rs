// User Configuration
// Optional mixnode-explorer.yaml overriding the compiled defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::ColorMode;

/// User config file name
pub const USER_CONFIG_NAME: &str = "mixnode-explorer.yaml";

/// Environment variable pointing at a config file
pub const USER_CONFIG_ENV: &str = "MIXNODE_EXPLORER_CONFIG";

/// Values a user may override; everything is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub api: ApiOverrides,

    #[serde(default)]
    pub ui: UiOverrides,

    #[serde(default)]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiOverrides {
    pub color_mode: Option<ColorMode>,
    pub tick_rate_ms: Option<u64>,
    pub mouse_enabled: Option<bool>,
    pub wide_layout_min_width: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingOverrides {
    pub filter: Option<String>,
    pub file: Option<PathBuf>,
}

impl UserConfig {
    /// Load user configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        // An empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: UserConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config YAML: {}", path.display()))?;

        Ok(config)
    }

    /// Find the config file to use
    ///
    /// An explicit path wins, then the `MIXNODE_EXPLORER_CONFIG` environment
    /// variable, then the first `mixnode-explorer.yaml` found walking up from
    /// `start`.
    pub fn locate(explicit: Option<&Path>, start: &Path) -> Option<PathBuf> {
        let from_env = std::env::var_os(USER_CONFIG_ENV).map(PathBuf::from);
        Self::locate_from(explicit, from_env.as_deref(), start)
    }

    /// [`UserConfig::locate`] with the environment value passed in
    pub fn locate_from(explicit: Option<&Path>, from_env: Option<&Path>, start: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(path) = from_env {
            if path.exists() {
                return Some(path.to_path_buf());
            }
        }

        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = dir.join(USER_CONFIG_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            current = dir.parent();
        }

        None
    }
}
