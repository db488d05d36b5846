// Application Configuration
// Defaults compiled from config.yaml at build time, layered with user overrides

use std::path::PathBuf;
use std::time::Duration;

use super::user_config::UserConfig;
use crate::theme::ColorMode;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Problems found when validating the effective configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api.base_url must start with http:// or https:// (got '{0}')")]
    UnsupportedApiUrl(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
}

/// Values given on the command line; they beat both defaults and the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub color_mode: Option<ColorMode>,
    pub log_file: Option<PathBuf>,
}

/// Effective configuration for mixnode-explorer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Explorer API settings
    pub api: ApiSettings,

    /// UI and display settings
    pub ui: UiSettings,

    /// Log output settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL of the explorer API, without trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    /// Initial color mode
    pub color_mode: ColorMode,

    /// Event poll interval
    pub tick_rate_ms: u64,

    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Minimum content width for side-by-side cards
    pub wide_layout_min_width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when RUST_LOG is unset
    pub filter: String,

    /// Log file path
    pub file: PathBuf,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: compiled::API_BASE_URL.to_string(),
            timeout_secs: compiled::API_TIMEOUT_SECS,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color_mode: compiled::COLOR_MODE.parse().unwrap_or_default(),
            tick_rate_ms: compiled::TICK_RATE_MS,
            mouse_enabled: compiled::MOUSE_ENABLED,
            wide_layout_min_width: compiled::WIDE_LAYOUT_MIN_WIDTH,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: compiled::LOG_FILTER.to_string(),
            file: std::env::temp_dir().join(compiled::LOG_FILE_NAME),
        }
    }
}

impl AppConfig {
    /// Overlay values set in a user config file
    pub fn apply(&mut self, user: &UserConfig) {
        if let Some(base_url) = &user.api.base_url {
            self.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout_secs) = user.api.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(color_mode) = user.ui.color_mode {
            self.ui.color_mode = color_mode;
        }
        if let Some(tick_rate_ms) = user.ui.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
        if let Some(mouse_enabled) = user.ui.mouse_enabled {
            self.ui.mouse_enabled = mouse_enabled;
        }
        if let Some(width) = user.ui.wide_layout_min_width {
            self.ui.wide_layout_min_width = width;
        }
        if let Some(filter) = &user.logging.filter {
            self.logging.filter = filter.clone();
        }
        if let Some(file) = &user.logging.file {
            self.logging.file = file.clone();
        }
    }

    /// Overlay command-line flags, applied after [`AppConfig::apply`]
    pub fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(api_url) = &cli.api_url {
            self.api.base_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(color_mode) = cli.color_mode {
            self.ui.color_mode = color_mode;
        }
        if let Some(log_file) = &cli.log_file {
            self.logging.file = log_file.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedApiUrl(url.to_string()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
