// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const API_BASE_URL: &str = "{api_base_url}";
pub const API_TIMEOUT_SECS: u64 = {api_timeout_secs};

pub const COLOR_MODE: &str = "{color_mode}";
pub const TICK_RATE_MS: u64 = {tick_rate_ms};
pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = {wide_layout_min_width};

pub const LOG_FILTER: &str = "{log_filter}";
pub const LOG_FILE_NAME: &str = "{log_file_name}";
"#,
        api_base_url = config.api_base_url,
        api_timeout_secs = config.api_timeout_secs,
        color_mode = config.color_mode,
        tick_rate_ms = config.tick_rate_ms,
        mouse_enabled = config.mouse_enabled,
        wide_layout_min_width = config.wide_layout_min_width,
        log_filter = config.log_filter,
        log_file_name = config.log_file_name,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    api_base_url: String,
    api_timeout_secs: u64,
    color_mode: String,
    tick_rate_ms: u64,
    mouse_enabled: bool,
    wide_layout_min_width: u16,
    log_filter: String,
    log_file_name: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://explorer.nymtech.net/api/v1".to_string(),
            api_timeout_secs: 10,
            color_mode: "dark".to_string(),
            tick_rate_ms: 100,
            mouse_enabled: true,
            wide_layout_min_width: 100,
            log_filter: "mixnode_explorer=info".to_string(),
            log_file_name: "mixnode-explorer.log".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_api = false;
    let mut in_ui = false;
    let mut in_logging = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("api:") {
            in_api = true;
            in_ui = false;
            in_logging = false;
            continue;
        } else if trimmed.starts_with("ui:") {
            in_api = false;
            in_ui = true;
            in_logging = false;
            continue;
        } else if trimmed.starts_with("logging:") {
            in_api = false;
            in_ui = false;
            in_logging = true;
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        if in_api {
            match key {
                "base_url" => config.api_base_url = value.to_string(),
                "timeout_secs" => config.api_timeout_secs = value.parse().unwrap_or(10),
                _ => {}
            }
        } else if in_ui {
            match key {
                "color_mode" => config.color_mode = value.to_lowercase(),
                "tick_rate_ms" => config.tick_rate_ms = value.parse().unwrap_or(100),
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "wide_layout_min_width" => config.wide_layout_min_width = value.parse().unwrap_or(100),
                _ => {}
            }
        } else if in_logging {
            match key {
                "filter" => config.log_filter = value.to_string(),
                "file_name" => config.log_file_name = value.to_string(),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments (a # preceded by a space)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    let value = value.trim_matches('"').trim_matches('\'');

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
