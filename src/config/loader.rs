//! Configuration file loading with precedence handling.
//!
//! Precedence chain, weakest first: hardcoded defaults → config file →
//! environment variables (`COURTVIEW_*`) → CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, encoding).
    #[error("failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional — anything unset falls back to the defaults.
/// Corresponds to `~/.config/courtview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Summarizer settings.
    #[serde(default)]
    pub summarizer: Option<SummarizerSection>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Summarizer section from TOML.
///
/// ```toml
/// [summarizer]
/// model = "gemini-2.0-flash"
/// endpoint = "https://generativelanguage.googleapis.com"
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SummarizerSection {
    /// Model name for the `generateContent` call.
    #[serde(default)]
    pub model: Option<String>,

    /// Service base URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Summarizer model name.
    pub summarizer_model: String,
    /// Summarizer service base URL.
    pub summarizer_endpoint: String,
    /// Environment variable holding the summarizer API key.
    pub api_key_env: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            summarizer_model: "gemini-2.0-flash".to_string(),
            summarizer_endpoint: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/courtview/courtview.log` on Unix-like systems, the
/// platform equivalent elsewhere, falling back to the current directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("courtview").join("courtview.log")
    } else {
        PathBuf::from("courtview.log")
    }
}

/// Resolve the default config file path (`~/.config/courtview/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("courtview").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error — defaults
/// apply). Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load the config file with path precedence: an explicit `--config` path
/// wins over the default location.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit.or_else(default_config_path) {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Merge a loaded config file (or `None`) over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    let Some(file) = file else {
        return resolved;
    };

    if let Some(path) = file.log_file_path {
        resolved.log_file_path = path;
    }
    if let Some(summarizer) = file.summarizer {
        if let Some(model) = summarizer.model {
            resolved.summarizer_model = model;
        }
        if let Some(endpoint) = summarizer.endpoint {
            resolved.summarizer_endpoint = endpoint;
        }
        if let Some(var) = summarizer.api_key_env {
            resolved.api_key_env = var;
        }
    }
    resolved
}

/// Apply environment variable overrides on top of a resolved config.
///
/// Recognized: `COURTVIEW_LOG_FILE`, `COURTVIEW_MODEL`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("COURTVIEW_LOG_FILE") {
        if !path.trim().is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }
    if let Ok(model) = std::env::var("COURTVIEW_MODEL") {
        if !model.trim().is_empty() {
            config.summarizer_model = model;
        }
    }
    config
}

/// Apply CLI argument overrides; the strongest layer in the chain.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    model_override: Option<String>,
) -> ResolvedConfig {
    if let Some(model) = model_override {
        config.summarizer_model = model;
    }
    config
}
