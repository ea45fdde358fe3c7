//! Configuration file loading with precedence handling.

use super::endpoints::Endpoints;
use crate::model::TableKind;
use crate::state::RowsPerPage;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Base URL of the reinsurance REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://2qiik3x7hi.execute-api.us-east-1.amazonaws.com/dev";

/// Request timeout when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but holds a value outside its domain.
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Offending key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/recap/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL the endpoint paths are appended to.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Initial rows per page (15, 25, 50 or 100).
    #[serde(default)]
    pub rows_per_page: Option<usize>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Table shown on startup (e.g. "policies", "reinsurers").
    #[serde(default)]
    pub initial_table: Option<String>,

    /// Per-table endpoint path overrides.
    #[serde(default)]
    pub endpoints: Option<EndpointsSection>,
}

/// `[endpoints]` section from TOML.
///
/// ```toml
/// [endpoints]
/// policies = "getGridDataPolicyLanding"
/// reinsurer_levels = "getPolicyReinsurerLevels"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EndpointsSection {
    /// Policy landing grid.
    #[serde(default)]
    pub policies: Option<String>,
    /// Reinsurer treaties.
    #[serde(default)]
    pub reinsurers: Option<String>,
    /// Policy transactions.
    #[serde(default)]
    pub policy_transactions: Option<String>,
    /// Reinsurer transactions.
    #[serde(default)]
    pub reinsurer_transactions: Option<String>,
    /// Reinsurer levels of a policy.
    #[serde(default)]
    pub reinsurer_levels: Option<String>,
}

impl EndpointsSection {
    fn into_endpoints(self) -> Endpoints {
        [
            (TableKind::Policies, self.policies),
            (TableKind::Reinsurers, self.reinsurers),
            (TableKind::PolicyTransactions, self.policy_transactions),
            (TableKind::ReinsurerTransactions, self.reinsurer_transactions),
            (TableKind::ReinsurerLevels, self.reinsurer_levels),
        ]
        .into_iter()
        .fold(Endpoints::default(), |endpoints, (kind, path)| match path {
            Some(path) => endpoints.with_override(kind, path),
            None => endpoints,
        })
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API base URL.
    pub api_base_url: String,
    /// Initial rows per page for every table.
    pub rows_per_page: RowsPerPage,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Table shown on startup.
    pub initial_table: TableKind,
    /// Endpoint path per table.
    pub endpoints: Endpoints,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            rows_per_page: RowsPerPage::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_file_path: default_log_path(),
            initial_table: TableKind::Policies,
            endpoints: Endpoints::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/recap/recap.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("recap").join("recap.log")
    } else {
        PathBuf::from("recap.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/recap/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recap").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RECAP_CONFIG` environment variable
/// 3. Default path `~/.config/recap/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("RECAP_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a rows-per-page outside
/// {15, 25, 50, 100}, a zero timeout, or an unknown initial table.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let rows_per_page = match config.rows_per_page {
        Some(rows) => RowsPerPage::try_from(rows).map_err(|e| ConfigError::InvalidValue {
            key: "rows_per_page",
            reason: e.to_string(),
        })?,
        None => defaults.rows_per_page,
    };

    let request_timeout = match config.request_timeout_secs {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                reason: "must be at least 1 second".to_string(),
            })
        }
        Some(secs) => Duration::from_secs(secs),
        None => defaults.request_timeout,
    };

    let initial_table = match config.initial_table {
        Some(key) => TableKind::parse(&key).ok_or_else(|| ConfigError::InvalidValue {
            key: "initial_table",
            reason: format!("unknown table `{}`", key),
        })?,
        None => defaults.initial_table,
    };

    Ok(ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        rows_per_page,
        request_timeout,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        initial_table,
        endpoints: config
            .endpoints
            .map(EndpointsSection::into_endpoints)
            .unwrap_or(defaults.endpoints),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RECAP_API_BASE`: Override the API base URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base) = std::env::var("RECAP_API_BASE") {
        config.api_base_url = base;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_base_override: Option<String>,
    table_override: Option<TableKind>,
    rows_override: Option<RowsPerPage>,
) -> ResolvedConfig {
    if let Some(base) = api_base_override {
        config.api_base_url = base;
    }

    if let Some(table) = table_override {
        config.initial_table = table;
    }

    if let Some(rows) = rows_override {
        config.rows_per_page = rows;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
