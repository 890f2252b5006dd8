//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API access
    pub github: GitHubConfig,
    /// Terminal UI settings
    pub tui: TuiConfig,
    /// Module cache size lookup
    pub size: SizeConfig,
}

/// GitHub API settings. The token is never read from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL (GitHub Enterprise uses `https://host/api/v3`)
    pub api_base: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: crate::stars::github::DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl GitHubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: 250,
        }
    }
}

/// Module cache size lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConfig {
    /// Measure cached module sizes at startup
    pub enabled: bool,
    /// Cache root override; discovered from the Go environment when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_cache_dir: Option<PathBuf>,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mod_cache_dir: None,
        }
    }
}
