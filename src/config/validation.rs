//! Configuration validation.

use super::types::{AppConfig, GitHubConfig, TuiConfig};

/// A single invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.github.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for GitHubConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            errors.push(ConfigError {
                field: "github.api_base".to_string(),
                message: format!("Expected an http(s) URL, got '{}'", self.api_base),
            });
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "github.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let valid_themes = ["dark", "light", "high-contrast"];
        if !valid_themes.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    valid_themes.join(", ")
                ),
            });
        }

        if !(10..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between 10 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}
