//! Configuration for gomod-browser.
//!
//! Settings come from an optional YAML file, with CLI flags layered on top.
//!
//! # Configuration File
//!
//! Place a `.gomod-browser.yaml` file in your project root or
//! `~/.config/gomod-browser/`:
//!
//! ```yaml
//! github:
//!   api_base: https://api.github.com
//!   timeout_secs: 15
//! tui:
//!   theme: light
//! size:
//!   enabled: false
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{discover_config_file, load_config_file, load_or_default, ConfigFileError};
pub use types::{AppConfig, GitHubConfig, SizeConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};
