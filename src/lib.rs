//! **Browse a Go module's direct dependencies and star their GitHub repositories.**
//!
//! `gomod-browser` reads a `go.mod` file, checks which of the required modules
//! live on GitHub and whether the current user has starred them, and presents
//! the result in an interactive terminal UI. From the list you can open a
//! module's repository or its pkg.go.dev page, star or unstar a single
//! repository, or star every repository that is not starred yet.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Dependency`], one direct requirement with its hosting
//!   classification, derived `owner/repo` identifier, star flag and cached size.
//! - **[`parsers`]**: the `go.mod` parser producing the records in declaration
//!   order, with `// indirect` requirements left out.
//! - **[`stars`]**: the [`StarProvider`] capability. [`GitHubClient`] talks to the
//!   GitHub REST API; [`InMemoryStarProvider`] keeps stars locally for offline
//!   sessions and tests.
//! - **[`modcache`]**: sizes of downloaded modules in the local module cache.
//! - **[`tui`]**: the [`App`] state machine and the ratatui front end.
//! - **[`config`]**: YAML configuration discovery, loading and validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use gomod_browser::{parse_go_mod_str, InMemoryStarProvider, StarProvider};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut deps = parse_go_mod_str(
//!         "module example.com/app\n\nrequire github.com/cli/go-gh/v2 v2.11.2\n",
//!     )?;
//!
//!     let provider = InMemoryStarProvider::new();
//!     provider.refresh_starred_status(&mut deps)?;
//!     let starred = provider.star_all_unstarred(&mut deps)?;
//!
//!     println!("starred {starred} repositories");
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math converts between usize and u16; values are bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod config;
pub mod error;
pub mod modcache;
pub mod model;
pub mod parsers;
pub mod stars;
pub mod tui;

pub use config::{AppConfig, ConfigError, Validatable};
pub use error::{BrowserError, BulkStarError, ErrorContext, ManifestErrorKind, ProviderErrorKind, Result};
pub use modcache::{populate_sizes, ModCache};
pub use model::{format_size, Dependency};
pub use parsers::{parse_go_mod, parse_go_mod_str, GoModParser};
pub use stars::{GitHubClient, GitHubClientConfig, InMemoryStarProvider, StarProvider};
pub use tui::{run_tui, App, Mode};
