//! GitHub star status for dependency repositories.
//!
//! [`StarProvider`] is the capability the browser talks to. Implementations
//! only supply the two per-repository primitives; checking, starring,
//! unstarring and the fail-fast bulk star are provided on top of them.
//!
//! ```no_run
//! use gomod_browser::model::Dependency;
//! use gomod_browser::stars::{GitHubClient, GitHubClientConfig, StarProvider};
//!
//! let client = GitHubClient::new(GitHubClientConfig::with_token("ghp_...")).unwrap();
//! let mut deps = vec![Dependency::new("github.com/cli/go-gh/v2", "v2.11.2")];
//! client.refresh_starred_status(&mut deps).unwrap();
//! ```

pub mod github;
mod memory;
mod traits;

pub use github::{resolve_token, GitHubClient, GitHubClientConfig};
pub use memory::InMemoryStarProvider;
pub use traits::StarProvider;
