//! GitHub REST API star provider.
//!
//! Uses the authenticated-user starring endpoints:
//! `GET|PUT|DELETE /user/starred/{owner}/{repo}`.
//!
//! See: <https://docs.github.com/rest/activity/starring>

mod client;
mod token;

pub use client::{GitHubClient, GitHubClientConfig, DEFAULT_API_BASE};
pub use token::resolve_token;
