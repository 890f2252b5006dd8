//! GitHub token discovery.

use std::process::Command;

/// Find a GitHub token.
///
/// Order: the explicit value (CLI flag or `GITHUB_TOKEN`), `GH_TOKEN`, then
/// the token stored by the `gh` CLI (`gh auth token`).
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    explicit
        .and_then(non_empty)
        .or_else(|| std::env::var("GH_TOKEN").ok().and_then(non_empty))
        .or_else(gh_cli_token)
}

fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        tracing::debug!("gh auth token exited with {}", output.status);
        return None;
    }
    String::from_utf8(output.stdout).ok().and_then(non_empty)
}

fn non_empty(token: String) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
