//! Direct dependency records.

use super::size::format_size;
use std::fmt;

/// Import path prefix of modules served from GitHub.
pub const GITHUB_PREFIX: &str = "github.com/";

/// Base URL of the Go package documentation site.
pub const PKG_GO_DEV_BASE: &str = "https://pkg.go.dev";

/// Base URL of GitHub repositories.
pub const GITHUB_BASE: &str = "https://github.com";

/// Glyph for a starred GitHub repository.
pub const STARRED_GLYPH: &str = "★";

/// Glyph for an unstarred GitHub repository.
pub const UNSTARRED_GLYPH: &str = "☆";

/// One direct requirement from the manifest.
///
/// `path` and `version` are fixed at construction, and so is the hosting
/// classification derived from the path. The star flag can only be set on
/// GitHub-hosted records; it stays `false` for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    path: String,
    version: String,
    github: bool,
    repo: String,
    starred: bool,
    size: Option<u64>,
}

impl Dependency {
    /// Create a record from a module path and its declared version.
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        let path = path.into();
        let github = path.starts_with(GITHUB_PREFIX);
        let repo = if github {
            derive_repo_identifier(&path[GITHUB_PREFIX.len()..])
        } else {
            String::new()
        };

        Self {
            path,
            version: version.into(),
            github,
            repo,
            starred: false,
            size: None,
        }
    }

    /// Module import path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Version as declared by the manifest.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the module is served from GitHub.
    pub fn is_github(&self) -> bool {
        self.github
    }

    /// `owner/repo` for GitHub modules, empty otherwise.
    pub fn repo_identifier(&self) -> &str {
        &self.repo
    }

    /// The repository identifier, if it is a well-formed `owner/repo` pair.
    ///
    /// Star operations need exactly two non-empty segments.
    pub fn star_target(&self) -> Option<&str> {
        if !self.github {
            return None;
        }
        let mut parts = self.repo.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Some(&self.repo)
            }
            _ => None,
        }
    }

    /// Whether the current user has starred the repository.
    pub fn is_starred(&self) -> bool {
        self.starred
    }

    /// Record a star status. Ignored for modules not hosted on GitHub.
    pub fn set_starred(&mut self, starred: bool) {
        if self.github {
            self.starred = starred;
        }
    }

    /// GitHub-hosted and not yet starred.
    pub fn is_unstarred_github(&self) -> bool {
        self.github && !self.starred
    }

    /// Size of the module in the local module cache, when known.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn set_size(&mut self, bytes: u64) {
        self.size = Some(bytes);
    }

    /// Human-readable cached size, or `"unknown"`.
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }

    /// Repository URL on GitHub, empty for other hosts.
    pub fn github_url(&self) -> String {
        if !self.github {
            return String::new();
        }
        format!("{GITHUB_BASE}/{}", self.repo)
    }

    /// Documentation URL on pkg.go.dev. Present for every module.
    pub fn pkg_go_dev_url(&self) -> String {
        format!("{PKG_GO_DEV_BASE}/{}", self.path)
    }

    /// Star glyph: filled, hollow, or empty for non-GitHub modules.
    pub fn star_glyph(&self) -> &'static str {
        match (self.github, self.starred) {
            (false, _) => "",
            (true, true) => STARRED_GLYPH,
            (true, false) => UNSTARRED_GLYPH,
        }
    }
}

/// Label shown in the list: star glyph and path. Non-GitHub modules get two
/// spaces so paths line up.
impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.star_glyph() {
            "" => write!(f, "  {}", self.path),
            glyph => write!(f, "{glyph} {}", self.path),
        }
    }
}

/// Derive `owner/repo` from the part of a GitHub import path after the host.
///
/// With two or more segments, a trailing major-version segment (`v2`, `v10`,
/// ...) is dropped and everything before it is the repository. Without one,
/// the first two segments are the repository. A single segment is returned
/// as-is.
pub fn derive_repo_identifier(remainder: &str) -> String {
    let parts: Vec<&str> = remainder.split('/').collect();

    if parts.len() >= 2 {
        if let Some((last, rest)) = parts.split_last() {
            if is_major_version(last) {
                return rest.join("/");
            }
        }
        return parts[..2].join("/");
    }

    remainder.to_string()
}

/// `v` followed by one or more ASCII digits.
fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_identifier() {
        let cases = [
            ("golang.org/x/mod", ""),
            ("github.com/cli/go-gh/v2", "cli/go-gh"),
            ("github.com/charmbracelet/bubbles", "charmbracelet/bubbles"),
            ("github.com/charmbracelet/bubbles/list/item", "charmbracelet/bubbles"),
            ("github.com/owner/v2", "owner"),
            ("github.com/owner", "owner"),
            ("github.com/a/b/v2beta", "a/b"),
            ("github.com/a/b/c/v2", "a/b/c"),
            ("github.com/a/b/v10", "a/b"),
        ];
        for (path, expected) in cases {
            let dep = Dependency::new(path, "v1.0.0");
            assert_eq!(dep.repo_identifier(), expected, "path {path}");
        }
    }

    #[test]
    fn test_nested_module_with_version_suffix() {
        let dep = Dependency::new("github.com/aws/aws-sdk-go-v2/service/s3/v3", "v3.0.0");
        assert_eq!(dep.repo_identifier(), "aws/aws-sdk-go-v2/service/s3");
        // Not a plain owner/repo pair, so there is nothing to star.
        assert_eq!(dep.star_target(), None);

        let dep = Dependency::new("github.com/aws/aws-sdk-go-v2/service/s3", "v1.79.3");
        assert_eq!(dep.repo_identifier(), "aws/aws-sdk-go-v2");
    }

    #[test]
    fn test_bare_github_host() {
        let dep = Dependency::new("github.com/", "v1.0.0");
        assert!(dep.is_github());
        assert_eq!(dep.repo_identifier(), "");
        assert_eq!(dep.star_target(), None);
        assert_eq!(dep.star_glyph(), UNSTARRED_GLYPH);
    }

    #[test]
    fn test_star_target() {
        assert_eq!(
            Dependency::new("github.com/cli/go-gh/v2", "v2.11.2").star_target(),
            Some("cli/go-gh")
        );
        assert_eq!(Dependency::new("github.com/owner", "v1").star_target(), None);
        assert_eq!(Dependency::new("github.com/owner/v2", "v2").star_target(), None);
        assert_eq!(Dependency::new("golang.org/x/mod", "v1").star_target(), None);
    }

    #[test]
    fn test_urls() {
        let dep = Dependency::new("github.com/cli/go-gh/v2", "v2.11.2");
        assert_eq!(dep.github_url(), "https://github.com/cli/go-gh");
        assert_eq!(
            dep.pkg_go_dev_url(),
            "https://pkg.go.dev/github.com/cli/go-gh/v2"
        );

        let dep = Dependency::new("golang.org/x/mod", "v0.24.0");
        assert_eq!(dep.github_url(), "");
        assert_eq!(dep.pkg_go_dev_url(), "https://pkg.go.dev/golang.org/x/mod");
    }

    #[test]
    fn test_display_label() {
        let mut dep = Dependency::new("github.com/charmbracelet/bubbles", "v0.20.0");
        assert_eq!(dep.to_string(), "☆ github.com/charmbracelet/bubbles");
        dep.set_starred(true);
        assert_eq!(dep.to_string(), "★ github.com/charmbracelet/bubbles");

        let dep = Dependency::new("golang.org/x/mod", "v0.8.0");
        assert_eq!(dep.to_string(), "  golang.org/x/mod");
    }

    #[test]
    fn test_non_github_never_starred() {
        let mut dep = Dependency::new("golang.org/x/mod", "v0.8.0");
        dep.set_starred(true);
        assert!(!dep.is_starred());
        assert!(!dep.is_unstarred_github());
        assert_eq!(dep.star_glyph(), "");
    }

    #[test]
    fn test_size() {
        let mut dep = Dependency::new("golang.org/x/mod", "v0.8.0");
        assert_eq!(dep.formatted_size(), "unknown");
        dep.set_size(1024 * 1024);
        assert_eq!(dep.formatted_size(), "1.00 MB");
    }
}
