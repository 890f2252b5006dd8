//! In-memory star provider.
//!
//! Holds the starred set locally. Used for `--offline` sessions and as a
//! deterministic double in tests, with optional failure injection.

use super::traits::StarProvider;
use crate::error::{BrowserError, ProviderErrorKind, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// Star provider backed by a local set of `owner/repo` names.
#[derive(Debug, Default)]
pub struct InMemoryStarProvider {
    starred: RefCell<HashSet<String>>,
    failing_checks: HashSet<String>,
    fail_on_mutation: Option<usize>,
    checks: Cell<usize>,
    mutations: Cell<usize>,
}

impl InMemoryStarProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with these repositories starred.
    #[must_use]
    pub fn with_starred<I, S>(self, repos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starred
            .borrow_mut()
            .extend(repos.into_iter().map(Into::into));
        self
    }

    /// Make the `n`-th star/unstar call (1-indexed) fail.
    #[must_use]
    pub fn fail_on_mutation(mut self, n: usize) -> Self {
        self.fail_on_mutation = Some(n);
        self
    }

    /// Make status checks for `repo` fail.
    #[must_use]
    pub fn fail_check_for(mut self, repo: impl Into<String>) -> Self {
        self.failing_checks.insert(repo.into());
        self
    }

    /// Number of status checks performed, including failed ones.
    pub fn check_count(&self) -> usize {
        self.checks.get()
    }

    /// Number of star/unstar calls made, including failed ones.
    pub fn mutation_count(&self) -> usize {
        self.mutations.get()
    }

    /// Currently starred repositories, sorted.
    pub fn starred_repos(&self) -> Vec<String> {
        let mut repos: Vec<String> = self.starred.borrow().iter().cloned().collect();
        repos.sort();
        repos
    }
}

impl StarProvider for InMemoryStarProvider {
    fn is_starred(&self, repo: &str) -> Result<bool> {
        self.checks.set(self.checks.get() + 1);
        if self.failing_checks.contains(repo) {
            return Err(BrowserError::provider(
                format!("checking {repo}"),
                ProviderErrorKind::Network("injected failure".to_string()),
            ));
        }
        Ok(self.starred.borrow().contains(repo))
    }

    fn set_starred(&self, repo: &str, starred: bool) -> Result<()> {
        let call = self.mutations.get() + 1;
        self.mutations.set(call);
        if self.fail_on_mutation == Some(call) {
            return Err(BrowserError::provider(
                format!("updating {repo}"),
                ProviderErrorKind::Api {
                    status: 502,
                    message: "injected failure".to_string(),
                },
            ));
        }

        let mut set = self.starred.borrow_mut();
        if starred {
            set.insert(repo.to_string());
        } else {
            set.remove(repo);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_injection() {
        let provider = InMemoryStarProvider::new()
            .with_starred(["a/b"])
            .fail_on_mutation(2)
            .fail_check_for("x/y");

        assert!(provider.is_starred("a/b").unwrap());
        assert!(provider.is_starred("x/y").is_err());
        assert_eq!(provider.check_count(), 2);

        provider.set_starred("c/d", true).unwrap();
        assert!(provider.set_starred("e/f", true).is_err());
        provider.set_starred("a/b", false).unwrap();

        assert_eq!(provider.mutation_count(), 3);
        assert_eq!(provider.starred_repos(), vec!["c/d".to_string()]);
    }
}
