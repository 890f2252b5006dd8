//! The star provider capability.

use crate::error::{BrowserError, BulkStarError, ErrorContext, ProviderErrorKind, Result};
use crate::model::Dependency;

/// Check and change the current user's stars on GitHub repositories.
///
/// Implement [`is_starred`](Self::is_starred) and
/// [`set_starred`](Self::set_starred) for a transport; the record-level
/// operations are provided and keep each [`Dependency`] in sync with the
/// outcome.
///
/// # Example
///
/// ```ignore
/// use gomod_browser::stars::{InMemoryStarProvider, StarProvider};
///
/// let provider = InMemoryStarProvider::new();
/// let starred = provider.star_all_unstarred(&mut deps)?;
/// ```
pub trait StarProvider {
    /// Whether `repo` (`owner/repo`) is starred by the current user.
    fn is_starred(&self, repo: &str) -> Result<bool>;

    /// Star (`true`) or unstar (`false`) `repo`.
    fn set_starred(&self, repo: &str, starred: bool) -> Result<()>;

    /// Name for logs (e.g. "GitHub").
    fn name(&self) -> &'static str;

    /// Update the star flag of every GitHub record with a usable identifier.
    ///
    /// Other records are left alone. The first failed check aborts the
    /// refresh; records checked before it keep their new status.
    fn refresh_starred_status(&self, deps: &mut [Dependency]) -> Result<()> {
        for dep in deps.iter_mut() {
            let Some(repo) = dep.star_target().map(str::to_owned) else {
                continue;
            };
            let starred = self
                .is_starred(&repo)
                .with_context(|| format!("failed to check star status for {repo}"))?;
            tracing::debug!(provider = self.name(), repo = %repo, starred, "star status");
            dep.set_starred(starred);
        }
        Ok(())
    }

    /// Star the repository of one record.
    fn star(&self, dep: &mut Dependency) -> Result<()> {
        update_star(self, dep, true)
    }

    /// Unstar the repository of one record.
    fn unstar(&self, dep: &mut Dependency) -> Result<()> {
        update_star(self, dep, false)
    }

    /// Star or unstar, whichever flips the record's current status.
    fn toggle_star(&self, dep: &mut Dependency) -> Result<()> {
        if dep.is_starred() {
            self.unstar(dep)
        } else {
            self.star(dep)
        }
    }

    /// Star every GitHub record that is not starred yet, in order.
    ///
    /// Stops at the first failure. The error carries how many repositories
    /// were starred before it; those stars are not rolled back.
    fn star_all_unstarred(&self, deps: &mut [Dependency]) -> std::result::Result<usize, BulkStarError> {
        let mut starred = 0;
        for dep in deps.iter_mut().filter(|d| d.is_unstarred_github()) {
            self.star(dep)
                .map_err(|source| BulkStarError { starred, source })?;
            starred += 1;
        }
        Ok(starred)
    }
}

fn update_star<P: StarProvider + ?Sized>(provider: &P, dep: &mut Dependency, starred: bool) -> Result<()> {
    if !dep.is_github() {
        return Err(BrowserError::provider(
            "updating star",
            ProviderErrorKind::NotHosted(dep.path().to_string()),
        ));
    }
    let Some(repo) = dep.star_target().map(str::to_owned) else {
        return Err(BrowserError::provider(
            "updating star",
            ProviderErrorKind::InvalidRepository(dep.path().to_string()),
        ));
    };

    let action = if starred { "star" } else { "unstar" };
    provider
        .set_starred(&repo, starred)
        .with_context(|| format!("failed to {action} repository {repo}"))?;
    tracing::debug!(provider = provider.name(), repo = %repo, action, "star updated");
    dep.set_starred(starred);
    Ok(())
}
