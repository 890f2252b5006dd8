//! Size lookup for modules in the local Go module cache.
//!
//! Modules are extracted to `<root>/<escaped path>@<escaped version>`, where
//! the escaping replaces each uppercase letter with `!` and its lowercase form
//! so the layout survives case-insensitive file systems.

use crate::error::{BrowserError, Result};
use crate::model::Dependency;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only view of a Go module cache directory.
#[derive(Debug, Clone)]
pub struct ModCache {
    root: PathBuf,
}

impl ModCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the cache from `GOMODCACHE`, `GOPATH`, or the home directory.
    pub fn discover() -> Option<Self> {
        resolve_root(
            std::env::var_os("GOMODCACHE").map(PathBuf::from),
            std::env::var_os("GOPATH"),
            dirs::home_dir(),
        )
        .map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the extracted module.
    pub fn module_dir(&self, dep: &Dependency) -> PathBuf {
        let mut name = escape_path(dep.path());
        if !dep.version().is_empty() {
            name.push('@');
            name.push_str(&escape_path(dep.version()));
        }
        name.split('/')
            .fold(self.root.clone(), |dir, segment| dir.join(segment))
    }

    /// Total size in bytes of the regular files of a module.
    pub fn module_size(&self, dep: &Dependency) -> Result<u64> {
        let dir = self.module_dir(dep);
        if !dir.is_dir() {
            return Err(BrowserError::io(
                &dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "module not in cache"),
            ));
        }

        let mut total = 0;
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| dir.clone(), Path::to_path_buf);
                BrowserError::io(path, std::io::Error::other(e.to_string()))
            })?;
            if entry.file_type().is_file() {
                let meta = entry
                    .metadata()
                    .map_err(|e| BrowserError::io(entry.path(), std::io::Error::other(e.to_string())))?;
                total += meta.len();
            }
        }
        Ok(total)
    }
}

/// Fill in cached sizes. Modules that are not in the cache keep an unknown size.
///
/// Returns the number of records whose size was found.
pub fn populate_sizes(deps: &mut [Dependency], cache: &ModCache) -> usize {
    let mut found = 0;
    for dep in deps.iter_mut() {
        match cache.module_size(dep) {
            Ok(bytes) => {
                dep.set_size(bytes);
                found += 1;
            }
            Err(e) => tracing::debug!("no cached size for {}: {}", dep.path(), e),
        }
    }
    found
}

/// Cache root from, in order: `GOMODCACHE`, the first `GOPATH` entry plus
/// `pkg/mod`, or `~/go/pkg/mod`.
pub fn resolve_root(
    gomodcache: Option<PathBuf>,
    gopath: Option<std::ffi::OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = gomodcache.filter(|d| !d.as_os_str().is_empty()) {
        return Some(dir);
    }

    let gopath = gopath
        .as_deref()
        .and_then(|v| std::env::split_paths(v).find(|p| !p.as_os_str().is_empty()))
        .or_else(|| home.map(|h| h.join("go")))?;

    Some(gopath.join("pkg").join("mod"))
}

/// Go module cache case-encoding: `BurntSushi` becomes `!burnt!sushi`.
pub fn escape_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            out.push('!');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
