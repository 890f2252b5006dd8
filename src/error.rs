//! Unified error types for gomod-browser.
//!
//! Every fallible library operation returns [`Result`], whose error side is
//! [`BrowserError`]. Variants carry a human-readable context string plus a
//! specific kind as their `#[source]`, so the chain prints well from `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gomod-browser operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrowserError {
    /// Errors while reading the dependency manifest
    #[error("Failed to parse manifest: {context}")]
    Manifest {
        context: String,
        #[source]
        source: ManifestErrorKind,
    },

    /// Errors from a star provider (check, star, unstar)
    #[error("Star provider failed: {context}")]
    Provider {
        context: String,
        #[source]
        source: ProviderErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific manifest error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ManifestErrorKind {
    #[error("no module directive found")]
    MissingModule,

    #[error("line {line}: malformed require entry '{text}'")]
    MalformedRequire { line: usize, text: String },

    #[error("line {line}: unterminated {directive} block")]
    UnterminatedBlock { line: usize, directive: String },
}

/// Specific star provider error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProviderErrorKind {
    #[error("not a GitHub repository: {0}")]
    NotHosted(String),

    #[error("invalid GitHub repository path: {0}")]
    InvalidRepository(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("not authorized: {0}")]
    Unauthorized(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for gomod-browser operations
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Failure of a fail-fast bulk star operation.
///
/// `starred` counts the repositories that were starred before `source`
/// stopped the run. Those stars are kept.
#[derive(Error, Debug)]
#[error("starred {starred} repositories before failing: {source}")]
pub struct BulkStarError {
    pub starred: usize,
    #[source]
    pub source: BrowserError,
}

// ============================================================================
// Error construction helpers
// ============================================================================

impl BrowserError {
    /// Create a manifest error with context
    pub fn manifest(context: impl Into<String>, source: ManifestErrorKind) -> Self {
        Self::Manifest {
            context: context.into(),
            source,
        }
    }

    /// Create a provider error with context
    pub fn provider(context: impl Into<String>, source: ProviderErrorKind) -> Self {
        Self::Provider {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The provider error kind, if this is a provider error.
    pub fn provider_kind(&self) -> Option<&ProviderErrorKind> {
        match self {
            Self::Provider { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BrowserError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The new context is prepended to the existing one, so a chain reads
/// outermost first: `"loading manifest: line 4: ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<BrowserError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: BrowserError, new_ctx: &str) -> BrowserError {
    match err {
        BrowserError::Manifest {
            context: existing,
            source,
        } => BrowserError::Manifest {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BrowserError::Provider {
            context: existing,
            source,
        } => BrowserError::Provider {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BrowserError::Io {
            path,
            message,
            source,
        } => BrowserError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        BrowserError::Config(msg) => BrowserError::Config(chain_context(new_ctx, &msg)),
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
