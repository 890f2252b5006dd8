//! `go.mod` parser.

use crate::error::{BrowserError, ErrorContext, ManifestErrorKind, Result};
use crate::model::Dependency;
use std::path::{Path, PathBuf};

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "go.mod";

/// Parser bound to a `go.mod` location.
#[derive(Debug, Clone)]
pub struct GoModParser {
    path: PathBuf,
}

impl GoModParser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parser for `./go.mod`.
    pub fn for_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("resolving current directory")?;
        Ok(Self::new(cwd.join(MANIFEST_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and return its direct dependencies.
    pub fn parse(&self) -> Result<Vec<Dependency>> {
        parse_go_mod(&self.path)
    }
}

/// Read a `go.mod` file and return its direct dependencies.
pub fn parse_go_mod(path: &Path) -> Result<Vec<Dependency>> {
    let content = std::fs::read_to_string(path).map_err(|e| BrowserError::io(path, e))?;
    parse_go_mod_str(&content).with_context(|| format!("in {}", path.display()))
}

/// Parse `go.mod` content and return its direct dependencies.
///
/// Requirements marked `// indirect` are skipped. Order and duplicates are
/// kept exactly as declared.
pub fn parse_go_mod_str(content: &str) -> Result<Vec<Dependency>> {
    let mut deps = Vec::new();
    let mut has_module = false;
    // Directive name and opening line of the block being read, if any.
    let mut block: Option<(String, usize)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let (code, comment) = split_comment(raw);
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        if block.is_some() {
            if code == ")" {
                block = None;
                continue;
            }
            if block.as_ref().is_some_and(|(directive, _)| directive == "require") {
                if let Some(dep) = parse_requirement(code, comment, line_no)? {
                    deps.push(dep);
                }
            }
            continue;
        }

        let (directive, rest) = match code.split_once(char::is_whitespace) {
            Some((d, r)) => (d, r.trim()),
            None => (code, ""),
        };
        // `require(` without a space is accepted by the go tool.
        let (directive, rest) = match directive.strip_suffix('(') {
            Some(d) => (d, "("),
            None => (directive, rest),
        };

        if rest == "(" {
            block = Some((directive.to_string(), line_no));
            continue;
        }

        match directive {
            "module" => has_module = !unquote(rest).is_empty(),
            "require" => {
                if let Some(dep) = parse_requirement(rest, comment, line_no)? {
                    deps.push(dep);
                }
            }
            other => tracing::trace!(directive = other, line = line_no, "skipping directive"),
        }
    }

    if let Some((directive, line)) = block {
        return Err(BrowserError::manifest(
            "reading go.mod",
            ManifestErrorKind::UnterminatedBlock { line, directive },
        ));
    }

    if !has_module {
        return Err(BrowserError::manifest(
            "reading go.mod",
            ManifestErrorKind::MissingModule,
        ));
    }

    tracing::debug!(count = deps.len(), "parsed direct dependencies");
    Ok(deps)
}

/// Parse `path version`. Returns `None` for indirect requirements.
fn parse_requirement(code: &str, comment: Option<&str>, line: usize) -> Result<Option<Dependency>> {
    let mut fields = code.split_whitespace();
    let (path, version) = match (fields.next(), fields.next(), fields.next()) {
        (Some(path), Some(version), None) => (unquote(path), unquote(version)),
        _ => {
            return Err(BrowserError::manifest(
                "reading go.mod",
                ManifestErrorKind::MalformedRequire {
                    line,
                    text: code.to_string(),
                },
            ))
        }
    };

    if comment.is_some_and(is_indirect_comment) {
        return Ok(None);
    }

    Ok(Some(Dependency::new(path, version)))
}

/// Split a line into code and the text of a trailing `//` comment.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find("//") {
        Some(pos) => (&line[..pos], Some(line[pos + 2..].trim())),
        None => (line, None),
    }
}

/// `// indirect` or `// indirect; other notes`.
fn is_indirect_comment(comment: &str) -> bool {
    comment == "indirect" || comment.starts_with("indirect;")
}

fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| token.strip_prefix('`').and_then(|t| t.strip_suffix('`')))
        .unwrap_or(token)
}
