//! Opening URLs in the user's browser.

use std::cell::RefCell;

/// Fire-and-forget URL opening.
///
/// Failures are reported to the caller, which only logs them.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), String>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), String> {
        open_in_browser(url)
    }
}

/// Records opened URLs instead of launching anything.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs passed to [`UrlOpener::open`], in call order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), String> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Only URL characters pass; anything a shell could interpret is rejected.
fn is_safe_url(url: &str) -> bool {
    (url.starts_with("https://") || url.starts_with("http://"))
        && url.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(
                    c,
                    ':' | '/' | '.' | '-' | '_' | '~' | '?' | '#' | '[' | ']' | '@' | '!' | '$'
                        | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
                )
        })
}

/// Open a URL in the default browser
pub fn open_in_browser(url: &str) -> Result<(), String> {
    if !is_safe_url(url) {
        return Err("URL contains unsafe characters".to_string());
    }

    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");

    // explorer.exe takes the URL as a plain argument, with no shell involved.
    #[cfg(target_os = "windows")]
    let mut command = std::process::Command::new("explorer");

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");

    command
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to open browser: {}", e))
}
