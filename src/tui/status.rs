//! Footer status line.

use std::time::{Duration, Instant};

/// How a status message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// An action completed
    Success,
    /// An action did not complete; details go to the log
    Warning,
}

/// Temporary outcome message with optional auto-clear.
///
/// Messages report what happened ("Starred cli/go-gh"), never the underlying
/// error. They are non-modal: input keeps flowing while one is shown.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<(StatusKind, String)>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.set(StatusKind::Success, msg);
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.set(StatusKind::Warning, msg);
    }

    fn set(&mut self, kind: StatusKind, msg: impl Into<String>) {
        self.message = Some((kind, msg.into()));
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message once its display time has passed.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// The current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<(StatusKind, &str)> {
        self.message.as_ref().map(|(kind, msg)| (*kind, msg.as_str()))
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.peek().map(|(_, msg)| msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();
        assert!(status.peek().is_none());

        status.warning("Could not update star for cli/go-gh");
        assert_eq!(
            status.peek(),
            Some((StatusKind::Warning, "Could not update star for cli/go-gh"))
        );

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(50));

        status.success("Starred cli/go-gh");
        status.expire();
        assert!(status.text().is_some());

        thread::sleep(Duration::from_millis(60));
        status.expire();
        assert!(status.text().is_none());
    }

    #[test]
    fn test_status_message_no_auto_clear_default() {
        let mut status = StatusMessage::new();

        status.success("No auto clear");
        thread::sleep(Duration::from_millis(10));
        status.expire();
        assert_eq!(status.text(), Some("No auto clear"));
    }
}
