//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action before the first
/// resize reports a real list height.
pub(crate) const PAGE_SIZE: usize = 10;

/// Rows reserved for the detail panel.
pub(crate) const DETAIL_HEIGHT: u16 = 10;

/// Rows reserved for the footer (key hints and status line).
pub(crate) const HELP_HEIGHT: u16 = 3;

/// The list never shrinks below this many rows.
pub(crate) const MIN_LIST_HEIGHT: u16 = 5;

/// Rows drawn per list item (title and description).
pub(crate) const ITEM_HEIGHT: u16 = 2;

/// Fixed confirmation dialog size.
pub(crate) const DIALOG_WIDTH: u16 = 60;
pub(crate) const DIALOG_HEIGHT: u16 = 7;

/// Default event poll interval in milliseconds.
pub(crate) const DEFAULT_TICK_RATE_MS: u64 = 250;

/// How long an outcome message stays in the footer.
pub(crate) const STATUS_TTL_SECS: u64 = 5;
