//! Interactive terminal UI built on ratatui.
//!
//! [`App`] is the state machine: it owns the dependency records, a list
//! panel holding the cursor, a detail panel mirroring the cursor, and an
//! optional confirmation dialog. [`run_tui`] drives it from crossterm events.

mod app;
pub mod browser;
pub(crate) mod constants;
mod events;
pub mod state;
mod status;
pub mod theme;
mod ui;
pub mod views;
pub(crate) mod widgets;

pub use app::{App, Mode};
pub use browser::{RecordingOpener, SystemBrowser, UrlOpener};
pub use events::{Event, EventHandler};
pub use state::{ListNavigation, ListState};
pub use status::{StatusKind, StatusMessage};
pub use theme::{colors, current_theme_name, set_theme, ColorScheme, FooterHints, Styles, Theme};
pub use ui::{render, run_tui};
pub use views::{ConfirmDialog, DetailPanel, DialogChoice, ListPanel};
