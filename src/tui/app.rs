//! Application state machine.
//!
//! The app owns the dependency records and routes each input event either to
//! the list (while browsing) or to the confirmation dialog (while one is
//! open). Star changes go through the [`StarProvider`] and are applied to the
//! records in place, so the list and detail panels always see the same state.

use super::browser::{SystemBrowser, UrlOpener};
use super::constants::{DETAIL_HEIGHT, STATUS_TTL_SECS};
use super::events::Event;
use super::status::StatusMessage;
use super::views::{ConfirmDialog, DetailPanel, DialogChoice, ListPanel};
use super::widgets::list_height;
use crate::model::Dependency;
use crate::stars::StarProvider;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// What the app is doing.
///
/// Dialog data only exists while confirming, so a dialog can never linger
/// behind the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list (initial state)
    Listing,
    /// Waiting for a yes/no answer
    Confirming(ConfirmDialog),
}

/// Keys intercepted before the list sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    OpenGitHub,
    OpenDocs,
    ToggleStar,
    StarAll,
}

impl Command {
    fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return (key.code == KeyCode::Char('c')).then_some(Self::Quit);
        }
        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('g') => Some(Self::OpenGitHub),
            KeyCode::Char('p') => Some(Self::OpenDocs),
            KeyCode::Char('s') => Some(Self::ToggleStar),
            KeyCode::Char('S') => Some(Self::StarAll),
            _ => None,
        }
    }
}

/// The dependency browser.
pub struct App<P, O = SystemBrowser> {
    records: Vec<Dependency>,
    list: ListPanel,
    detail: DetailPanel,
    mode: Mode,
    provider: P,
    opener: O,
    status: StatusMessage,
    viewport: Option<(u16, u16)>,
    should_quit: bool,
}

impl<P: StarProvider> App<P> {
    /// Create an app that opens URLs in the system browser.
    pub fn new(records: Vec<Dependency>, provider: P) -> Self {
        Self::with_opener(records, provider, SystemBrowser)
    }
}

impl<P: StarProvider, O: UrlOpener> App<P, O> {
    pub fn with_opener(records: Vec<Dependency>, provider: P, opener: O) -> Self {
        let mut app = Self {
            list: ListPanel::new(records.len()),
            detail: DetailPanel::new(),
            records,
            mode: Mode::Listing,
            provider,
            opener,
            status: StatusMessage::with_auto_clear(Duration::from_secs(STATUS_TTL_SECS)),
            viewport: None,
            should_quit: false,
        };
        app.sync_detail();
        app
    }

    /// Show or hide cached module sizes in the list rows.
    #[must_use]
    pub fn with_sizes(mut self, show_sizes: bool) -> Self {
        self.list = self.list.with_sizes(show_sizes);
        self
    }

    pub fn records(&self) -> &[Dependency] {
        &self.records
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The open dialog, if any.
    pub fn dialog(&self) -> Option<&ConfirmDialog> {
        match &self.mode {
            Mode::Confirming(dialog) => Some(dialog),
            Mode::Listing => None,
        }
    }

    pub fn list(&self) -> &ListPanel {
        &self.list
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The record under the list cursor.
    pub fn current_selection(&self) -> Option<&Dependency> {
        self.list.selected_index().and_then(|idx| self.records.get(idx))
    }

    /// The record the detail panel is showing.
    pub fn detail_record(&self) -> Option<&Dependency> {
        self.detail.shown().and_then(|idx| self.records.get(idx))
    }

    /// Move the list cursor to `idx` and update the detail panel.
    pub fn select(&mut self, idx: usize) {
        self.list.select(idx);
        self.sync_detail();
    }

    /// Handle one input event. Events are processed strictly one at a time;
    /// provider calls block until they finish.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.viewport = Some((width, height)),
            Event::Tick => self.status.expire(),
            Event::Key(_) => {}
        }

        if let Mode::Confirming(dialog) = &self.mode {
            let choice = match &event {
                Event::Key(key) => dialog.handle_key(key),
                _ => None,
            };
            match choice {
                Some(DialogChoice::Confirm) => self.star_all_unstarred(),
                Some(DialogChoice::Cancel) => {
                    tracing::debug!("bulk star cancelled");
                    self.close_dialog();
                }
                None => {}
            }
            return;
        }

        match &event {
            Event::Resize(width, height) => self.layout(*width, *height),
            Event::Key(key) => {
                self.status.clear();
                if let Some(command) = Command::from_key(key) {
                    self.execute(command);
                    return;
                }
                self.list.handle_event(&event);
            }
            Event::Tick => {
                self.list.handle_event(&event);
            }
        }
        self.sync_detail();
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::OpenGitHub => {
                let url = self
                    .current_selection()
                    .filter(|dep| dep.is_github())
                    .map(Dependency::github_url);
                if let Some(url) = url {
                    self.open(&url);
                }
            }
            Command::OpenDocs => {
                if let Some(url) = self.current_selection().map(Dependency::pkg_go_dev_url) {
                    self.open(&url);
                }
            }
            Command::ToggleStar => self.toggle_selected_star(),
            Command::StarAll => self.confirm_star_all(),
        }
    }

    fn open(&self, url: &str) {
        tracing::debug!("opening {}", url);
        if let Err(e) = self.opener.open(url) {
            tracing::warn!("Failed to open {}: {}", url, e);
        }
    }

    fn toggle_selected_star(&mut self) {
        let Some(dep) = self
            .list
            .selected_index()
            .and_then(|idx| self.records.get_mut(idx))
        else {
            return;
        };
        if !dep.is_github() {
            return;
        }

        let repo = dep.repo_identifier().to_string();
        let was_starred = dep.is_starred();
        match self.provider.toggle_star(dep) {
            Ok(()) => {
                let verb = if was_starred { "Unstarred" } else { "Starred" };
                tracing::info!("{} {}", verb, repo);
                self.status.success(format!("{verb} {repo}"));
            }
            Err(e) => {
                tracing::warn!("Failed to toggle star for {}: {}", repo, e);
                self.status.warning(format!("Could not update star for {repo}"));
            }
        }
    }

    fn confirm_star_all(&mut self) {
        let count = self
            .records
            .iter()
            .filter(|dep| dep.is_unstarred_github())
            .count();
        if count == 0 {
            tracing::debug!("no unstarred GitHub repositories");
            return;
        }
        self.mode = Mode::Confirming(ConfirmDialog::star_all(count));
    }

    fn star_all_unstarred(&mut self) {
        match self.provider.star_all_unstarred(&mut self.records) {
            Ok(starred) => {
                tracing::info!("Starred {} repositories", starred);
                self.status.success(format!("Starred {}", repositories(starred)));
            }
            Err(e) => {
                tracing::warn!("Bulk star stopped: {}", e);
                self.status.warning(format!(
                    "Starred {} before an error",
                    repositories(e.starred)
                ));
            }
        }
        self.close_dialog();
    }

    fn close_dialog(&mut self) {
        self.mode = Mode::Listing;
        // The terminal may have been resized while the dialog was open.
        if let Some((width, height)) = self.viewport {
            self.layout(width, height);
        }
        self.sync_detail();
    }

    /// Give the list whatever the detail panel and footer leave over.
    fn layout(&mut self, width: u16, height: u16) {
        self.list.resize(width, list_height(height));
        self.detail.resize(width, DETAIL_HEIGHT);
    }

    fn sync_detail(&mut self) {
        self.detail.set_record(self.list.selected_index());
    }
}

fn repositories(n: usize) -> String {
    if n == 1 {
        "1 repository".to_string()
    } else {
        format!("{n} repositories")
    }
}
