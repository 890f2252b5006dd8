//! Dependency list panel.

use crate::model::Dependency;
use crate::tui::constants::ITEM_HEIGHT;
use crate::tui::events::Event;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::theme::{colors, Styles};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState as ScrollState, Paragraph},
};

/// Title of the list block.
pub const LIST_TITLE: &str = "Go Module Browser";

/// Single-selection list over the dependency records.
///
/// Holds only an index into the records owned by the app, so star changes
/// show up without copying anything back.
#[derive(Debug, Clone)]
pub struct ListPanel {
    nav: ListState,
    width: u16,
    height: u16,
    show_sizes: bool,
}

impl ListPanel {
    pub fn new(total: usize) -> Self {
        Self {
            nav: ListState::with_total(total),
            width: 0,
            height: 0,
            show_sizes: true,
        }
    }

    /// Whether rows include the cached module size.
    #[must_use]
    pub fn with_sizes(mut self, show_sizes: bool) -> Self {
        self.show_sizes = show_sizes;
        self
    }

    pub fn len(&self) -> usize {
        self.nav.total
    }

    pub fn is_empty(&self) -> bool {
        self.nav.total == 0
    }

    /// Index of the selected record, `None` when the list is empty or the
    /// index is out of range.
    pub fn selected_index(&self) -> Option<usize> {
        (self.nav.selected < self.nav.total).then_some(self.nav.selected)
    }

    /// Select a raw index. Out-of-range indices leave nothing selected.
    pub fn select(&mut self, idx: usize) {
        self.nav.set_selected(idx);
    }

    /// First visible record.
    pub fn scroll_offset(&self) -> usize {
        self.nav.scroll_offset
    }

    /// Records moved by a page-up/page-down.
    pub fn page_size(&self) -> usize {
        self.nav.page_size()
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Adopt new dimensions. The selection is left alone.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let rows = height.saturating_sub(2) / ITEM_HEIGHT;
        self.nav.page_size = usize::from(rows.max(1));
        self.nav.ensure_visible();
    }

    /// Apply a navigation key. Returns whether the event was used.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.nav.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.nav.select_next(),
            KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => self.nav.page_up(),
            KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => self.nav.page_down(),
            KeyCode::Home => self.nav.go_first(),
            KeyCode::End | KeyCode::Char('G') => self.nav.go_last(),
            _ => return false,
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, records: &[Dependency]) {
        let block = Block::default()
            .title(format!(" {} ", LIST_TITLE))
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused());

        if records.is_empty() {
            let empty = Paragraph::new(Line::styled("No dependencies", Styles::placeholder()))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = records
            .iter()
            .map(|dep| ListItem::new(vec![title_line(dep), description_line(dep, self.show_sizes)]))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Styles::selected())
            .highlight_symbol("> ")
            .highlight_spacing(HighlightSpacing::Always);

        let mut state = ScrollState::default()
            .with_offset(self.nav.scroll_offset.min(records.len() - 1))
            .with_selected(self.selected_index());
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn title_line(dep: &Dependency) -> Line<'static> {
    let glyph = match dep.star_glyph() {
        "" => Span::raw(" "),
        glyph => Span::styled(glyph, Styles::star(dep.is_starred())),
    };
    Line::from(vec![
        glyph,
        Span::raw(" "),
        Span::styled(dep.path().to_string(), Style::default().fg(colors().text)),
    ])
}

/// Second line of a row: hosting tag, docs tag and, when shown, the size.
fn description_line(dep: &Dependency, show_size: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    if dep.is_github() {
        spans.push(Span::styled("[GitHub] ", Styles::github_tag()));
    }
    spans.push(Span::styled("[pkg.go]", Styles::docs_tag()));
    if show_size {
        spans.push(Span::styled(
            format!(" {}", dep.formatted_size()),
            Styles::text_muted(),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen(list: &ListPanel, records: &[Dependency], width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| list.render(frame, frame.area(), records))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_description_rows() {
        let mut gh = Dependency::new("github.com/charmbracelet/bubbles", "v1.0.0");
        gh.set_size(1500);
        let records = vec![gh, Dependency::new("golang.org/x/mod", "v0.24.0")];

        let rows = screen(&ListPanel::new(2).with_sizes(false), &records, 60, 8);
        assert!(rows[2].contains("  [GitHub] [pkg.go]"), "{:?}", rows[2]);
        assert!(!rows[2].contains("KB"), "{:?}", rows[2]);
        assert!(rows[4].contains("  [pkg.go]"), "{:?}", rows[4]);
        assert!(!rows[4].contains("[GitHub]"), "{:?}", rows[4]);

        let rows = screen(&ListPanel::new(2), &records, 60, 8);
        assert!(rows[2].contains("[GitHub] [pkg.go] 1.46 KB"), "{:?}", rows[2]);
        assert!(rows[4].contains("[pkg.go] unknown"), "{:?}", rows[4]);
    }

    #[test]
    fn test_navigation_keys() {
        let mut list = ListPanel::new(30);
        list.resize(80, 12); // 10 inner rows, 5 items per page

        assert!(list.handle_event(&key(KeyCode::Char('j'))));
        assert_eq!(list.selected_index(), Some(1));
        list.handle_event(&key(KeyCode::PageDown));
        assert_eq!(list.selected_index(), Some(6));
        list.handle_event(&key(KeyCode::Char('h')));
        assert_eq!(list.selected_index(), Some(1));
        list.handle_event(&key(KeyCode::Char('G')));
        assert_eq!(list.selected_index(), Some(29));
        list.handle_event(&key(KeyCode::Home));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_ignores_commands_and_ctrl() {
        let mut list = ListPanel::new(3);
        assert!(!list.handle_event(&key(KeyCode::Char('s'))));
        assert!(!list.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('j'),
            KeyModifiers::CONTROL
        ))));
        assert!(!list.handle_event(&Event::Tick));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_resize_keeps_selection() {
        let mut list = ListPanel::new(40);
        list.select(25);
        list.resize(100, 8);
        assert_eq!(list.selected_index(), Some(25));
        assert_eq!(list.page_size(), 3);
        assert!(list.scroll_offset() <= 25);
        assert!(list.scroll_offset() + list.page_size() > 25);
    }

    #[test]
    fn test_out_of_range_selection() {
        let mut list = ListPanel::new(3);
        list.select(3);
        assert_eq!(list.selected_index(), None);

        let empty = ListPanel::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.selected_index(), None);
    }
}
