//! Detail panel for the selected dependency.

use crate::model::Dependency;
use crate::tui::theme::Styles;
use crate::tui::widgets::truncate_str;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Placeholder shown when nothing is selected.
pub const NO_SELECTION: &str = "No package selected";

/// Read-only view of one record. The app decides which one.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    shown: Option<usize>,
    width: u16,
    height: u16,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the record at `idx`, or the placeholder for `None`.
    pub fn set_record(&mut self, idx: Option<usize>) {
        self.shown = idx;
    }

    pub fn shown(&self) -> Option<usize> {
        self.shown
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Label/value lines for `dep`, values cut to `max_width` columns.
    pub fn lines(dep: &Dependency, max_width: usize) -> Vec<Line<'static>> {
        let mut fields = vec![("Name: ", dep.path().to_string())];
        fields.push(("Version: ", dep.version().to_string()));
        if dep.is_github() {
            fields.push(("GitHub: ", dep.github_url()));
        }
        fields.push(("pkg.go.dev: ", dep.pkg_go_dev_url()));

        let mut lines = Vec::with_capacity(fields.len() * 2);
        for (i, (label, value)) in fields.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            let room = max_width.saturating_sub(label.len());
            lines.push(Line::from(vec![
                Span::styled(label, Styles::label()),
                Span::styled(truncate_str(&value, room), Styles::value()),
            ]));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, records: &[Dependency]) {
        let area = self.clip(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .padding(Padding::new(2, 2, 1, 0));

        let paragraph = match self.shown.and_then(|idx| records.get(idx)) {
            Some(dep) => {
                let inner_width = usize::from(area.width.saturating_sub(6));
                Paragraph::new(Self::lines(dep, inner_width))
                    .block(block.border_style(Styles::border()))
            }
            None => Paragraph::new(Line::styled(NO_SELECTION, Styles::placeholder()))
                .block(block.border_style(Styles::border_empty())),
        };
        frame.render_widget(paragraph, area);
    }

    /// Keep within the size set by the last resize, when there was one.
    fn clip(&self, area: Rect) -> Rect {
        if self.width == 0 || self.height == 0 {
            return area;
        }
        Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_github_fields_in_order() {
        let dep = Dependency::new("github.com/cli/go-gh/v2", "v2.11.2");
        assert_eq!(
            text(&DetailPanel::lines(&dep, 200)),
            vec![
                "Name: github.com/cli/go-gh/v2",
                "",
                "Version: v2.11.2",
                "",
                "GitHub: https://github.com/cli/go-gh",
                "",
                "pkg.go.dev: https://pkg.go.dev/github.com/cli/go-gh/v2",
            ]
        );
    }

    #[test]
    fn test_non_github_has_no_repository_line() {
        let dep = Dependency::new("golang.org/x/mod", "v0.24.0");
        let lines = text(&DetailPanel::lines(&dep, 200));
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| !l.starts_with("GitHub")));
    }

    #[test]
    fn test_long_values_truncated() {
        let dep = Dependency::new("golang.org/x/mod", "v0.24.0");
        let lines = text(&DetailPanel::lines(&dep, 20));
        assert_eq!(lines[4], "pkg.go.dev: https...");
    }

    #[test]
    fn test_placeholder_border_is_dimmed() {
        let records = vec![Dependency::new("golang.org/x/mod", "v0.24.0")];
        let corner = |panel: &DetailPanel| {
            let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
            terminal
                .draw(|frame| panel.render(frame, frame.area(), &records))
                .unwrap();
            terminal.backend().buffer()[(0, 0)].modifier
        };

        let mut panel = DetailPanel::new();
        let empty = corner(&panel);
        assert!(empty.contains(Modifier::DIM | Modifier::ITALIC));

        panel.set_record(Some(0));
        let filled = corner(&panel);
        assert!(!filled.intersects(Modifier::DIM | Modifier::ITALIC));
    }

    #[test]
    fn test_clip_to_resized_dimensions() {
        let mut panel = DetailPanel::new();
        let area = Rect::new(0, 5, 120, 20);
        assert_eq!(panel.clip(area), area);

        panel.resize(80, 10);
        assert_eq!(panel.clip(area), Rect::new(0, 5, 80, 10));
    }
}
