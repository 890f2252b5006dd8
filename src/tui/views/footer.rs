//! Footer with key hints and the status line.

use crate::tui::status::{StatusKind, StatusMessage};
use crate::tui::theme::{render_footer_hints, FooterHints, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, status: &StatusMessage) {
    let status_line = match status.peek() {
        Some((StatusKind::Success, msg)) => Line::styled(msg.to_string(), Styles::success()),
        Some((StatusKind::Warning, msg)) => Line::styled(msg.to_string(), Styles::warning()),
        None => Line::from(""),
    };

    let footer = Paragraph::new(vec![
        Line::from(render_footer_hints(&FooterHints::listing())),
        status_line,
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Styles::border()),
    )
    .style(Styles::status_bar());

    frame.render_widget(footer, area);
}
