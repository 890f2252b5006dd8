//! Layout and text helpers shared by the views.

use ratatui::prelude::*;

/// A rectangle of fixed size centered in `area`, shrunk to fit when the
/// terminal is smaller.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    let display_width = UnicodeWidthStr::width(s);
    if display_width <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let mut width = 0;
        let truncated: String = s
            .chars()
            .take_while(|ch| {
                let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
                if width + w > max_width - 3 {
                    return false;
                }
                width += w;
                true
            })
            .collect();
        format!("{}...", truncated)
    } else {
        let mut width = 0;
        s.chars()
            .take_while(|ch| {
                let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
                if width + w > max_width {
                    return false;
                }
                width += w;
                true
            })
            .collect()
    }
}

/// Split the screen into list, detail and footer rows.
///
/// Detail and footer keep their fixed heights; the list takes the rest but
/// never drops below the minimum, so small terminals clip the bottom.
pub fn main_layout(area: Rect) -> [Rect; 3] {
    use super::constants::{DETAIL_HEIGHT, HELP_HEIGHT};

    let list_height = list_height(area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(list_height),
            Constraint::Length(DETAIL_HEIGHT),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Rows available to the list for a terminal of the given height.
pub fn list_height(terminal_height: u16) -> u16 {
    use super::constants::{DETAIL_HEIGHT, HELP_HEIGHT, MIN_LIST_HEIGHT};

    terminal_height
        .saturating_sub(DETAIL_HEIGHT + HELP_HEIGHT)
        .max(MIN_LIST_HEIGHT)
}
