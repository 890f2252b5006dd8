//! Terminal setup, the event loop, and frame rendering.

use super::app::App;
use super::browser::UrlOpener;
use super::events::{Event, EventHandler};
use super::views::render_footer;
use super::widgets::main_layout;
use crate::stars::StarProvider;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*};
use std::io::{self, stdout};

/// Run the TUI until the user quits.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error.
pub fn run_tui<P: StarProvider, O: UrlOpener>(app: &mut App<P, O>, tick_rate_ms: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, &EventHandler::new(tick_rate_ms));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B, P, O>(terminal: &mut Terminal<B>, app: &mut App<P, O>, events: &EventHandler) -> io::Result<()>
where
    B: Backend,
    P: StarProvider,
    O: UrlOpener,
{
    let size = terminal.size()?;
    app.handle_event(Event::Resize(size.width, size.height));

    loop {
        terminal.draw(|frame| render(frame, app))?;

        let event = events.next()?;
        app.handle_event(event);

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Draw one frame: list, detail and footer while browsing; only the dialog
/// while confirming.
pub fn render<P: StarProvider, O: UrlOpener>(frame: &mut Frame, app: &App<P, O>) {
    let area = frame.area();

    if let Some(dialog) = app.dialog() {
        dialog.render(frame, area);
        return;
    }

    let [list_area, detail_area, footer_area] = main_layout(area);
    app.list().render(frame, list_area, app.records());
    app.detail().render(frame, detail_area, app.records());
    render_footer(frame, footer_area, app.status());
}
