//! Modal yes/no confirmation.

use crate::tui::constants::{DIALOG_HEIGHT, DIALOG_WIDTH};
use crate::tui::theme::Styles;
use crate::tui::widgets::centered_fixed;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Title of the bulk-star confirmation.
pub const BULK_STAR_TITLE: &str = "Star all unstarred GitHub repositories?";

/// Outcome of a key press while the dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

/// A confirmation built when it is needed and dropped once answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    title: String,
    message: String,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Confirmation for starring `count` repositories.
    pub fn star_all(count: usize) -> Self {
        Self::new(
            BULK_STAR_TITLE,
            format!("This will add stars to {count} repositories."),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `y`/`Y`/Enter confirm; `n`/`N`/Esc/`q`/Ctrl+C cancel; anything else
    /// is ignored.
    pub fn handle_key(&self, key: &KeyEvent) -> Option<DialogChoice> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return (key.code == KeyCode::Char('c')).then_some(DialogChoice::Cancel);
        }
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(DialogChoice::Confirm),
            KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc => Some(DialogChoice::Cancel),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let area = centered_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        frame.render_widget(Clear, area);

        let buttons = Line::from(vec![
            Span::styled("   Yes   ", Styles::button(true)),
            Span::raw(" "),
            Span::styled("   No   ", Styles::button(false)),
        ]);
        let lines = vec![
            Line::styled(self.title.clone(), Styles::title()),
            Line::from(""),
            Line::styled(self.message.clone(), Styles::text()),
            Line::from(""),
            buttons,
        ];

        let dialog = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Styles::border()),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(dialog, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_star_all_message_uses_decimal_count() {
        let dialog = ConfirmDialog::star_all(42);
        assert_eq!(dialog.title(), BULK_STAR_TITLE);
        assert_eq!(dialog.message(), "This will add stars to 42 repositories.");
    }

    #[test]
    fn test_key_classes() {
        let dialog = ConfirmDialog::star_all(1);
        for code in [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Enter] {
            assert_eq!(
                dialog.handle_key(&press(code, KeyModifiers::NONE)),
                Some(DialogChoice::Confirm)
            );
        }
        for code in [
            KeyCode::Char('n'),
            KeyCode::Char('N'),
            KeyCode::Char('q'),
            KeyCode::Esc,
        ] {
            assert_eq!(
                dialog.handle_key(&press(code, KeyModifiers::NONE)),
                Some(DialogChoice::Cancel)
            );
        }
        assert_eq!(
            dialog.handle_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(DialogChoice::Cancel)
        );
        assert_eq!(
            dialog.handle_key(&press(KeyCode::Char('Y'), KeyModifiers::SHIFT)),
            Some(DialogChoice::Confirm)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let dialog = ConfirmDialog::star_all(1);
        for code in [KeyCode::Char('j'), KeyCode::Down, KeyCode::Char('S'), KeyCode::Tab] {
            assert_eq!(dialog.handle_key(&press(code, KeyModifiers::NONE)), None);
        }
        assert_eq!(
            dialog.handle_key(&press(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            None
        );
    }
}
