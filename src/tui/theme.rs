//! Centralized theme and color scheme for the TUI.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Star status colors
    pub starred: Color,
    pub unstarred: Color,
    pub github_tag: Color,
    pub docs_tag: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Button colors
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_active_fg: Color,
    pub button_active_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            starred: Color::Yellow,
            unstarred: Color::Gray,
            github_tag: Color::Cyan,
            docs_tag: Color::Blue,

            primary: Color::Magenta,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Magenta,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            button_fg: Color::White,
            button_bg: Color::DarkGray,
            button_active_fg: Color::Black,
            button_active_bg: Color::Magenta,
        }
    }

    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            starred: Color::Rgb(180, 140, 0),
            unstarred: Color::Rgb(100, 100, 100),
            github_tag: Color::Rgb(0, 128, 128),
            docs_tag: Color::Rgb(0, 0, 200),

            primary: Color::Rgb(128, 0, 128),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(150, 150, 150),
            border_focused: Color::Rgb(128, 0, 128),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Black,
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 200, 230),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            button_fg: Color::Black,
            button_bg: Color::Rgb(200, 200, 200),
            button_active_fg: Color::White,
            button_active_bg: Color::Rgb(128, 0, 128),
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            starred: Color::LightYellow,
            unstarred: Color::White,
            github_tag: Color::LightCyan,
            docs_tag: Color::LightBlue,

            primary: Color::LightMagenta,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(50, 50, 80),

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            button_fg: Color::White,
            button_bg: Color::Black,
            button_active_fg: Color::Black,
            button_active_bg: Color::LightYellow,
        }
    }
}

/// Global theme instance
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Panel and dialog title style
    pub fn title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted).bold()
    }

    /// Value text style
    pub fn value() -> Style {
        Style::default().fg(colors().text)
    }

    /// Selection style (for the selected list item)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Border of a panel with nothing to show
    pub fn border_empty() -> Style {
        Style::default().fg(colors().muted).dim().italic()
    }

    /// Placeholder text inside an empty panel
    pub fn placeholder() -> Style {
        Style::default().fg(colors().muted).italic()
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Star glyph style
    pub fn star(starred: bool) -> Style {
        if starred {
            Style::default().fg(colors().starred)
        } else {
            Style::default().fg(colors().unstarred)
        }
    }

    /// `[GitHub]` tag style
    pub fn github_tag() -> Style {
        Style::default().fg(colors().github_tag)
    }

    /// `[pkg.go]` tag style
    pub fn docs_tag() -> Style {
        Style::default().fg(colors().docs_tag)
    }

    /// Dialog button style
    pub fn button(active: bool) -> Style {
        let scheme = colors();
        if active {
            Style::default()
                .fg(scheme.button_active_fg)
                .bg(scheme.button_active_bg)
                .bold()
        } else {
            Style::default().fg(scheme.button_fg).bg(scheme.button_bg)
        }
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Key hints shown in the footer
pub struct FooterHints;

impl FooterHints {
    /// Hints while browsing the list
    pub fn listing() -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑↓/jk", "move"),
            ("←→", "page"),
            ("g", "GitHub"),
            ("p", "pkg.go.dev"),
            ("s", "star"),
            ("S", "star all"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{}]", key), Styles::shortcut_key()));
        spans.push(Span::styled(desc.to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("nope").name, "dark");
    }

    #[test]
    fn test_render_footer_hints() {
        let spans = render_footer_hints(&[("q", "quit"), ("s", "star")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[q]quit [s]star");
    }
}
