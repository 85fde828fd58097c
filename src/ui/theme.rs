//! Theme configuration for the TUI.
//!
//! The theme is an explicit value object resolved once from the stored
//! [`ThemePreference`] and carried on the `App`; render functions take it
//! as a parameter instead of consulting any shared style state.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::prefs::ThemePreference;

/// Color and style theme for the TUI.
///
/// Use [`Theme::for_preference()`] with the persisted preference, or
/// [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights, links, and active elements.
    pub accent: Color,
    /// Color for secondary/muted text.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section headings.
    pub heading: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::Gray,
            border: Color::DarkGray,
            heading: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            heading: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Resolve the palette for a stored preference.
    pub fn for_preference(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Detect a preference from the terminal background luminance.
    ///
    /// Consulted only when no stored preference exists and `--auto-theme`
    /// was given.
    pub fn detect_preference() -> ThemePreference {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    /// Style for body text with the given reveal state: unrevealed
    /// sections render dimmed.
    pub fn reveal_style(&self, shown: bool) -> Style {
        if shown {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}
