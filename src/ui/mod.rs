//! Terminal UI rendering using ratatui.
//!
//! This module contains all the view-specific rendering logic for the TUI.
//! Each portfolio section is implemented in its own submodule with a
//! `render` function; scrollable sections also expose `lines` so the
//! scroll bound can be computed without drawing.
//!
//! ## Submodules
//!
//! - [`home`]: Hero, profile card, and featured projects
//! - [`about`]: Biography and goals
//! - [`skills`]: Categorized skills with progress bars
//! - [`projects`]: Paginated project cards and the detail overlay
//! - [`education`]: Education entries and the certificate overlay
//! - [`achievements`]: Achievement list
//! - [`contact`]: Contact details and social links
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark palettes resolved from the stored preference
//!
//! ## Rendering Architecture
//!
//! The main loop calls into these modules based on the current route:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content (home/about/.../render) │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - projects::render_overlay
//!    - education::render_certificate_overlay
//!    - common::render_help
//! ```

pub mod about;
pub mod achievements;
pub mod common;
pub mod contact;
pub mod education;
pub mod home;
pub mod projects;
pub mod skills;
pub mod theme;

pub use theme::Theme;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, Route};

/// Render the active view into the content area.
pub fn render_view(frame: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Home => home::render(frame, app, area),
        Route::About => about::render(frame, app, area),
        Route::Skills => skills::render(frame, app, area),
        Route::Projects => projects::render(frame, app, area),
        Route::Education => education::render(frame, app, area),
        Route::Achievements => achievements::render(frame, app, area),
        Route::Contact => contact::render(frame, app, area),
    }
}

/// Number of content rows the active view occupies, for scroll clamping.
///
/// The Projects view fits its page and does not scroll.
pub fn view_line_count(app: &App) -> u16 {
    let count = match app.route {
        Route::Home => home::lines(app).len(),
        Route::About => about::lines(app).len(),
        Route::Skills => skills::lines(app).len(),
        Route::Projects => 0,
        Route::Education => education::lines(app).len(),
        Route::Achievements => achievements::lines(app).len(),
        Route::Contact => contact::lines(app).len(),
    };
    count as u16
}

/// Width used when pre-wrapping prose, so line counts stay exact for
/// scrolling and reveal offsets.
pub(crate) const PROSE_WIDTH: usize = 72;

/// Wrap prose to `width` columns. Always yields at least one line.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width).into_iter().map(|line| line.into_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty_still_counts_one_row() {
        // Scroll and reveal offsets assume every paragraph occupies rows
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
