//! Common UI components shared across views.
//!
//! This module contains the header bar, the navigation tab bar, the
//! footer status bar, and the help overlay.

use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Route};

/// Render the header bar: brand plus the active route's description.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let meta = app.route.meta();
    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(app.theme.accent)),
        Span::styled(
            app.content.profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(meta.description, Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Tab title for a route, as rendered in the tab bar.
fn tab_title(index: usize, route: Route) -> String {
    format!(" {}:{} ", index + 1, route.label())
}

/// Render the navigation bar: every known route as a tab, with the
/// active one highlighted.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(tab_title(i, *r)))
        .collect();

    let selected = Route::ALL.iter().position(|r| *r == app.route).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|")
        // Titles carry their own spacing; extra padding would desync
        // the click hit test in `route_at_column`.
        .padding("", "");

    frame.render_widget(tabs, area);
}

/// Map a clicked column on the tab row to the route under it.
///
/// Mirrors the geometry of [`render_tabs`]: titles laid out left to
/// right with a one-character divider between them and tab padding
/// disabled.
pub fn route_at_column(col: u16) -> Option<Route> {
    let mut start = 0u16;
    for (i, route) in Route::ALL.iter().enumerate() {
        let width = tab_title(i, *route).len() as u16;
        if col >= start && col < start + width {
            return Some(*route);
        }
        start += width + 1; // divider
    }
    None
}

/// Render the footer status bar.
///
/// Priority: goto prompt input, then temporary status messages, then the
/// copyright line with context-sensitive key hints.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if app.goto_active {
        let line = format!(" goto: {}_ | Enter:go Esc:cancel", app.goto_text);
        let paragraph = Paragraph::new(line).style(Style::default().fg(app.theme.accent));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.accent));
        frame.render_widget(paragraph, area);
        return;
    }

    let hints = match app.route {
        Route::Projects => "↑↓:card n/p:page Enter:view t:theme /:goto ?:help q:quit",
        Route::Education => "Enter:certificate t:theme /:goto ?:help q:quit",
        _ => "Tab:switch ↑↓:scroll t:theme /:goto ?:help q:quit",
    };

    let status = format!(
        " © {} {} │ {}",
        Local::now().year(),
        app.content.profile.name,
        hints,
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.heading)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch sections"),
        Line::from("  Tab/S-Tab   Switch sections"),
        Line::from("  1-7         Jump to a section"),
        Line::from("  /           Go to a route token"),
        Line::from("  ↑/↓ j/k     Scroll / move cursor"),
        Line::from("  PgUp/PgDn   Scroll 10 rows"),
        Line::from("  Home/End    Jump to top/bottom"),
        Line::from("  Esc         Close / back to Home"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Projects",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  n/p         Next / previous page"),
        Line::from("  Enter       Open project detail"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  t           Toggle light/dark theme"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_area = centered_rect(area, 44, 26);
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Center a `width` x `height` rect within `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_at_column_maps_tabs() {
        // " 1:Home " occupies columns 0..8
        assert_eq!(route_at_column(0), Some(Route::Home));
        assert_eq!(route_at_column(7), Some(Route::Home));
        // Divider column maps to nothing
        assert_eq!(route_at_column(8), None);
        // " 2:About " starts right after the divider
        assert_eq!(route_at_column(9), Some(Route::About));
    }

    #[test]
    fn test_route_at_column_maps_last_tab() {
        // " 7:Contact " occupies columns 74..85
        assert_eq!(route_at_column(74), Some(Route::Contact));
        assert_eq!(route_at_column(84), Some(Route::Contact));
        assert_eq!(route_at_column(85), None);
    }

    #[test]
    fn test_route_at_column_past_tabs() {
        assert_eq!(route_at_column(500), None);
    }

    #[test]
    fn test_centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 100, 100);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
