//! Achievements view: a plain list of recognitions.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the Achievements view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(lines(app)).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All content rows of the Achievements view.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let style = app.theme.reveal_style(app.reveal.is_shown(0));

    let mut lines = vec![
        Line::from(Span::styled(" Achievements", app.theme.heading)),
        Line::from(""),
    ];
    for item in &app.content.achievements {
        lines.push(Line::from(format!("  • {}", item)));
    }

    lines.into_iter().map(|l| l.style(style)).collect()
}
