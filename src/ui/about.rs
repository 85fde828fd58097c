//! About view: biography, education summary, and goals.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::{wrap_text, PROSE_WIDTH};

/// Render the About view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(lines(app)).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All content rows of the About view.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let profile = &app.content.profile;
    let style = app.theme.reveal_style(app.reveal.is_shown(0));

    let mut lines = vec![
        Line::from(Span::styled(" About Me", app.theme.heading)),
        Line::from(""),
    ];
    for row in wrap_text(&profile.bio, PROSE_WIDTH) {
        lines.push(Line::from(format!(" {}", row)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Education & Goals",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for row in wrap_text(&profile.goals, PROSE_WIDTH) {
        lines.push(Line::from(format!(" {}", row)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" Photo: "),
        Span::styled(profile.photo.clone(), Style::default().fg(app.theme.muted)),
    ]));
    lines.push(Line::from(vec![
        Span::raw(" CV: "),
        Span::styled(profile.cv.clone(), Style::default().fg(app.theme.accent)),
    ]));

    lines.into_iter().map(|l| l.style(style)).collect()
}
