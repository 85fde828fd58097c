//! Contact view: personal details and social links.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the Contact view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(lines(app)).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All content rows of the Contact view.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let contact = &app.content.contact;
    let profile = &app.content.profile;
    let style = app.theme.reveal_style(app.reveal.is_shown(0));

    let mut lines = vec![
        Line::from(Span::styled(" Contact Info", app.theme.heading)),
        Line::from(Span::styled(
            " Reach out via email, phone, or social links below.",
            Style::default().fg(app.theme.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", profile.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", profile.tagline),
            Style::default().fg(app.theme.muted),
        )),
        Line::from(""),
        Line::from(format!(" Age:   {}", contact.age)),
        Line::from(format!(" Phone: {}", contact.phone)),
        Line::from(vec![
            Span::raw(" Email: "),
            Span::styled(contact.email.clone(), Style::default().fg(app.theme.accent)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Links",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for link in &contact.links {
        lines.push(Line::from(vec![
            Span::raw(format!("   {:<10}", link.label)),
            Span::styled(link.url.clone(), Style::default().fg(app.theme.accent)),
        ]));
    }

    lines.into_iter().map(|l| l.style(style)).collect()
}
