//! Education view: degree and certification entries, plus the
//! full-screen certificate overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::common::centered_rect;

/// Render the Education view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(lines(app)).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All content rows of the Education view.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let style = app.theme.reveal_style(app.reveal.is_shown(0));

    let mut lines = vec![
        Line::from(Span::styled(" Education", app.theme.heading)),
        Line::from(""),
    ];
    for entry in &app.content.education {
        lines.push(Line::from(Span::styled(
            format!(" {}", entry.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.subtitle),
            Style::default().fg(app.theme.muted),
        )));
        if entry.certificate.is_some() {
            lines.push(Line::from(Span::styled(
                "   [Enter] View Certificate",
                Style::default().fg(app.theme.accent),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.into_iter().map(|l| l.style(style)).collect()
}

/// Area occupied by the certificate overlay, shared with the mouse
/// hit test: clicks outside it dismiss the overlay.
pub fn certificate_area(area: Rect) -> Rect {
    let width = (area.width * 90 / 100).clamp(30, 90);
    let height = (area.height * 90 / 100).clamp(10, 40);
    centered_rect(area, width, height)
}

/// Render the certificate as a full-screen modal overlay.
pub fn render_certificate_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(entry) = app.content.education.iter().find(|e| e.certificate.is_some()) else {
        return;
    };
    let Some(ref certificate) = entry.certificate else {
        return;
    };

    let overlay = certificate_area(area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Certificate ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    let inner_height = overlay.height.saturating_sub(2) as usize;
    let mut lines = vec![Line::from(""); inner_height.saturating_sub(4) / 2];
    lines.push(Line::from(Span::styled(
        "🖼  Image",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        certificate.clone(),
        Style::default().fg(app.theme.muted),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close  (click outside to close)",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, overlay);
}
