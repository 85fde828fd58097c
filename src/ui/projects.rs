//! Projects view: paginated project cards and the detail overlay.
//!
//! The page always fits the content area, so this view does not scroll;
//! its two pieces of transient state are the page number and the
//! selected record, and they never affect each other.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::MediaKind;
use crate::ui::common::centered_rect;
use crate::ui::{wrap_text, PROSE_WIDTH};

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 16;

/// Render the Projects view: card table plus pagination controls.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(5),    // Card table
        Constraint::Length(1), // Pagination controls
    ])
    .split(area);

    render_cards(frame, app, chunks[0]);
    render_pagination(frame, app, chunks[1]);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let bounds = app.projects_page.bounds();
    let page_records = &app.content.projects[bounds];

    let header = Row::new(vec![
        Cell::from("Project"),
        Cell::from("Stack"),
        Cell::from("Description"),
    ])
    .height(1)
    .style(app.theme.heading);

    let rows: Vec<Row> = page_records
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.title.clone()),
                Cell::from(p.stack.clone()).style(Style::default().fg(app.theme.accent)),
                Cell::from(p.description.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2), // Project
        Constraint::Fill(2), // Stack
        Constraint::Fill(3), // Description
    ];

    let title = format!(
        " Projects ({}) [page {}/{}] ",
        app.content.projects.len(),
        app.projects_page.page(),
        app.projects_page.total_pages(),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_card.min(app.projects_page.page_len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = Style::default().fg(app.theme.accent);
    let disabled = Style::default().add_modifier(Modifier::DIM);

    let prev_style = if app.projects_page.has_prev() { enabled } else { disabled };
    let next_style = if app.projects_page.has_next() { enabled } else { disabled };

    let line = Line::from(vec![
        Span::styled(" ← Previous [p] ", prev_style),
        Span::raw(format!(
            "│ Page {} of {} │",
            app.projects_page.page(),
            app.projects_page.total_pages(),
        )),
        Span::styled(" [n] Next → ", next_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Area occupied by the detail overlay, shared with the mouse hit test:
/// clicks outside it dismiss the overlay, clicks inside do not.
pub fn overlay_area(area: Rect) -> Rect {
    let width = (area.width * 95 / 100).clamp(MIN_OVERLAY_WIDTH, 100);
    let height = (area.height * 90 / 100).clamp(MIN_OVERLAY_HEIGHT, 40);
    centered_rect(area, width, height)
}

/// Render the selected record as a modal overlay: preview media panel,
/// description, and long-form detail.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(record) = app.selected_record() else {
        return;
    };

    let overlay = overlay_area(area);
    frame.render_widget(Clear, overlay);

    let chunks = Layout::vertical([
        Constraint::Percentage(50), // Preview media panel
        Constraint::Min(5),         // Description and details
        Constraint::Length(1),      // Footer
    ])
    .split(overlay);

    // ===== MEDIA PANEL =====
    let kind = MediaKind::from_path(&record.preview);
    let media_block = Block::default()
        .title(format!(" {} — Preview ({}) ", record.title, kind.label()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.accent));

    let media_height = chunks[0].height.saturating_sub(2) as usize;
    let mut media_lines = vec![Line::from(""); media_height.saturating_sub(2) / 2];
    media_lines.push(Line::from(Span::styled(
        format!("{}  {}", kind.symbol(), kind.label()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    media_lines.push(Line::from(Span::styled(
        record.preview.clone(),
        Style::default().fg(app.theme.muted),
    )));

    let media = Paragraph::new(media_lines)
        .block(media_block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(media, chunks[0]);

    // ===== DESCRIPTION AND DETAILS =====
    let text_width = (overlay.width.saturating_sub(4) as usize).min(PROSE_WIDTH);
    let mut text_lines = vec![Line::from(vec![
        Span::raw(" "),
        Span::styled(record.stack.clone(), Style::default().fg(app.theme.accent)),
    ])];
    for row in wrap_text(&record.description, text_width) {
        text_lines.push(Line::from(format!(" {}", row)));
    }
    text_lines.push(Line::from(""));
    for row in wrap_text(&record.details, text_width) {
        text_lines.push(Line::from(Span::styled(
            format!(" {}", row),
            Style::default().fg(app.theme.muted),
        )));
    }

    let text_block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(Paragraph::new(text_lines).block(text_block), chunks[1]);

    // ===== FOOTER =====
    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " Esc to close  (click outside to close) ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_overlay_area_is_centered_and_bounded() {
        let area = Rect::new(0, 0, 120, 40);
        let overlay = overlay_area(area);

        assert!(overlay.width <= 100);
        assert!(overlay.x > 0);
        // A point in the middle is inside, a corner point is outside
        assert!(overlay.contains(Position::new(60, 20)));
        assert!(!overlay.contains(Position::new(0, 0)));
    }
}
