//! Skills view: categorized skills with progress bars.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Width of a skill progress bar in cells.
const BAR_WIDTH: usize = 20;

/// Render the Skills view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(lines(app)).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All content rows of the Skills view.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let style = app.theme.reveal_style(app.reveal.is_shown(0));

    let mut lines = vec![
        Line::from(Span::styled(" Skills", app.theme.heading)),
        Line::from(Span::styled(
            " Technical and design skills categorized.",
            Style::default().fg(app.theme.muted),
        )),
        Line::from(""),
    ];

    for category in &app.content.skills {
        lines.push(Line::from(Span::styled(
            format!(" {}", category.category),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (i, item) in category.items.iter().enumerate() {
            let level = category.level(i);
            lines.push(Line::from(vec![
                Span::raw(format!("   {:<20}", item)),
                Span::styled(progress_bar(level), Style::default().fg(app.theme.accent)),
                Span::styled(format!(" {:>3}%", level), Style::default().fg(app.theme.muted)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.into_iter().map(|l| l.style(style)).collect()
}

fn progress_bar(percent: u8) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    let mut bar = "█".repeat(filled.min(BAR_WIDTH));
    bar.push_str(&"░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_width_is_constant() {
        for pct in [0u8, 50, 70, 100] {
            assert_eq!(progress_bar(pct).chars().count(), BAR_WIDTH);
        }
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(progress_bar(50).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(progress_bar(100).chars().filter(|c| *c == '█').count(), 20);
    }
}
