//! Home view: hero section, profile card, and featured projects.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::Content;
use crate::ui::theme::Theme;
use crate::ui::{wrap_text, PROSE_WIDTH};

/// How many of the leading project records the hero page features.
const FEATURED_COUNT: usize = 2;

/// Row at which the featured-projects section starts, for the reveal
/// trigger. Depends on how the hero prose wraps.
pub fn featured_row(content: &Content) -> u16 {
    hero_lines(content, &Theme::dark()).len() as u16
}

/// Render the Home view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(lines(app)).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All content rows of the Home view, with unrevealed sections dimmed.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let hero = hero_lines(&app.content, &app.theme);
    let featured = featured_lines(&app.content, &app.theme);

    let hero_style = app.theme.reveal_style(app.reveal.is_shown(0));
    let featured_style = app.theme.reveal_style(app.reveal.is_shown(1));

    hero.into_iter()
        .map(|l| l.style(hero_style))
        .chain(featured.into_iter().map(|l| l.style(featured_style)))
        .collect()
}

fn hero_lines(content: &Content, theme: &Theme) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut lines = vec![
        Line::from(Span::styled(format!(" Hi, I'm {}", profile.name), theme.heading)),
        Line::from(""),
    ];
    for row in wrap_text(&profile.lead, PROSE_WIDTH) {
        lines.push(Line::from(format!(" {}", row)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("[4] View My Work → /projects", Style::default().fg(theme.accent)),
    ]));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("[7] Contact Me → /contact", Style::default().fg(theme.accent)),
    ]));
    lines.push(Line::from(""));
    for row in wrap_text(&profile.note, PROSE_WIDTH) {
        lines.push(Line::from(Span::styled(
            format!(" {}", row),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", profile.tagline),
        Style::default().fg(theme.muted),
    )));
    lines.push(Line::from(vec![
        Span::raw(" Photo: "),
        Span::styled(profile.photo.clone(), Style::default().fg(theme.muted)),
    ]));
    lines.push(Line::from(vec![
        Span::raw(" CV: "),
        Span::styled(profile.cv.clone(), Style::default().fg(theme.accent)),
    ]));
    lines.push(Line::from(""));
    lines
}

fn featured_lines(content: &Content, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(" Featured Projects", theme.heading)),
        Line::from(Span::styled(
            " Selected projects that showcase web development and UI/UX skills.",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
    ];
    for project in content.projects.iter().take(FEATURED_COUNT) {
        lines.push(Line::from(Span::styled(
            format!("  {}", project.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", project.stack),
            Style::default().fg(theme.accent),
        )));
        for row in wrap_text(&project.description, PROSE_WIDTH - 4) {
            lines.push(Line::from(format!("    {}", row)));
        }
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Route;
    use crate::data::builtin::builtin;
    use crate::prefs::{PrefStore, ThemePreference};

    #[test]
    fn test_featured_row_points_at_heading() {
        let content = builtin();
        let row = featured_row(&content) as usize;

        let dir = tempfile::TempDir::new().unwrap();
        let app = App::new(
            content,
            ThemePreference::Dark,
            PrefStore::new(dir.path().join("p.json")),
        );
        assert_eq!(app.route, Route::Home);

        let lines = lines(&app);
        let heading: String =
            lines[row].spans.iter().map(|s| s.content.clone().into_owned()).collect();
        assert!(heading.contains("Featured Projects"));
    }
}
