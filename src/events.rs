use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::app::{App, Route};
use crate::ui;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If an overlay is shown, handle overlay-specific keys
    if app.overlay_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.close_overlay();
            }
            _ => {}
        }
        return;
    }

    // If the goto prompt is active, handle text input
    if app.goto_active {
        handle_goto_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Route switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_route();
            } else {
                app.next_route();
            }
        }
        KeyCode::BackTab => app.prev_route(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_route(),
        KeyCode::Right | KeyCode::Char('l') => app.next_route(),

        // Direct route access
        KeyCode::Char('1') => app.navigate(Route::Home),
        KeyCode::Char('2') => app.navigate(Route::About),
        KeyCode::Char('3') => app.navigate(Route::Skills),
        KeyCode::Char('4') => app.navigate(Route::Projects),
        KeyCode::Char('5') => app.navigate(Route::Education),
        KeyCode::Char('6') => app.navigate(Route::Achievements),
        KeyCode::Char('7') => app.navigate(Route::Contact),

        // Scrolling, or the card cursor in the Projects view
        KeyCode::Up | KeyCode::Char('k') => {
            if app.route == Route::Projects {
                app.card_prev();
            } else {
                app.scroll_up(1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.route == Route::Projects {
                app.card_next();
            } else {
                app.scroll_down(1);
            }
        }
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home => app.scroll_top(),
        KeyCode::End => app.scroll_bottom(),

        // Pagination (Projects view)
        KeyCode::Char('n') => {
            if app.route == Route::Projects {
                app.page_next();
            }
        }
        KeyCode::Char('p') => {
            if app.route == Route::Projects {
                app.page_prev();
            }
        }

        // Open detail overlay (project card or certificate)
        KeyCode::Enter => app.enter_detail(),

        // Go back (Esc and Backspace)
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Theme toggle
        KeyCode::Char('t') => app.toggle_theme(),

        // Goto prompt
        KeyCode::Char('/') => app.start_goto(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the goto prompt is active
fn handle_goto_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Apply the typed route token
        KeyCode::Enter => app.goto_submit(),

        // Cancel without navigating
        KeyCode::Esc => app.cancel_goto(),

        // Backspace
        KeyCode::Backspace => {
            app.goto_pop();
            if app.goto_text.is_empty() {
                app.cancel_goto();
            }
        }

        // Type characters
        KeyCode::Char(c) => app.goto_push(c),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, content_start_row: u16) {
    // An open overlay swallows everything except an outside click
    if app.overlay_open() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let overlay = if app.selected_project.is_some() {
                ui::projects::overlay_area(app.frame_area)
            } else {
                ui::education::certificate_area(app.frame_area)
            };
            if !overlay.contains(Position::new(mouse.column, mouse.row)) {
                app.close_overlay();
            }
        }
        return;
    }

    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => {
            if app.route == Route::Projects {
                app.card_prev();
            } else {
                app.scroll_up(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.route == Route::Projects {
                app.card_next();
            } else {
                app.scroll_down(1);
            }
        }

        // Click to select
        MouseEventKind::Down(MouseButton::Left) => {
            let clicked_row = mouse.row;

            // Tab clicks (row 1, after the header)
            if clicked_row == 1 {
                if let Some(route) = ui::common::route_at_column(mouse.column) {
                    app.navigate(route);
                }
                return;
            }

            // Card clicks in the Projects view (after header, tabs, block
            // border, and table header)
            if app.route == Route::Projects && clicked_row > content_start_row {
                let item_row = (clicked_row - content_start_row - 1) as usize;
                if item_row < app.projects_page.page_len() {
                    app.selected_card = item_row;
                }
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => {
            app.go_back();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::builtin;
    use crate::prefs::{PrefStore, ThemePreference};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let prefs = PrefStore::new(dir.path().join("prefs.json"));
        let mut app = App::new(builtin(), ThemePreference::Dark, prefs);
        app.frame_area = Rect::new(0, 0, 120, 40);
        (app, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_keys_jump_to_routes() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.route, Route::Projects);
        handle_key_event(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.route, Route::Contact);
    }

    #[test]
    fn test_enter_opens_and_esc_closes_project_overlay() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.overlay_open());

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.overlay_open());
        assert_eq!(app.route, Route::Projects);
    }

    #[test]
    fn test_click_inside_overlay_does_not_dismiss() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        handle_key_event(&mut app, key(KeyCode::Enter));

        let overlay = ui::projects::overlay_area(app.frame_area);
        let inside = click(overlay.x + overlay.width / 2, overlay.y + overlay.height / 2);
        handle_mouse_event(&mut app, inside, 3);
        assert!(app.overlay_open());

        // A click in the dimmed margin dismisses
        let outside = click(0, 0);
        handle_mouse_event(&mut app, outside, 3);
        assert!(!app.overlay_open());
    }

    #[test]
    fn test_tab_row_click_navigates() {
        let (mut app, _dir) = test_app();
        // Column 9 falls on the About tab
        handle_mouse_event(&mut app, click(9, 1), 3);
        assert_eq!(app.route, Route::About);

        // The last tab is reachable too: column 74 starts " 7:Contact "
        handle_mouse_event(&mut app, click(74, 1), 3);
        assert_eq!(app.route, Route::Contact);
    }

    #[test]
    fn test_pagination_keys_only_in_projects() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('n')));
        // Not in Projects: nothing to page
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.projects_page.page(), 2);
        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert_eq!(app.projects_page.page(), 1);
    }

    #[test]
    fn test_goto_prompt_flow() {
        let (mut app, _dir) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('/')));
        assert!(app.goto_active);

        for c in "/skills".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.route, Route::Skills);
        assert!(!app.goto_active);
    }
}
