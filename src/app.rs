//! Application state and navigation logic.

use std::time::Instant;

use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::data::{Content, Pagination, ProjectRecord, PROJECTS_PER_PAGE};
use crate::prefs::{PrefStore, ThemePreference};
use crate::reveal::RevealSet;
use crate::ui::Theme;

/// The current view in the TUI, one per portfolio section.
///
/// The project detail and certificate modals are overlays (controlled by
/// `App::selected_project` / `App::show_certificate`) rather than routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Achievements,
    Contact,
}

/// Title and description pair applied on every transition to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Terminal window title.
    pub title: &'static str,
    /// One-line description shown in the header bar.
    pub description: &'static str,
}

impl Route {
    /// Every known route, in navigation order.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Skills,
        Route::Projects,
        Route::Education,
        Route::Achievements,
        Route::Contact,
    ];

    /// Cycle to the next route.
    pub fn next(self) -> Self {
        let i = Route::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Route::ALL[(i + 1) % Route::ALL.len()]
    }

    /// Cycle to the previous route.
    pub fn prev(self) -> Self {
        let i = Route::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Route::ALL[(i + Route::ALL.len() - 1) % Route::ALL.len()]
    }

    /// Returns the display label for this route.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Skills => "Skills",
            Route::Projects => "Projects",
            Route::Education => "Education",
            Route::Achievements => "Achievements",
            Route::Contact => "Contact",
        }
    }

    /// The literal route token, as it appears in a location fragment.
    pub fn token(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Skills => "/skills",
            Route::Projects => "/projects",
            Route::Education => "/education",
            Route::Achievements => "/achievements",
            Route::Contact => "/contact",
        }
    }

    /// Title/description metadata for this route.
    ///
    /// Home doubles as the default pair for unknown tokens.
    pub fn meta(&self) -> RouteMeta {
        match self {
            Route::Home => RouteMeta {
                title: "Nimesh Madusanka — Web Developer & Designer",
                description: "Portfolio of Nimesh Madusanka",
            },
            Route::About => RouteMeta {
                title: "About — Nimesh Madusanka",
                description: "About Nimesh Madusanka",
            },
            Route::Skills => RouteMeta {
                title: "Skills — Nimesh Madusanka",
                description: "Skill list",
            },
            Route::Projects => RouteMeta {
                title: "Projects — Nimesh Madusanka",
                description: "Projects details",
            },
            Route::Education => RouteMeta {
                title: "Education — Nimesh Madusanka",
                description: "Education & certifications",
            },
            Route::Achievements => RouteMeta {
                title: "Achievements — Nimesh Madusanka",
                description: "Achievements & recognitions",
            },
            Route::Contact => RouteMeta {
                title: "Contact — Nimesh Madusanka",
                description: "Contact details and form",
            },
        }
    }
}

/// Result of parsing a route token.
///
/// The fallback for unrecognized tokens is a deliberate policy, not an
/// error: the site has no "not found" state, so [`RouteToken::resolve`]
/// maps `Unknown` to Home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteToken {
    Known(Route),
    Unknown,
}

impl RouteToken {
    /// Parse a location-fragment-style token (`#/about`, `/about`,
    /// `about`). Empty and root tokens are the Home route.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        let token = token.strip_prefix('#').unwrap_or(token);
        let token = token.trim_matches('/');

        match token {
            "" => RouteToken::Known(Route::Home),
            "about" => RouteToken::Known(Route::About),
            "skills" => RouteToken::Known(Route::Skills),
            "projects" => RouteToken::Known(Route::Projects),
            "education" => RouteToken::Known(Route::Education),
            "achievements" => RouteToken::Known(Route::Achievements),
            "contact" => RouteToken::Known(Route::Contact),
            _ => RouteToken::Unknown,
        }
    }

    /// The routing policy: unknown tokens render Home.
    pub fn resolve(self) -> Route {
        match self {
            RouteToken::Known(route) => route,
            RouteToken::Unknown => Route::Home,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub route: Route,
    pub show_help: bool,

    // Content (static for the lifetime of the process)
    pub content: Content,

    // Theme
    pub theme_pref: ThemePreference,
    pub theme: Theme,
    prefs: PrefStore,

    // Per-view transient state, reset on every route mount
    pub scroll: u16,
    pub reveal: RevealSet,

    // Projects view: two independent pieces of transient state
    pub projects_page: Pagination,
    pub selected_card: usize,
    pub selected_project: Option<usize>,

    // Education view
    pub show_certificate: bool,

    // Goto prompt (the location-fragment input)
    pub goto_active: bool,
    pub goto_text: String,

    // Set when the terminal title needs re-applying
    pub title_dirty: bool,

    // Last known terminal size, for mouse hit tests
    pub frame_area: Rect,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given content and resolved theme.
    pub fn new(content: Content, theme_pref: ThemePreference, prefs: PrefStore) -> Self {
        let projects_page = Pagination::new(content.projects.len(), PROJECTS_PER_PAGE);
        let reveal = RevealSet::for_route(Route::Home, &content);
        Self {
            running: true,
            route: Route::Home,
            show_help: false,
            theme: Theme::for_preference(theme_pref),
            theme_pref,
            prefs,
            content,
            scroll: 0,
            reveal,
            projects_page,
            selected_card: 0,
            selected_project: None,
            show_certificate: false,
            goto_active: false,
            goto_text: String::new(),
            title_dirty: true,
            frame_area: Rect::default(),
            status_message: None,
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Switch to a route, applying the per-transition effects: scroll
    /// reset, reveal rebuild, overlay dismissal, pagination reset, and a
    /// pending terminal-title update.
    ///
    /// Navigating to the current route is a no-op, matching a location
    /// fragment that did not change.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        debug!(from = self.route.label(), to = route.label(), "route change");
        self.route = route;
        self.scroll = 0;
        self.reveal = RevealSet::for_route(route, &self.content);
        self.selected_project = None;
        self.selected_card = 0;
        self.projects_page = Pagination::new(self.content.projects.len(), PROJECTS_PER_PAGE);
        self.show_certificate = false;
        self.title_dirty = true;
    }

    /// Switch to the next route (wraps around).
    pub fn next_route(&mut self) {
        self.navigate(self.route.next());
    }

    /// Switch to the previous route (wraps around).
    pub fn prev_route(&mut self) {
        self.navigate(self.route.prev());
    }

    /// Toggle the theme preference, re-resolve the palette, and persist
    /// the new value. A failed write only produces a status message.
    pub fn toggle_theme(&mut self) {
        self.theme_pref = self.theme_pref.toggled();
        self.theme = Theme::for_preference(self.theme_pref);
        info!(theme = self.theme_pref.label(), "theme toggled");
        match self.prefs.save(self.theme_pref) {
            Ok(()) => {
                self.set_status_message(format!("Theme: {}", self.theme_pref.label()));
            }
            Err(e) => {
                warn!(error = %e, "failed to persist theme preference");
                self.set_status_message(format!("Theme not saved: {}", e));
            }
        }
    }

    // ----- Goto prompt -----

    /// Open the goto prompt (starts capturing a route token).
    pub fn start_goto(&mut self) {
        self.goto_active = true;
        self.goto_text.clear();
    }

    /// Close the goto prompt without navigating.
    pub fn cancel_goto(&mut self) {
        self.goto_active = false;
        self.goto_text.clear();
    }

    /// Append a character to the goto prompt.
    pub fn goto_push(&mut self, c: char) {
        self.goto_text.push(c);
    }

    /// Remove the last character from the goto prompt.
    pub fn goto_pop(&mut self) {
        self.goto_text.pop();
    }

    /// Apply the typed token: parse it and navigate to the resolved
    /// route. Unknown tokens land on Home.
    pub fn goto_submit(&mut self) {
        let token = RouteToken::parse(&self.goto_text);
        if token == RouteToken::Unknown {
            debug!(token = %self.goto_text, "unknown route token, rendering Home");
        }
        self.navigate(token.resolve());
        self.cancel_goto();
    }

    // ----- Scrolling -----

    /// Height of the content area in the last drawn frame.
    fn viewport_height(&self) -> u16 {
        // Header, tab bar, and status bar each take one row
        self.frame_area.height.saturating_sub(3)
    }

    /// Largest useful scroll offset for the current view.
    fn max_scroll(&self) -> u16 {
        let lines = crate::ui::view_line_count(self);
        lines.saturating_sub(self.viewport_height())
    }

    /// Scroll the current view down by `n` rows.
    pub fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll());
    }

    /// Scroll the current view up by `n` rows.
    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Jump to the top of the current view.
    pub fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump to the bottom of the current view.
    pub fn scroll_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Flip reveal flags for sections inside the visible window.
    /// Called once per frame, before drawing.
    pub fn update_reveal(&mut self) {
        self.reveal.observe(self.scroll, self.viewport_height().max(1));
    }

    // ----- Projects view -----

    /// Move the card cursor down within the current page.
    pub fn card_next(&mut self) {
        let max = self.projects_page.page_len().saturating_sub(1);
        self.selected_card = (self.selected_card + 1).min(max);
    }

    /// Move the card cursor up within the current page.
    pub fn card_prev(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Go to the next page. Clamps the cursor; the selected-record
    /// overlay is untouched.
    pub fn page_next(&mut self) {
        self.projects_page.next();
        self.clamp_card();
    }

    /// Go to the previous page. Clamps the cursor; the selected-record
    /// overlay is untouched.
    pub fn page_prev(&mut self) {
        self.projects_page.prev();
        self.clamp_card();
    }

    fn clamp_card(&mut self) {
        self.selected_card =
            self.selected_card.min(self.projects_page.page_len().saturating_sub(1));
    }

    /// Raw index into the project list for the card under the cursor.
    pub fn cursor_project_index(&self) -> Option<usize> {
        let bounds = self.projects_page.bounds();
        let idx = bounds.start + self.selected_card;
        (idx < bounds.end).then_some(idx)
    }

    /// The record shown in the detail overlay, when one is selected.
    pub fn selected_record(&self) -> Option<&ProjectRecord> {
        self.content.projects.get(self.selected_project?)
    }

    /// Open the detail overlay for the view's current selection:
    /// the project under the cursor, or the education certificate.
    pub fn enter_detail(&mut self) {
        match self.route {
            Route::Projects => {
                self.selected_project = self.cursor_project_index();
            }
            Route::Education => {
                if self.content.education.iter().any(|e| e.certificate.is_some()) {
                    self.show_certificate = true;
                }
            }
            _ => {}
        }
    }

    /// Close any open overlay.
    pub fn close_overlay(&mut self) {
        self.selected_project = None;
        self.show_certificate = false;
    }

    /// Whether a modal overlay is currently shown.
    pub fn overlay_open(&self) -> bool {
        self.selected_project.is_some() || self.show_certificate
    }

    /// Navigate back: close overlays first, then return to Home.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        if self.overlay_open() {
            self.close_overlay();
            return;
        }
        if self.route != Route::Home {
            self.navigate(Route::Home);
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::builtin;
    use tempfile::TempDir;

    fn test_app() -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let prefs = PrefStore::new(dir.path().join("prefs.json"));
        let app = App::new(builtin(), ThemePreference::Dark, prefs);
        (app, dir)
    }

    #[test]
    fn test_known_tokens_parse() {
        assert_eq!(RouteToken::parse("#/"), RouteToken::Known(Route::Home));
        assert_eq!(RouteToken::parse(""), RouteToken::Known(Route::Home));
        assert_eq!(RouteToken::parse("#/about"), RouteToken::Known(Route::About));
        assert_eq!(RouteToken::parse("/projects"), RouteToken::Known(Route::Projects));
        assert_eq!(RouteToken::parse("contact"), RouteToken::Known(Route::Contact));
    }

    #[test]
    fn test_unknown_tokens_resolve_to_home() {
        for raw in ["#/xyz", "xyz", "#/projects/42", "not a route"] {
            let token = RouteToken::parse(raw);
            assert_eq!(token, RouteToken::Unknown, "token {:?}", raw);
            assert_eq!(token.resolve(), Route::Home);
        }
    }

    #[test]
    fn test_route_metadata_strings() {
        assert_eq!(Route::Home.meta().title, "Nimesh Madusanka — Web Developer & Designer");
        assert_eq!(Route::Contact.meta().description, "Contact details and form");
    }

    #[test]
    fn test_unknown_route_gets_home_metadata() {
        let resolved = RouteToken::parse("#/xyz").resolve();
        assert_eq!(resolved.meta(), Route::Home.meta());
    }

    #[test]
    fn test_route_cycle_covers_all() {
        let mut route = Route::Home;
        for expected in Route::ALL.iter().skip(1) {
            route = route.next();
            assert_eq!(route, *expected);
        }
        assert_eq!(route.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Contact);
    }

    #[test]
    fn test_projects_pagination_scenario() {
        // 27 records at page size 12: page 1 holds records 0..12 of 3 pages
        let (mut app, _dir) = test_app();
        app.navigate(Route::Projects);

        assert_eq!(app.projects_page.page(), 1);
        assert_eq!(app.projects_page.total_pages(), 3);
        assert_eq!(app.projects_page.bounds(), 0..12);
        assert!(app.projects_page.has_next());
        assert!(!app.projects_page.has_prev());
    }

    #[test]
    fn test_selection_overlay_lifecycle() {
        let (mut app, _dir) = test_app();
        app.navigate(Route::Projects);

        assert!(app.selected_record().is_none());
        app.card_next();
        app.enter_detail();
        assert_eq!(app.selected_project, Some(1));
        assert_eq!(app.selected_record().unwrap().title, app.content.projects[1].title);

        // Changing the page leaves the selection alone
        app.page_next();
        assert_eq!(app.selected_project, Some(1));

        app.close_overlay();
        assert!(app.selected_record().is_none());
    }

    #[test]
    fn test_cursor_clamped_on_short_page() {
        let (mut app, _dir) = test_app();
        app.navigate(Route::Projects);

        for _ in 0..20 {
            app.card_next();
        }
        assert_eq!(app.selected_card, 11);

        // Last page has 3 records; cursor clamps to the last of them
        app.page_next();
        app.page_next();
        assert_eq!(app.selected_card, 2);
        assert_eq!(app.cursor_project_index(), Some(26));
    }

    #[test]
    fn test_navigate_resets_view_state() {
        let (mut app, _dir) = test_app();
        app.frame_area = Rect::new(0, 0, 80, 12);
        app.navigate(Route::About);
        app.scroll_down(5);
        assert!(app.scroll > 0);

        app.navigate(Route::Skills);
        assert_eq!(app.scroll, 0);
        assert!(!app.reveal.is_shown(0));
        assert!(app.title_dirty);
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let (mut app, _dir) = test_app();
        app.navigate(Route::Projects);
        app.page_next();
        app.title_dirty = false;

        app.navigate(Route::Projects);
        assert_eq!(app.projects_page.page(), 2);
        assert!(!app.title_dirty);
    }

    #[test]
    fn test_goto_prompt_unknown_lands_on_home() {
        let (mut app, _dir) = test_app();
        app.navigate(Route::Skills);

        app.start_goto();
        for c in "/xyz".chars() {
            app.goto_push(c);
        }
        app.goto_submit();

        assert_eq!(app.route, Route::Home);
        assert!(!app.goto_active);
    }

    #[test]
    fn test_theme_toggle_twice_restores_preference() {
        let (mut app, dir) = test_app();
        let store = PrefStore::new(dir.path().join("prefs.json"));

        app.toggle_theme();
        assert_eq!(app.theme_pref, ThemePreference::Light);
        assert_eq!(store.load(), Some(ThemePreference::Light));

        app.toggle_theme();
        assert_eq!(app.theme_pref, ThemePreference::Dark);
        assert_eq!(store.load(), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_go_back_closes_overlay_before_routing() {
        let (mut app, _dir) = test_app();
        app.navigate(Route::Projects);
        app.enter_detail();
        assert!(app.overlay_open());

        app.go_back();
        assert!(!app.overlay_open());
        assert_eq!(app.route, Route::Projects);

        app.go_back();
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_certificate_overlay() {
        let (mut app, _dir) = test_app();
        app.navigate(Route::Education);
        app.enter_detail();
        assert!(app.show_certificate);

        app.close_overlay();
        assert!(!app.show_certificate);
    }
}
