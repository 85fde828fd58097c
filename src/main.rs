// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod data;
mod events;
mod prefs;
mod reveal;
mod ui;

use app::{App, RouteToken};
use data::Content;
use prefs::{PrefStore, ThemePreference};
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio browser for Nimesh Madusanka")]
struct Args {
    /// Route to open at startup (e.g. "#/projects"); unknown routes open Home
    #[arg(short, long, default_value = "#/")]
    route: String,

    /// Path to a content JSON file (defaults to the built-in portfolio)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Path to the theme preference file
    #[arg(long, default_value = "folio_prefs.json")]
    prefs: PathBuf,

    /// Detect a light terminal background and start in the light theme
    #[arg(long)]
    auto_theme: bool,

    /// Append tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    // Content: explicit file, or the built-in portfolio
    let (content, content_note) = match args.content {
        Some(ref path) => match Content::load(path) {
            Ok(content) => (content, None),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "falling back to built-in content");
                (data::builtin::builtin(), Some(format!("Content not loaded: {}", e)))
            }
        },
        None => (data::builtin::builtin(), None),
    };

    // Theme: stored preference wins, then terminal detection, then dark
    let store = PrefStore::new(&args.prefs);
    let theme_pref = store.load().unwrap_or_else(|| {
        if args.auto_theme {
            Theme::detect_preference()
        } else {
            ThemePreference::default()
        }
    });

    let mut app = App::new(content, theme_pref, store);
    app.navigate(RouteToken::parse(&args.route).resolve());
    if let Some(note) = content_note {
        app.set_status_message(note);
    }

    run_tui(app)
}

/// Route all tracing output to a file; stdout belongs to the TUI.
fn init_logging(path: &PathBuf) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=debug")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(false),
        )
        .init();
    Ok(())
}

/// Run the TUI with the given initial state
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Centered strip for the terminal-too-small notice. Stays inside the
/// frame even on terminals only a few rows tall.
fn undersize_notice_area(area: Rect) -> Rect {
    Rect::new(0, (area.height / 2).saturating_sub(2), area.width, area.height.min(5))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Re-apply the terminal title after a route change
        if app.title_dirty {
            let _ = execute!(io::stdout(), SetTitle(app.route.meta().title));
            app.title_dirty = false;
        }

        // Mark sections that have entered the visible window
        app.update_reveal();

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            app.frame_area = area;

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                frame.render_widget(paragraph, undersize_notice_area(area));
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with route metadata
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            ui::render_view(frame, app, chunks[2]);

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render overlays if active
            if app.selected_project.is_some() {
                ui::projects::render_overlay(frame, app, area);
            } else if app.show_certificate {
                ui::education::render_certificate_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    // Content starts after header (1) + tabs (1) + table border (1)
                    events::handle_mouse_event(app, mouse, 3);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undersize_notice_fits_tiny_terminals() {
        for height in 1..8 {
            let area = Rect::new(0, 0, 40, height);
            let notice = undersize_notice_area(area);
            assert!(notice.y + notice.height <= height, "height {}", height);
        }
    }
}
