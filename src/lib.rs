// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # folio
//!
//! A terminal portfolio browser: one hash-route-style section per view,
//! rendered as an interactive TUI.
//!
//! The content (profile, skills, projects, education, achievements,
//! contact details) ships built in, or loads from a JSON file. Navigation
//! mirrors a single-page site: numbered tabs, a goto prompt that accepts
//! location-fragment tokens (`#/projects`), and a Home fallback for
//! anything unrecognized.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐   ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │──▶│ Terminal│ │
//! │  │ (state) │    │(content) │    │(render) │   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘   └─────────┘ │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  ┌─────────┐    ┌─────────┐                                │
//! │  │ prefs   │    │ reveal  │                                │
//! │  │ (theme) │    │(scroll) │                                │
//! │  └─────────┘    └─────────┘                                │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, route navigation, and user interaction logic
//! - **[`data`]**: Content model, built-in portfolio, media classification,
//!   and pagination
//! - **[`prefs`]**: Theme preference persistence (a single-key JSON file)
//! - **[`reveal`]**: One-way section reveal flags driven by scrolling
//! - **[`ui`]**: Terminal rendering using ratatui - one submodule per
//!   section, plus overlays and theme palettes
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Open the built-in portfolio at the Projects section
//! folio --route "#/projects"
//!
//! # Load content from a file, with logging
//! folio --content portfolio.json --log-file folio.log
//! ```
//!
//! ### As a library
//!
//! ```
//! use folio::{App, PrefStore, Route, ThemePreference};
//! use folio::data::builtin::builtin;
//!
//! let prefs = PrefStore::new("folio_prefs.json");
//! let theme = prefs.load().unwrap_or(ThemePreference::Dark);
//! let mut app = App::new(builtin(), theme, prefs);
//! app.navigate(Route::Projects);
//! assert_eq!(app.projects_page.page(), 1);
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod prefs;
pub mod reveal;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Route, RouteMeta, RouteToken};
pub use data::{Content, MediaKind, Pagination, ProjectRecord, PROJECTS_PER_PAGE};
pub use prefs::{PrefStore, ThemePreference};
pub use reveal::RevealSet;
pub use ui::Theme;
