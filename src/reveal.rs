//! Reveal-on-scroll presentation flags.
//!
//! Each view marks a handful of sections that start hidden (rendered
//! dimmed) and flip to shown once they enter the visible viewport. The
//! transition is one-way: a section never un-reveals. The whole set is
//! rebuilt when a view mounts and dropped when it unmounts; nothing is
//! persisted.
//!
//! Observation happens as a single step before each draw (against the
//! current scroll offset and viewport height) rather than ad hoc inside
//! the renderers.

use crate::app::Route;
use crate::data::Content;

/// One-way visibility flags for a view's marked sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSet {
    /// Start row of each marked section within the view's virtual content.
    rows: Vec<u16>,
    shown: Vec<bool>,
}

impl RevealSet {
    /// Build the reveal set for a freshly mounted view.
    pub fn for_route(route: Route, content: &Content) -> Self {
        let rows = match route {
            // Hero section, then the featured-projects section further down
            Route::Home => vec![0, crate::ui::home::featured_row(content)],
            _ => vec![0],
        };
        Self::new(rows)
    }

    pub fn new(rows: Vec<u16>) -> Self {
        let shown = vec![false; rows.len()];
        Self { rows, shown }
    }

    /// Flip every section whose start row lies inside the visible window.
    pub fn observe(&mut self, scroll: u16, viewport: u16) {
        let end = scroll.saturating_add(viewport);
        for (row, shown) in self.rows.iter().zip(self.shown.iter_mut()) {
            if *row >= scroll && *row < end {
                *shown = true;
            }
        }
    }

    /// Whether section `index` has been revealed.
    ///
    /// Out-of-range indices count as shown so renderers never dim
    /// unmarked content.
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_start_hidden() {
        let set = RevealSet::new(vec![0, 20]);
        assert!(!set.is_shown(0));
        assert!(!set.is_shown(1));
    }

    #[test]
    fn test_observe_reveals_visible_sections() {
        let mut set = RevealSet::new(vec![0, 20]);
        set.observe(0, 10);
        assert!(set.is_shown(0));
        assert!(!set.is_shown(1));

        // Scroll the second section into view
        set.observe(15, 10);
        assert!(set.is_shown(1));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut set = RevealSet::new(vec![0, 20]);
        set.observe(0, 10);
        assert!(set.is_shown(0));

        // Scrolling away does not hide it again
        set.observe(50, 10);
        assert!(set.is_shown(0));
    }

    #[test]
    fn test_unmarked_indices_count_as_shown() {
        let set = RevealSet::new(vec![0]);
        assert!(set.is_shown(7));
    }
}
