//! Viewport and navigation state: scroll progress, active-section detection,
//! reveal-once visibility and the inputs to programmatic scrolling.
//!
//! Everything in this module tree is pure state and math; the browser wiring
//! lives in [`dom`] and [`sched`] and only exists in the hydrate build.

pub mod geometry;
pub mod motion;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod sched;

use std::collections::HashSet;

pub use geometry::SectionBand;

/// The four anchor-identified page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The element id the section is anchored to. Load-bearing: geometry
    /// queries and in-page navigation both target these exact ids.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// One reading of the browser's scroll geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Snapshot of pointer and scroll state handed to the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub pointer: (f64, f64),
    pub scroll_offset: f64,
    /// Percent of the scrollable distance traversed, in `[0, 100]`.
    pub progress: f64,
}

/// Single-writer state container behind the page chrome.
///
/// All mutation goes through one entry point per event source; readers get
/// value snapshots, never references into the container.
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    state: ViewportState,
    active: Section,
    revealed: HashSet<String>,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll/wheel event entry point: refresh offset and progress.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> ViewportState {
        self.state.scroll_offset = sample.offset.max(0.0);
        self.state.progress =
            geometry::scroll_progress(sample.offset, sample.document_height, sample.viewport_height);
        self.state
    }

    /// Pointer event entry point (already coalesced to one call per frame).
    pub fn on_pointer(&mut self, x: f64, y: f64) -> ViewportState {
        self.state.pointer = (x, y);
        self.state
    }

    /// Debounced active-section re-evaluation from fresh geometry.
    pub fn resolve_active(
        &mut self,
        sample: ScrollSample,
        bands: &[(Section, SectionBand)],
    ) -> Section {
        self.active = geometry::resolve_active(self.active, sample, bands);
        self.active
    }

    /// Optimistic activation ahead of the geometry-derived confirmation,
    /// used when a navigation click starts a programmatic scroll.
    pub fn set_active(&mut self, section: Section) {
        self.active = section;
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Record that an element crossed into the viewport. Idempotent and
    /// one-way; returns whether the id was newly inserted.
    pub fn mark_visible(&mut self, id: &str) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(offset: f64) -> ScrollSample {
        ScrollSample {
            offset,
            viewport_height: 800.0,
            document_height: 4000.0,
        }
    }

    fn bands_at(offset: f64) -> Vec<(Section, SectionBand)> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let top = i as f64 * 1000.0 - offset;
                (*s, SectionBand::new(top, top + 1000.0))
            })
            .collect()
    }

    #[test]
    fn test_scroll_updates_offset_and_progress() {
        let mut tracker = ViewportTracker::new();
        let state = tracker.on_scroll(sample(1600.0));
        assert_eq!(state.scroll_offset, 1600.0);
        assert_eq!(state.progress, 50.0);
        // progress is recomputed, not accumulated
        let state = tracker.on_scroll(sample(0.0));
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_pointer_updates_do_not_disturb_scroll_state() {
        let mut tracker = ViewportTracker::new();
        tracker.on_scroll(sample(1600.0));
        let state = tracker.on_pointer(120.0, 340.0);
        assert_eq!(state.pointer, (120.0, 340.0));
        assert_eq!(state.scroll_offset, 1600.0);
        assert_eq!(state.progress, 50.0);
    }

    #[test]
    fn test_active_section_tracks_scroll_position() {
        let mut tracker = ViewportTracker::new();
        assert_eq!(tracker.active(), Section::Hero);
        assert_eq!(
            tracker.resolve_active(sample(1400.0), &bands_at(1400.0)),
            Section::Skills
        );
        assert_eq!(
            tracker.resolve_active(sample(2400.0), &bands_at(2400.0)),
            Section::Projects
        );
        // back to the top pins hero regardless of geometry
        assert_eq!(tracker.resolve_active(sample(0.0), &bands_at(0.0)), Section::Hero);
    }

    #[test]
    fn test_visibility_set_only_grows() {
        let mut tracker = ViewportTracker::new();
        assert!(tracker.mark_visible("skills-header"));
        assert!(!tracker.mark_visible("skills-header"));
        assert!(tracker.is_revealed("skills-header"));
        // unrelated state churn never evicts an entry
        tracker.on_scroll(sample(3000.0));
        tracker.resolve_active(sample(3000.0), &bands_at(3000.0));
        tracker.on_pointer(5.0, 5.0);
        assert!(tracker.is_revealed("skills-header"));
        assert!(!tracker.is_revealed("projects-header"));
    }

    #[test]
    fn test_optimistic_activation_is_idempotent() {
        let mut tracker = ViewportTracker::new();
        tracker.set_active(Section::Projects);
        let first = tracker.active();
        tracker.set_active(Section::Projects);
        assert_eq!(tracker.active(), first);
        // geometry confirmation at the target agrees with the optimistic value
        let offset = 2100.0;
        assert_eq!(
            tracker.resolve_active(sample(offset), &bands_at(offset)),
            Section::Projects
        );
    }
}
