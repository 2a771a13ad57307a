use super::{ScrollSample, Section};

/// Height of the fixed navigation bar in CSS pixels.
pub const NAV_HEIGHT: f64 = 64.0;
/// Extra clearance below the nav bar before a section counts as visible.
pub const NAV_CLEARANCE: f64 = 50.0;
/// Offsets below this are pinned to the first section.
pub const TOP_LOCK_OFFSET: f64 = 100.0;
/// Distance from the document bottom within which the last section is pinned.
pub const BOTTOM_LOCK_MARGIN: f64 = 100.0;

/// A section's bounding box relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBand {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBand {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Percentage of the scrollable distance traversed, in `[0, 100]`.
///
/// Recomputed from scratch on every event; the document height changes as
/// content loads, so nothing here may be cached.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable > 0.0 && offset > 0.0 {
        (offset / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Vertical pixel overlap between a section and the visible band of the
/// viewport (nav bar plus clearance at the top, window height at the bottom).
pub fn visible_overlap(band: SectionBand, viewport_height: f64) -> f64 {
    let visible_top = band.top.max(NAV_HEIGHT + NAV_CLEARANCE);
    let visible_bottom = band.bottom.min(viewport_height);
    (visible_bottom - visible_top).max(0.0)
}

/// Most-visible-wins section resolution with the two hard overrides.
///
/// The strict `>` comparison means an exact overlap tie keeps the earlier
/// section in document order, and when every overlap is zero (mid fast
/// scroll) the previous active section is retained.
pub fn resolve_active(
    previous: Section,
    sample: ScrollSample,
    bands: &[(Section, SectionBand)],
) -> Section {
    if sample.offset + sample.viewport_height > sample.document_height - BOTTOM_LOCK_MARGIN {
        // Near the bottom the last section may never win the overlap contest
        // (it can be shorter than the viewport), so pin it.
        if sample.offset >= TOP_LOCK_OFFSET {
            return Section::Contact;
        }
    }
    if sample.offset < TOP_LOCK_OFFSET {
        return Section::Hero;
    }

    let mut best = previous;
    let mut best_overlap = 0.0;
    for (section, band) in bands {
        let overlap = visible_overlap(*band, sample.viewport_height);
        if overlap > best_overlap {
            best_overlap = overlap;
            best = *section;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(offset: f64, viewport: f64, document: f64) -> ScrollSample {
        ScrollSample {
            offset,
            viewport_height: viewport,
            document_height: document,
        }
    }

    // Bands laid out as if the page were scrolled to `offset` with four
    // 1000px sections stacked from the top of a 4000px document.
    fn stacked_bands(offset: f64) -> Vec<(Section, SectionBand)> {
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
    fn test_progress_formula() {
        // viewport 800, document 4000 => scrollable 3200
        assert_eq!(scroll_progress(1600.0, 4000.0, 800.0), 50.0);
        assert_eq!(scroll_progress(3200.0, 4000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(800.0, 4000.0, 800.0), 25.0);
    }

    #[test]
    fn test_progress_zero_cases() {
        assert_eq!(scroll_progress(0.0, 4000.0, 800.0), 0.0);
        // unscrollable document
        assert_eq!(scroll_progress(100.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_clamped() {
        // overscroll past the end (momentum bounce) stays at 100
        assert_eq!(scroll_progress(5000.0, 4000.0, 800.0), 100.0);
    }

    #[test]
    fn test_progress_monotonic_in_offset() {
        let mut last = 0.0;
        for o in (0..=3200).step_by(50) {
            let p = scroll_progress(o as f64, 4000.0, 800.0);
            assert!(p >= last, "progress regressed at offset {o}");
            last = p;
        }
    }

    #[test]
    fn test_overlap_fully_visible_section() {
        let band = SectionBand::new(200.0, 700.0);
        assert_eq!(visible_overlap(band, 800.0), 500.0);
    }

    #[test]
    fn test_overlap_clipped_by_nav_band() {
        // Section starts above the nav clearance line.
        let band = SectionBand::new(0.0, 600.0);
        assert_eq!(visible_overlap(band, 800.0), 600.0 - (NAV_HEIGHT + NAV_CLEARANCE));
    }

    #[test]
    fn test_overlap_offscreen_is_zero() {
        assert_eq!(visible_overlap(SectionBand::new(900.0, 1900.0), 800.0), 0.0);
        assert_eq!(visible_overlap(SectionBand::new(-1200.0, -200.0), 800.0), 0.0);
    }

    #[test]
    fn test_top_of_page_forces_hero() {
        // Even with bands claiming another section is most visible.
        let bands = vec![
            (Section::Hero, SectionBand::new(-900.0, 100.0)),
            (Section::Skills, SectionBand::new(100.0, 1100.0)),
        ];
        let active = resolve_active(Section::Projects, sample(0.0, 800.0, 4000.0), &bands);
        assert_eq!(active, Section::Hero);
        let active = resolve_active(Section::Projects, sample(99.0, 800.0, 4000.0), &bands);
        assert_eq!(active, Section::Hero);
    }

    #[test]
    fn test_bottom_of_page_forces_contact() {
        let offset = 3150.0; // 3150 + 800 > 4000 - 100
        let active = resolve_active(
            Section::Hero,
            sample(offset, 800.0, 4000.0),
            &stacked_bands(offset),
        );
        assert_eq!(active, Section::Contact);
    }

    #[test]
    fn test_most_visible_section_wins() {
        let offset = 1400.0;
        // Skills occupies 1000-2000, Projects 2000-3000; at offset 1400 with an
        // 800px viewport, Skills shows 486px (clipped by the nav band) and
        // Projects 200px.
        let active = resolve_active(
            Section::Hero,
            sample(offset, 800.0, 4000.0),
            &stacked_bands(offset),
        );
        assert_eq!(active, Section::Skills);
    }

    #[test]
    fn test_exact_tie_keeps_document_order() {
        let bands = vec![
            (Section::Skills, SectionBand::new(200.0, 500.0)),
            (Section::Projects, SectionBand::new(500.0, 800.0)),
        ];
        let active = resolve_active(Section::Contact, sample(500.0, 800.0, 4000.0), &bands);
        assert_eq!(active, Section::Skills);
    }

    #[test]
    fn test_all_zero_overlap_retains_previous() {
        let bands = vec![
            (Section::Hero, SectionBand::new(-2000.0, -1000.0)),
            (Section::Skills, SectionBand::new(2000.0, 3000.0)),
        ];
        let active = resolve_active(Section::Projects, sample(1200.0, 800.0, 4000.0), &bands);
        assert_eq!(active, Section::Projects);
    }
}
