//! Browser geometry reads and scroll commands.
//!
//! Missing elements and unsupported APIs are `Option`-guarded; callers treat
//! `None` as a silent no-op rather than surfacing diagnostics.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window};

use super::{ScrollSample, Section, SectionBand};

/// Current vertical scroll offset, with the same fallback chain browsers
/// needed before `pageYOffset` was universal.
pub fn scroll_offset() -> f64 {
    let Some(win) = web_sys::window() else {
        return 0.0;
    };
    if let Ok(y) = win.page_y_offset() {
        if y > 0.0 {
            return y;
        }
    }
    let Some(doc) = win.document() else {
        return 0.0;
    };
    if let Some(root) = doc.document_element() {
        let y = root.scroll_top() as f64;
        if y > 0.0 {
            return y;
        }
    }
    if let Some(body) = doc.body() {
        let y = body.scroll_top() as f64;
        if y > 0.0 {
            return y;
        }
    }
    0.0
}

/// One consistent reading of offset, viewport height and document height.
pub fn scroll_sample() -> Option<ScrollSample> {
    let win = web_sys::window()?;
    let doc = win.document()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    Some(ScrollSample {
        offset: scroll_offset(),
        viewport_height,
        document_height: max_document_height(&doc)?,
    })
}

/// The greatest of the document-height measurements; box-model reporting is
/// inconsistent across elements and browsers, so take them all.
fn max_document_height(doc: &Document) -> Option<f64> {
    let body = doc.body()?;
    let root = doc.document_element()?;
    let mut height = body.scroll_height().max(body.offset_height());
    height = height.max(root.client_height()).max(root.scroll_height());
    if let Some(root) = root.dyn_ref::<HtmlElement>() {
        height = height.max(root.offset_height());
    }
    Some(height as f64)
}

/// Bounding band (viewport-relative) of one section, if it is in the DOM.
pub fn section_band(section: Section) -> Option<SectionBand> {
    let doc = web_sys::window()?.document()?;
    let el = doc.get_element_by_id(section.anchor())?;
    let rect = el.get_bounding_client_rect();
    Some(SectionBand::new(rect.top(), rect.bottom()))
}

/// Bands for every section currently present, in document order.
pub fn section_bands() -> Vec<(Section, SectionBand)> {
    Section::ALL
        .iter()
        .filter_map(|s| section_band(*s).map(|band| (*s, band)))
        .collect()
}

/// Request a native smooth scroll that puts the section under the nav bar.
/// Returns `false` when the section is not in the DOM.
pub fn smooth_scroll_into_view(section: Section) -> bool {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Request a native smooth scroll back to the document origin.
pub fn request_native_scroll_top(win: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Force the scroll position, writing window, root and body for maximum
/// compatibility with engines that scroll different elements.
pub fn force_scroll_to(offset: f64) {
    let Some(win) = web_sys::window() else {
        return;
    };
    win.scroll_to_with_x_and_y(0.0, offset);
    if let Some(doc) = win.document() {
        if let Some(root) = doc.document_element() {
            root.set_scroll_top(offset as i32);
        }
        if let Some(body) = doc.body() {
            body.set_scroll_top(offset as i32);
        }
    }
}

/// Monotonic timestamp for animation clocks, in milliseconds.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
