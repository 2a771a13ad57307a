use leptos::{html, prelude::*};

use super::tracker::use_tracker;

#[cfg(feature = "hydrate")]
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Intersection ratio before an element counts as revealed.
#[cfg(feature = "hydrate")]
const REVEAL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin so the reveal fires slightly before the element
/// reaches the viewport's bottom edge.
#[cfg(feature = "hydrate")]
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Wrapper that plays a one-time entrance transition the first time its
/// element scrolls into view. Once revealed, always revealed.
#[component]
pub fn Reveal(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let tracker = use_tracker();
    let node = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                tracker.mark_visible(id);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN),
    );

    view! {
        <div
            node_ref=node
            id=id
            class=move || {
                let shown = if tracker.is_revealed(id) {
                    "translate-y-0 opacity-100"
                } else {
                    "translate-y-20 opacity-0"
                };
                format!("{class} transition-all duration-1000 {shown}")
            }
            style=move || (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"))
        >
            {children()}
        </div>
    }
}
