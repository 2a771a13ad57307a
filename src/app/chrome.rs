//! Page furniture driven by the viewport tracker: loading overlay, scroll
//! progress bar, scroll-to-top control and the pointer-following backdrop.

use leptos::prelude::*;

use super::tracker::use_tracker;
use super::{content, use_theme, PageReady};

/// The scroll-to-top button appears past this offset.
const SCROLL_TOP_VISIBLE_AFTER: f64 = 300.0;

/// Radius of the pointer-following radial glow.
const GLOW_RADIUS: f64 = 400.0;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let theme = use_theme();
    let PageReady(ready) = expect_context::<PageReady>();

    view! {
        <div class=move || {
            let t = theme.tokens();
            let gate = if ready.get() {
                "opacity-0 pointer-events-none"
            } else {
                "opacity-100"
            };
            format!(
                "fixed inset-0 z-[100] {} flex items-center justify-center transition-all duration-1000 {gate}",
                t.surface,
            )
        }>
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-purple-500/30 border-t-purple-500 rounded-full animate-spin mx-auto mb-4"></div>
                <div class="text-2xl font-light bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                    {content::NAME.to_uppercase()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let tracker = use_tracker();

    view! {
        <div class="fixed top-0 left-0 w-full h-1 sm:h-2 bg-gray-800 z-50 backdrop-blur-sm border-b border-gray-700">
            <div
                class="h-full bg-gradient-to-r from-purple-500 via-pink-500 to-blue-500 transition-all duration-200 ease-out shadow-lg shadow-purple-500/50"
                style=move || {
                    let progress = tracker.progress();
                    let min_width = if progress > 0.0 { "4px" } else { "0px" };
                    format!("width: {progress}%; min-width: {min_width}")
                }
            ></div>
        </div>
    }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let tracker = use_tracker();

    view! {
        <button
            on:click=move |_| tracker.scroll_to_top()
            class=move || {
                let gate = if tracker.scroll_offset() > SCROLL_TOP_VISIBLE_AFTER {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-4 pointer-events-none"
                };
                format!(
                    "fixed bottom-8 right-8 z-50 w-14 h-14 rounded-full bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-700 hover:to-blue-700 shadow-lg hover:shadow-purple-500/25 transition-all duration-300 hover:scale-110 cursor-pointer flex items-center justify-center select-none {gate}",
                )
            }
            aria-label="Scroll to top"
        >
            <svg
                class="w-6 h-6 text-white"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="M12 19V5" />
                <path d="m5 12 7-7 7 7" />
            </svg>
        </button>
    }
}

/// Theme-aware backdrop: a base gradient, a radial glow that trails the
/// pointer and three blurred blobs drifting with scroll parallax.
#[component]
pub fn Backdrop() -> impl IntoView {
    let theme = use_theme();
    let tracker = use_tracker();

    let glow_style = move || {
        let (x, y) = tracker.pointer();
        let gradient = if theme.is_dark() {
            "radial-gradient(circle, rgba(99, 102, 241, 0.12) 0%, rgba(139, 92, 246, 0.08) 25%, rgba(59, 130, 246, 0.04) 50%, transparent 70%)"
        } else {
            "radial-gradient(circle, rgba(99, 102, 241, 0.06) 0%, rgba(139, 92, 246, 0.04) 25%, rgba(59, 130, 246, 0.02) 50%, transparent 70%)"
        };
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; background: {gradient}; transform: translate3d(0, 0, 0)",
            x - GLOW_RADIUS,
            y - GLOW_RADIUS,
            GLOW_RADIUS * 2.0,
            GLOW_RADIUS * 2.0,
        )
    };

    let blob = move |base: &'static str, position: &'static str, dark: &'static str, light: &'static str, drift: fn(f64) -> (f64, f64)| {
        let classes = move || {
            let tint = if theme.is_dark() { dark } else { light };
            format!("absolute {base} rounded-full blur-3xl will-change-transform transition-colors duration-500 bg-gradient-to-r {tint}")
        };
        let style = move || {
            let (dx, dy) = drift(tracker.scroll_offset());
            format!("{position}; transform: translate3d({dx}px, {dy}px, 0)")
        };
        view! { <div class=classes style=style></div> }
    };

    view! {
        <div class="fixed inset-0 z-0">
            <div class=move || {
                let wash = if theme.is_dark() {
                    "from-purple-900/30 via-blue-900/20 to-black"
                } else {
                    "from-purple-100/30 via-blue-100/20 to-white"
                };
                format!("absolute inset-0 transition-all duration-500 bg-gradient-to-br {wash}")
            }></div>

            <div class="absolute pointer-events-none will-change-transform" style=glow_style></div>

            <div class="absolute inset-0 overflow-hidden">
                {blob(
                    "w-96 h-96",
                    "top: 10%; left: 10%",
                    "from-purple-500/8 to-pink-500/8",
                    "from-purple-500/4 to-pink-500/4",
                    |scroll| (scroll * 0.05, (scroll * 0.005).sin() * 25.0),
                )}
                {blob(
                    "w-80 h-80",
                    "top: 60%; right: 10%",
                    "from-blue-500/8 to-cyan-500/8",
                    "from-blue-500/4 to-cyan-500/4",
                    |scroll| (-scroll * 0.08, (scroll * 0.005).cos() * 15.0),
                )}
                {blob(
                    "w-72 h-72",
                    "bottom: 20%; left: 20%",
                    "from-green-500/8 to-emerald-500/8",
                    "from-green-500/4 to-emerald-500/4",
                    |scroll| (scroll * 0.04, (scroll * 0.004).sin() * 20.0),
                )}
            </div>
        </div>
    }
}
