use leptos::prelude::*;

use super::{content, use_theme};

// Stamped by build.rs; the copyright year tracks the deployed build.
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn SiteFooter() -> impl IntoView {
    let theme = use_theme();
    let year = &BUILD_TIME[..4];

    view! {
        <footer class=move || {
            format!("py-8 sm:py-12 px-4 sm:px-8 border-t {} backdrop-blur-sm", theme.tokens().border)
        }>
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row justify-between items-center gap-4 sm:gap-0">
                <div class=move || {
                    format!("{} text-xs sm:text-sm text-center sm:text-left", theme.tokens().muted)
                }>{format!("© {year} {}", content::NAME)}</div>
                <div class=move || {
                    format!("{} text-xs sm:text-sm text-center sm:text-left", theme.tokens().muted)
                }>"Built with Rust • Leptos • Tailwind"</div>
            </div>
        </footer>
    }
}
