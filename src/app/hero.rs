use leptos::prelude::*;

use crate::viewport::Section;

use super::tracker::use_tracker;
use super::{content, use_theme, PageReady};

#[component]
pub fn HeroSection() -> impl IntoView {
    let theme = use_theme();
    let tracker = use_tracker();
    let PageReady(ready) = expect_context::<PageReady>();

    let stats = content::STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="text-center">
                    <div class="text-2xl sm:text-3xl md:text-4xl font-bold bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                        {stat.value}
                    </div>
                    <div class=move || format!("text-xs sm:text-sm {} mt-1", theme.tokens().muted)>
                        {stat.label}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Hero.anchor()
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-20 sm:pt-16"
        >
            <div class=move || {
                let gate = if ready.get() {
                    "translate-y-0 opacity-100"
                } else {
                    "translate-y-10 opacity-0"
                };
                format!("max-w-6xl mx-auto text-center transition-all duration-1000 {gate}")
            }>
                <div class="inline-flex items-center gap-2 px-3 sm:px-4 py-1.5 sm:py-2 rounded-full bg-white/5 backdrop-blur-sm border border-green-500/20 mb-6 sm:mb-8">
                    <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                    <span class="text-xs sm:text-sm text-green-400 font-medium">
                        "Available for new opportunities"
                    </span>
                </div>

                <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold mb-4 sm:mb-6">
                    <span class=move || {
                        format!(
                            "block bg-gradient-to-r {} bg-clip-text text-transparent",
                            theme.tokens().gradient_text,
                        )
                    }>{content::NAME.to_uppercase()}</span>
                    <span class="block text-xl sm:text-2xl md:text-3xl lg:text-4xl font-light mt-2 sm:mt-4 bg-gradient-to-r from-purple-400 via-blue-400 to-cyan-400 bg-clip-text text-transparent">
                        {content::TAGLINE}
                    </span>
                </h1>

                <p class=move || {
                    format!(
                        "text-base sm:text-lg md:text-xl {} mb-8 sm:mb-12 max-w-4xl mx-auto leading-relaxed px-4 sm:px-0",
                        theme.tokens().muted,
                    )
                }>
                    "I turn ambitious ideas into "
                    <span class="bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent font-semibold">
                        "fast, reliable software"
                    </span>
                    <br class="hidden sm:block" />
                    "Web platforms, embedded systems and the infrastructure between them"
                </p>

                <div class="flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center items-center mb-8 sm:mb-16 px-4 sm:px-0">
                    <button
                        on:click=move |_| tracker.scroll_to(Section::Projects)
                        class="bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-700 hover:to-blue-700 text-white px-6 sm:px-8 py-3 sm:py-4 text-base sm:text-lg rounded-full transition-all duration-300 hover:scale-105 shadow-lg hover:shadow-purple-500/25 w-full sm:w-auto"
                    >
                        "Explore Projects"
                        <svg
                            class="w-5 h-5 ml-2 inline animate-bounce"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="M12 5v14" />
                            <path d="m19 12-7 7-7-7" />
                        </svg>
                    </button>
                    <a
                        href=content::CV_PATH
                        download=content::CV_FILENAME
                        class="border border-gray-600 hover:border-white hover:bg-white/10 px-6 sm:px-8 py-3 sm:py-4 text-base sm:text-lg rounded-full transition-all duration-300 group w-full sm:w-auto"
                    >
                        <svg
                            class="w-5 h-5 mr-2 inline group-hover:animate-bounce"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="M12 3v12" />
                            <path d="m7 10 5 5 5-5" />
                            <path d="M5 21h14" />
                        </svg>
                        "Download CV"
                    </a>
                </div>

                <div class="grid grid-cols-3 gap-4 sm:gap-8 max-w-2xl mx-auto px-4 sm:px-0">{stats}</div>
            </div>
        </section>
    }
}
