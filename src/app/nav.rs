use leptos::prelude::*;

use crate::viewport::Section;

use super::tracker::use_tracker;
use super::{content, use_theme, ThemeContext};

#[component]
pub fn NavBar() -> impl IntoView {
    let theme = use_theme();
    let tracker = use_tracker();
    let (menu_open, set_menu_open) = signal(false);

    let navigate = move |section: Section| {
        tracker.scroll_to(section);
        set_menu_open.set(false);
    };

    let desktop_links = Section::ALL
        .iter()
        .map(|section| {
            let section = *section;
            view! {
                <button
                    on:click=move |_| navigate(section)
                    class=move || {
                        let t = theme.tokens();
                        let tone = if tracker.active() == section { t.text } else { t.muted };
                        format!("text-sm font-medium transition-all duration-300 relative {tone}")
                    }
                >
                    {section.label()}
                    {move || {
                        (tracker.active() == section)
                            .then(|| {
                                view! {
                                    <div class="absolute -bottom-1 left-0 right-0 h-px bg-gradient-to-r from-purple-500 to-blue-500"></div>
                                }
                            })
                    }}
                </button>
            }
        })
        .collect_view();

    let mobile_links = Section::ALL
        .iter()
        .map(|section| {
            let section = *section;
            view! {
                <button
                    on:click=move |_| navigate(section)
                    class=move || {
                        let t = theme.tokens();
                        if tracker.active() == section {
                            format!(
                                "block w-full text-left px-4 py-3 rounded-lg transition-all duration-300 bg-gradient-to-r from-purple-500/20 to-blue-500/20 {} border border-purple-500/30",
                                t.text,
                            )
                        } else {
                            format!(
                                "block w-full text-left px-4 py-3 rounded-lg transition-all duration-300 {} hover:bg-white/5",
                                t.muted,
                            )
                        }
                    }
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            let t = theme.tokens();
            format!(
                "fixed top-0 left-0 right-0 z-50 {} backdrop-blur-xl border-b {} transition-colors duration-500",
                t.nav,
                t.border,
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class=move || {
                        format!(
                            "text-xl font-bold bg-gradient-to-r {} bg-clip-text text-transparent",
                            theme.tokens().gradient_text,
                        )
                    }>{content::NAME.to_uppercase()}</div>

                    <div class="hidden md:flex space-x-8">{desktop_links}</div>

                    <div class="hidden md:flex items-center space-x-3">
                        <SocialLinks />
                        <ThemeToggle theme />
                    </div>

                    <div class="md:hidden flex items-center space-x-3">
                        <ThemeToggle theme />
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class=move || format!("{} p-2", theme.tokens().muted)
                            aria-label="Toggle menu"
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <CloseIcon /> }.into_any()
                                } else {
                                    view! { <MenuIcon /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <div class=move || {
                let gate = if menu_open.get() {
                    "max-h-96 opacity-100"
                } else {
                    "max-h-0 opacity-0"
                };
                format!(
                    "md:hidden transition-all duration-300 {gate} overflow-hidden {} backdrop-blur-xl",
                    theme.tokens().nav,
                )
            }>
                <div class="px-4 py-6 space-y-4">
                    {mobile_links}
                    <div class=move || format!("pt-4 border-t {}", theme.tokens().border)>
                        <div class="flex justify-center space-x-4">
                            <SocialLinks />
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    let theme = use_theme();
    let link_class = move || format!("{} hover:opacity-80 text-xl px-2", theme.tokens().muted);

    view! {
        <a
            href=content::GITHUB_URL
            target="_blank"
            rel="noopener noreferrer"
            class=link_class
            aria-label="GitHub Profile"
        >
            <i class="devicon-github-plain"></i>
        </a>
        <a
            href=content::LINKEDIN_URL
            target="_blank"
            rel="noopener noreferrer"
            class=link_class
            aria-label="LinkedIn Profile"
        >
            <i class="devicon-linkedin-plain"></i>
        </a>
        <a
            href=format!("mailto:{}", content::EMAIL)
            class=link_class
            aria-label="Email"
        >
            <MailIcon />
        </a>
    }
}

#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            on:click=move |_| theme.toggle()
            class=move || format!("{} p-2 transition-colors duration-300", theme.tokens().muted)
            aria-label=move || {
                if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            }
        >
            {move || {
                if theme.is_dark() {
                    view! { <SunIcon /> }.into_any()
                } else {
                    view! { <MoonIcon /> }.into_any()
                }
            }}
        </button>
    }
}

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <circle cx="12" cy="12" r="3.5" />
            <path d="M12 2.5v2.5" />
            <path d="M12 19v2.5" />
            <path d="M2.5 12H5" />
            <path d="M19 12h2.5" />
            <path d="m5.5 5.5 1.8 1.8" />
            <path d="m16.7 16.7 1.8 1.8" />
            <path d="m18.5 5.5-1.8 1.8" />
            <path d="m7.3 16.7-1.8 1.8" />
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M20.5 14.5A8.5 8.5 0 1 1 9.5 3.5a7 7 0 1 0 11 11Z" />
        </svg>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg
            class="w-5 h-5"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
        >
            <path d="M3 6h18" />
            <path d="M3 12h18" />
            <path d="M3 18h18" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            class="w-5 h-5"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
        >
            <path d="m6 6 12 12" />
            <path d="m18 6-12 12" />
        </svg>
    }
}

#[component]
fn MailIcon() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4 inline"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <rect x="3" y="5" width="18" height="14" rx="2" />
            <path d="m3 7 9 6 9-6" />
        </svg>
    }
}
