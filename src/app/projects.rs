use leptos::prelude::*;

use crate::viewport::Section;

use super::reveal::Reveal;
use super::{content, use_theme};

/// Stagger between neighbouring project cards.
const CARD_STAGGER_MS: u32 = 200;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let theme = use_theme();

    let cards = content::PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let highlights = project
                .highlights
                .iter()
                .map(|highlight| {
                    view! {
                        <div class="flex items-center gap-2 px-3 py-1 bg-green-500/10 rounded-full border border-green-500/20 group-hover:bg-green-500/20 group-hover:border-green-500/40 group-hover:scale-105 transition-all duration-300">
                            <div class="w-1.5 h-1.5 bg-green-500 rounded-full group-hover:animate-pulse"></div>
                            <span class="text-green-400 text-xs font-medium group-hover:text-green-300 transition-colors duration-300">
                                {*highlight}
                            </span>
                        </div>
                    }
                })
                .collect_view();

            let tech = project
                .tech
                .iter()
                .map(|tech| {
                    view! {
                        <span class=move || {
                            if theme.is_dark() {
                                "px-2.5 py-0.5 rounded-md text-xs font-semibold transition-all duration-300 group-hover:scale-105 bg-gray-800/50 text-gray-300 group-hover:bg-gray-700/70 group-hover:text-white"
                            } else {
                                "px-2.5 py-0.5 rounded-md text-xs font-semibold transition-all duration-300 group-hover:scale-105 bg-gray-200/50 text-gray-600 group-hover:bg-gray-300/70 group-hover:text-gray-900"
                            }
                        }>{*tech}</span>
                    }
                })
                .collect_view();

            view! {
                <Reveal id={REVEAL_IDS[index]} delay_ms={index as u32 * CARD_STAGGER_MS}>
                    <div class=move || {
                        let t = theme.tokens();
                        format!(
                            "group bg-gradient-to-br {} border {} hover:border-gray-600/50 rounded-xl transition-all duration-700 hover:scale-[1.03] cursor-pointer backdrop-blur-sm overflow-hidden hover:shadow-2xl hover:shadow-purple-500/20",
                            t.card,
                            t.border,
                        )
                    }>
                        <div class="relative overflow-hidden">
                            <div class=format!(
                                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-all duration-700",
                                project.gradient,
                            )></div>

                            <div class=format!(
                                "h-3 bg-gradient-to-r {} group-hover:h-4 transition-all duration-300",
                                project.gradient,
                            )></div>

                            <div class="p-4 sm:p-6 relative z-10">
                                <span class="inline-block mb-4 px-2.5 py-0.5 rounded-md text-xs font-semibold border border-purple-500/50 text-purple-400 bg-purple-500/10 group-hover:border-purple-400 group-hover:bg-purple-500/20 group-hover:scale-105 transition-all duration-300">
                                    {project.category}
                                </span>

                                <h3 class="text-xl sm:text-2xl font-bold mb-2 sm:mb-3 group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-blue-400 group-hover:bg-clip-text group-hover:text-transparent transition-all duration-500">
                                    {project.title}
                                </h3>

                                <p class=move || {
                                    if theme.is_dark() {
                                        "text-sm sm:text-base leading-relaxed mb-4 sm:mb-6 transition-colors duration-300 text-gray-300 group-hover:text-white"
                                    } else {
                                        "text-sm sm:text-base leading-relaxed mb-4 sm:mb-6 transition-colors duration-300 text-gray-600 group-hover:text-gray-900"
                                    }
                                }>{project.description}</p>

                                <div class="flex flex-wrap gap-1 sm:gap-2 mb-4 sm:mb-6">{highlights}</div>

                                <div class="flex flex-wrap gap-1 sm:gap-2 mb-4 sm:mb-6">{tech}</div>

                                <div class="flex gap-2 sm:gap-3">
                                    <a
                                        href=project.repo_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=move || {
                                            format!(
                                                "flex-1 text-center text-sm py-2 rounded-md border {} hover:border-white hover:bg-white hover:text-black transition-all duration-300 group-hover:scale-105",
                                                theme.tokens().border,
                                            )
                                        }
                                    >
                                        <i class="devicon-github-plain mr-2"></i>
                                        "Code"
                                    </a>
                                    <a
                                        href=project.demo_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=move || {
                                            format!(
                                                "flex-1 text-center text-sm py-2 rounded-md {} hover:bg-white/5 transition-all duration-300 group-hover:scale-105",
                                                theme.tokens().muted,
                                            )
                                        }
                                    >
                                        "Live Demo"
                                    </a>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Projects.anchor() class="py-10 sm:py-16 lg:py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <Reveal id="projects-header" class="text-center mb-8 sm:mb-12 lg:mb-16">
                    <h2 class=move || {
                        format!(
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-3 sm:mb-4 bg-gradient-to-r {} bg-clip-text text-transparent",
                            theme.tokens().gradient_text,
                        )
                    }>"Featured Projects"</h2>
                    <p class=move || {
                        format!("text-base sm:text-lg lg:text-xl {} max-w-2xl mx-auto", theme.tokens().muted)
                    }>"Systems that earn their keep in production"</p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-6 lg:gap-8">{cards}</div>
            </div>
        </section>
    }
}

// Stable reveal ids, one per project card in order.
const REVEAL_IDS: [&str; 4] = ["project-0", "project-1", "project-2", "project-3"];
