use leptos::prelude::*;

use crate::viewport::Section;

use super::reveal::Reveal;
use super::{content, use_theme};

/// Stagger between neighbouring skill cards.
const CARD_STAGGER_MS: u32 = 150;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let theme = use_theme();

    let cards = content::SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let skills = category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="flex items-center gap-2 group-hover:translate-x-1 transition-transform duration-300">
                            <div class=format!(
                                "w-2 h-2 rounded-full bg-gradient-to-r {} group-hover:scale-125 transition-transform duration-300",
                                category.accent,
                            )></div>
                            <span class=move || {
                                if theme.is_dark() {
                                    "text-xs sm:text-sm transition-colors duration-300 text-gray-300 group-hover:text-white"
                                } else {
                                    "text-xs sm:text-sm transition-colors duration-300 text-gray-600 group-hover:text-gray-900"
                                }
                            }>{*skill}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <Reveal id={REVEAL_IDS[index]} delay_ms={index as u32 * CARD_STAGGER_MS}>
                    <div class=move || {
                        let t = theme.tokens();
                        format!(
                            "group bg-gradient-to-br {} border {} hover:border-gray-600/50 rounded-xl transition-all duration-700 hover:scale-105 cursor-pointer backdrop-blur-sm hover:shadow-2xl hover:shadow-purple-500/10",
                            t.card,
                            t.border,
                        )
                    }>
                        <div class="p-4 sm:p-6 relative overflow-hidden">
                            <div class=format!(
                                "absolute -inset-1 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-opacity duration-500 rounded-xl",
                                category.accent,
                            )></div>

                            <div class="relative z-10">
                                <div class="flex items-center gap-2 sm:gap-3 mb-3 sm:mb-4 group-hover:scale-105 transition-transform duration-300">
                                    <div class=format!(
                                        "p-2 sm:p-3 rounded-xl bg-gradient-to-r {} text-white text-2xl group-hover:rotate-12 transition-transform duration-300",
                                        category.accent,
                                    )>
                                        <i class=category.icon></i>
                                    </div>
                                    <h3 class=move || {
                                        format!(
                                            "text-lg sm:text-xl font-semibold {} group-hover:text-transparent group-hover:bg-clip-text group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-blue-400 transition-all duration-300",
                                            theme.tokens().text,
                                        )
                                    }>{category.title}</h3>
                                </div>
                                <div class="space-y-2">{skills}</div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Skills.anchor() class="py-10 sm:py-16 lg:py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <Reveal id="skills-header" class="text-center mb-8 sm:mb-12 lg:mb-16">
                    <h2 class=move || {
                        format!(
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-3 sm:mb-4 bg-gradient-to-r {} bg-clip-text text-transparent",
                            theme.tokens().gradient_text,
                        )
                    }>"Technology Stack"</h2>
                    <p class=move || {
                        format!("text-base sm:text-lg lg:text-xl {} max-w-2xl mx-auto", theme.tokens().muted)
                    }>"Cross-cutting skills for complete, production-grade solutions"</p>
                </Reveal>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">{cards}</div>
            </div>
        </section>
    }
}

// Stable reveal ids, one per skill card in order.
const REVEAL_IDS: [&str; 6] = [
    "skill-0", "skill-1", "skill-2", "skill-3", "skill-4", "skill-5",
];
