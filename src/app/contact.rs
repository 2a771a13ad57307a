use leptos::either::EitherOf4;
use leptos::{ev::SubmitEvent, prelude::*};

use crate::contact::{ContactForm, SubmissionStatus};
use crate::viewport::Section;

use super::reveal::Reveal;
use super::{content, use_theme};

#[component]
pub fn ContactSection() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id=Section::Contact.anchor() class="py-10 sm:py-16 lg:py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <Reveal id="contact-content" class="text-center mb-8 sm:mb-12 lg:mb-16">
                    <h2 class=move || {
                        format!(
                            "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 sm:mb-6 bg-gradient-to-r {} bg-clip-text text-transparent",
                            theme.tokens().gradient_text,
                        )
                    }>"Let's Build Something"</h2>
                    <p class=move || {
                        format!(
                            "text-base sm:text-lg lg:text-xl {} mb-4 leading-relaxed",
                            theme.tokens().muted,
                        )
                    }>
                        "Have a project in mind? Let's turn it into "
                        <span class="bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent font-semibold">
                            "something worth shipping"
                        </span>
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 sm:gap-8 lg:gap-12">
                    <ContactFormCard />
                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let theme = use_theme();
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(|f| f.submit()).flatten() else {
            return;
        };
        // Simulated network latency; a real transport slots in here.
        #[cfg(feature = "hydrate")]
        {
            use std::time::Duration;

            use crate::contact::{deliver, SEND_LATENCY_MS, SUCCESS_LINGER_MS};

            set_timeout(
                move || {
                    let outcome = deliver(&payload);
                    let succeeded = outcome.is_ok();
                    form.update(|f| f.complete(outcome));
                    if succeeded {
                        set_timeout(
                            move || form.update(|f| f.settle()),
                            Duration::from_millis(SUCCESS_LINGER_MS),
                        );
                    }
                },
                Duration::from_millis(SEND_LATENCY_MS),
            );
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let label_class = move || format!("block text-sm font-medium {} mb-2", theme.tokens().muted);
    let input_class = move || {
        let t = theme.tokens();
        format!(
            "w-full px-4 py-3 {} border {} rounded-lg {} placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent transition-all duration-300",
            t.input_bg,
            t.input_border,
            t.text,
        )
    };
    let field_error = |message: Option<&'static str>| {
        message.map(|message| view! { <p class="mt-1 text-sm text-red-400">{message}</p> })
    };

    view! {
        <div class=move || {
            let t = theme.tokens();
            format!(
                "bg-gradient-to-br {} border {} rounded-xl backdrop-blur-sm",
                t.card,
                t.border,
            )
        }>
            <div class="p-4 sm:p-6 lg:p-8">
                <h3 class=move || {
                    format!("text-xl sm:text-2xl font-bold mb-4 sm:mb-6 {}", theme.tokens().text)
                }>"Send a Message"</h3>
                <form on:submit=on_submit novalidate class="space-y-4 sm:space-y-6">
                    <div>
                        <label class=label_class>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.draft().name.clone())
                            on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                            class=input_class
                            placeholder="Your name"
                        />
                        {move || field_error(form.with(|f| f.errors().name))}
                    </div>
                    <div>
                        <label class=label_class>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.draft().email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                            class=input_class
                            placeholder="you@example.com"
                        />
                        {move || field_error(form.with(|f| f.errors().email))}
                    </div>
                    <div>
                        <label class=label_class>"Message"</label>
                        <textarea
                            rows="4"
                            prop:value=move || form.with(|f| f.draft().message.clone())
                            on:input=move |ev| form.update(|f| f.set_message(event_target_value(&ev)))
                            class=move || format!("{} resize-none", input_class())
                            placeholder="Tell me about your project..."
                        ></textarea>
                        {move || field_error(form.with(|f| f.errors().message))}
                    </div>
                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.status()) == SubmissionStatus::Sending
                        class="w-full bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-700 hover:to-blue-700 text-white px-6 py-3 rounded-lg transition-all duration-300 hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed group"
                    >
                        {move || match form.with(|f| f.status()) {
                            SubmissionStatus::Sending => {
                                EitherOf4::A(
                                    view! {
                                        <span class="inline-flex items-center justify-center">
                                            <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin mr-2"></span>
                                            "Sending..."
                                        </span>
                                    },
                                )
                            }
                            SubmissionStatus::Success => {
                                EitherOf4::B(
                                    view! {
                                        <span class="inline-flex items-center justify-center">
                                            "✓ Message sent!"
                                        </span>
                                    },
                                )
                            }
                            SubmissionStatus::Error => {
                                EitherOf4::C(
                                    view! {
                                        <span class="inline-flex items-center justify-center">
                                            "Sending failed - try again"
                                        </span>
                                    },
                                )
                            }
                            SubmissionStatus::Idle => {
                                EitherOf4::D(
                                    view! {
                                        <span class="inline-flex items-center justify-center">
                                            "Send Message"
                                            <svg
                                                class="w-4 h-4 ml-2 group-hover:translate-x-1 transition-transform"
                                                viewBox="0 0 24 24"
                                                fill="none"
                                                stroke="currentColor"
                                                stroke-width="2"
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                            >
                                                <path d="m22 2-7 20-4-9-9-4Z" />
                                                <path d="M22 2 11 13" />
                                            </svg>
                                        </span>
                                    },
                                )
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let theme = use_theme();

    let info_row_class = move || {
        let t = theme.tokens();
        format!(
            "flex items-center gap-4 p-4 bg-gray-800/30 rounded-lg backdrop-blur-sm border {} hover:border-gray-600/50 transition-all duration-300",
            t.border,
        )
    };

    view! {
        <div class="space-y-8">
            <div>
                <h3 class=move || {
                    format!("text-2xl font-bold mb-6 {}", theme.tokens().text)
                }>"Contact Details"</h3>
                <div class="space-y-4">
                    <div class=info_row_class>
                        <div class="p-3 bg-gradient-to-r from-purple-500 to-blue-500 rounded-lg text-white">
                            <svg
                                class="w-5 h-5"
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
                        </div>
                        <div class="min-w-0">
                            <p class=move || {
                                format!("text-xs sm:text-sm {}", theme.tokens().muted)
                            }>"Email"</p>
                            <p class=move || {
                                format!("text-sm sm:text-base {} truncate", theme.tokens().text)
                            }>{content::EMAIL}</p>
                        </div>
                    </div>
                    <div class=info_row_class>
                        <div class="p-3 bg-gradient-to-r from-green-500 to-teal-500 rounded-lg text-white">
                            <svg
                                class="w-5 h-5"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="1.8"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <path d="M20 10c0 6-8 12-8 12S4 16 4 10a8 8 0 0 1 16 0Z" />
                                <circle cx="12" cy="10" r="3" />
                            </svg>
                        </div>
                        <div class="min-w-0">
                            <p class=move || {
                                format!("text-xs sm:text-sm {}", theme.tokens().muted)
                            }>"Location"</p>
                            <p class=move || {
                                format!("text-sm sm:text-base {}", theme.tokens().text)
                            }>{content::LOCATION}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div>
                <h4 class=move || {
                    format!("text-base sm:text-lg font-semibold mb-3 sm:mb-4 {}", theme.tokens().text)
                }>"Elsewhere"</h4>
                <div class="flex gap-2 sm:gap-4">
                    <a
                        href=content::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-gray-700 hover:border-purple-500 hover:bg-purple-500/10 rounded-full p-4 group transition-all duration-300 hover:scale-110"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain text-xl group-hover:rotate-12 transition-transform duration-300"></i>
                    </a>
                    <a
                        href=content::LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-gray-700 hover:border-blue-500 hover:bg-blue-500/10 rounded-full p-4 group transition-all duration-300 hover:scale-110"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain text-xl group-hover:rotate-12 transition-transform duration-300"></i>
                    </a>
                </div>
            </div>

            <div class="p-4 sm:p-6 bg-gradient-to-r from-purple-500/10 to-blue-500/10 rounded-lg border border-purple-500/20">
                <h4 class=move || {
                    format!("text-base sm:text-lg font-semibold mb-2 {}", theme.tokens().text)
                }>"Response Time"</h4>
                <p class=move || {
                    format!("{} text-xs sm:text-sm", theme.tokens().muted)
                }>
                    "I usually reply within 24 hours. For anything urgent, email me directly."
                </p>
            </div>
        </div>
    }
}
