mod chrome;
mod contact;
mod content;
mod footer;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;
mod tracker;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::{ThemeMode, ThemeTokens};
use chrome::{Backdrop, LoadingOverlay, ScrollProgressBar, ScrollTopButton};
use contact::ContactSection;
use footer::SiteFooter;
use hero::HeroSection;
use nav::NavBar;
use projects::ProjectsSection;
use skills::SkillsSection;
use tracker::provide_tracker;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Theme state shared across the component tree. Tokens are resolved from
/// the mode on read, so every theme-dependent class flips in one update.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    fn provide() -> Self {
        let cx = Self {
            mode: RwSignal::new(ThemeMode::default()),
        };
        provide_context(cx);
        cx
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode.get().is_dark()
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        self.mode.get().tokens()
    }

    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Signals true shortly after hydration; gates the loading overlay and the
/// hero entrance transition.
#[derive(Clone, Copy)]
pub struct PageReady(pub ReadSignal<bool>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title text="Alex Carver - Full-Stack Developer" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let theme = ThemeContext::provide();
    provide_tracker();

    let (ready, set_ready) = signal(false);
    provide_context(PageReady(ready));
    Effect::new(move |_| {
        set_timeout(
            move || set_ready.set(true),
            std::time::Duration::from_millis(500),
        );
    });

    view! {
        <div class=move || {
            let t = theme.tokens();
            format!(
                "min-h-screen w-full {} {} relative overflow-x-hidden transition-colors duration-500",
                t.surface,
                t.text,
            )
        }>
            <LoadingOverlay />
            <ScrollProgressBar />
            <ScrollTopButton />
            <Backdrop />

            <div class="relative z-10">
                <NavBar />
                <main>
                    <HeroSection />
                    <SkillsSection />
                    <ProjectsSection />
                    <ContactSection />
                </main>
                <SiteFooter />
            </div>
        </div>
    }
}
