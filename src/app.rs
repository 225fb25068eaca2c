mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::Theme;
use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Pacifico&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/remixicon@4.5.0/fonts/remixicon.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

/// The single piece of state shared by every section.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle_dark_mode(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ThemeContext {
        theme: RwSignal::new(Theme::default()),
    });

    view! {
        <Title text="Sourav's Portfolio" />
        <Meta
            name="description"
            content="Sourav Das - Full Stack & Backend Developer, AI/ML enthusiast."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Every section, top to bottom.
#[component]
fn PortfolioPage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || {
            format!("min-h-screen {}", theme.get().pick("bg-gray-900", "bg-white"))
        }>
            <Header />
            <main>
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

/// Heading, gradient rule and blurb that open most sections.
#[component]
fn SectionTitle(title: &'static str, #[prop(optional)] blurb: Option<&'static str>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="text-center mb-16">
            <h2 class=move || {
                format!("text-4xl font-bold mb-4 {}", theme.get().pick("text-white", "text-gray-900"))
            }>{title}</h2>
            <div class="w-20 h-1 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full mx-auto mb-6"></div>
            {blurb
                .map(|blurb| {
                    view! {
                        <p class=move || {
                            format!(
                                "text-lg max-w-2xl mx-auto {}",
                                theme.get().pick("text-gray-300", "text-gray-600"),
                            )
                        }>{blurb}</p>
                    }
                })}
        </div>
    }
}
