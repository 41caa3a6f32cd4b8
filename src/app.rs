mod contact;
mod footer;
mod header;
mod hero;
mod project;
mod resume;
mod reveal;
mod skills;
mod state;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::content;
use crate::view_state::Section;
use contact::ContactPanel;
use footer::Footer;
use header::Header;
use hero::Hero;
use project::ProjectPanel;
use resume::ResumePanel;
use reveal::Reveal;
use skills::SkillsPanel;
pub use state::ViewStateStore;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // every load starts from the default view-state
    ViewStateStore::provide();

    let owner = content().profile.name.as_str();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=content().profile.tagline.as_str() />

        <Router>
            <div class="min-h-screen cartoon-bg">
                <Header />
                <main class="relative container mx-auto px-4 py-8">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=PortfolioPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="shape-circle" style="top: 120px; left: 5%"></div>
        <div class="shape-triangle" style="top: 300px; right: 10%"></div>
        <div class="shape-rectangle" style="top: 500px; left: 15%"></div>
        <Hero />
        <SectionTabs />
    }
}

pub(crate) fn section_icon(section: Section) -> &'static str {
    match section {
        Section::About => "👤",
        Section::Skills => "🧩",
        Section::Project => "💻",
        Section::Resume => "📄",
        Section::Contact => "✉️",
    }
}

fn tab_active_class(section: Section) -> &'static str {
    match section {
        Section::About => "bg-[#FFD166] text-black",
        Section::Skills => "bg-[#06D6A0] text-black",
        Section::Project => "bg-[#118AB2] text-white",
        Section::Resume => "bg-[#073B4C] text-white",
        Section::Contact => "bg-[#FF6B6B] text-white",
    }
}

/// Tab strip plus one anchor per section. Anchors are always in the
/// document so scrolling works before the panel is mounted; only the
/// active section's panel is rendered inside its anchor.
#[component]
fn SectionTabs() -> impl IntoView {
    let store = ViewStateStore::expect();
    let active = Memo::new(move |_| store.active_section());

    view! {
        <div class="mt-8">
            <div
                role="tablist"
                class="grid grid-cols-5 mb-8 p-1 cartoon-border bg-white rounded-xl"
            >
                {Section::ALL
                    .into_iter()
                    .map(move |section| {
                        view! {
                            <button
                                role="tab"
                                aria-selected=move || (active.get() == section).to_string()
                                class=move || {
                                    if active.get() == section {
                                        format!(
                                            "py-2 rounded-lg font-bold {}",
                                            tab_active_class(section),
                                        )
                                    } else {
                                        "py-2 rounded-lg font-bold text-black".to_string()
                                    }
                                }
                                on:click=move |_| store.set_active_section(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {Section::ALL
                .into_iter()
                .map(move |section| {
                    view! {
                        <div id=section.id() role="tabpanel" class="mt-6 scroll-mt-24">
                            {move || (active.get() == section).then(|| section_panel(section))}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn section_panel(section: Section) -> AnyView {
    match section {
        Section::About => view! { <AboutPanel /> }.into_any(),
        Section::Skills => view! { <SkillsPanel /> }.into_any(),
        Section::Project => view! { <ProjectPanel /> }.into_any(),
        Section::Resume => view! { <ResumePanel /> }.into_any(),
        Section::Contact => view! { <ContactPanel /> }.into_any(),
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    let profile = &content().profile;
    view! {
        <Reveal>
            <div class="cartoon-card">
                <div class="md:flex">
                    <div class="md:w-1/3 p-6 bg-[#FFD166]">
                        <div class="rounded-full w-48 h-48 mx-auto overflow-hidden border-4 border-black cartoon-shadow">
                            <img
                                src=profile.avatar_image.as_str()
                                alt=profile.name.as_str()
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                    <div class="p-8 md:w-2/3">
                        <h2 class="text-3xl font-bold mb-4 squiggle font-cartoon">"About Me"</h2>
                        {profile
                            .about
                            .iter()
                            .map(|p| view! { <p class="mb-6 leading-relaxed text-lg">{p.as_str()}</p> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
