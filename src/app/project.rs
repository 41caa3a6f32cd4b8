use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;
use super::ViewStateStore;
use crate::content::content;
use crate::cosmetic::tilt_style;

#[component]
pub fn ProjectPanel() -> impl IntoView {
    let store = ViewStateStore::expect();
    let project = &content().project;

    view! {
        <Reveal>
            <div class="cartoon-card overflow-hidden">
                <div class="md:flex">
                    <div class="md:w-1/2">
                        <img
                            src=project.image.as_str()
                            alt=project.title.as_str()
                            class="w-full h-full object-cover transform hover:scale-110 transition-transform duration-300"
                        />
                    </div>
                    <div class="p-8 md:w-1/2">
                        <h2 class="text-3xl font-bold mb-4 squiggle font-cartoon">
                            {project.title.as_str()}
                        </h2>
                        <p class="mb-4 text-lg">{project.description.as_str()}</p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {project
                                .tags
                                .iter()
                                .enumerate()
                                .map(|(i, tag)| {
                                    view! {
                                        <span
                                            class="px-3 py-1 bg-[#FFD166] text-black font-bold rounded-full text-sm border-2 border-black"
                                            style=tilt_style(tag, i)
                                        >
                                            {tag.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div
                            id="project-details"
                            class=move || {
                                if store.project_expanded() {
                                    "overflow-hidden transition-all duration-300 max-h-96 mb-6"
                                } else {
                                    "overflow-hidden transition-all duration-300 max-h-0"
                                }
                            }
                        >
                            <p class="text-lg">{project.details.as_str()}</p>
                        </div>

                        <button
                            class="px-4 py-2 rounded-md bg-white border-2 border-black font-bold flex items-center gap-2 hover:bg-[#FFD166]"
                            aria-controls="project-details"
                            aria-expanded=move || store.project_expanded().to_string()
                            on:click=move |_| store.toggle_project_expanded()
                        >
                            {move || {
                                if store.project_expanded() { "Show Less ▲" } else { "Show More ▼" }
                            }}
                        </button>
                        {match project.link.as_deref() {
                            Some(href) => {
                                Either::Left(
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="inline-block mt-4 bubble-button"
                                        >
                                            "View Project ↗"
                                        </a>
                                    },
                                )
                            }
                            None => {
                                Either::Right(
                                    view! {
                                        <button class="mt-4 bubble-button" disabled=true>
                                            "View Project ↗"
                                        </button>
                                    },
                                )
                            }
                        }}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
