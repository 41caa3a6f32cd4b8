use leptos::prelude::*;

use super::ViewStateStore;
use crate::content::content;
use crate::view_state::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let store = ViewStateStore::expect();
    let profile = &content().profile;

    view! {
        <section class="py-12 md:py-20 flex flex-col md:flex-row items-center relative">
            <div class="md:w-1/2 mb-8 md:mb-0 md:pr-8 fade-in-up">
                <h1 class="text-4xl md:text-5xl font-bold mb-4 font-cartoon">
                    "Hello, I'm"
                    <br />
                    <span class="text-[#FF6B6B] squiggle">{profile.name.as_str()}</span>
                </h1>
                <p class="text-lg mb-8 leading-relaxed font-medium">{profile.tagline.as_str()}</p>
                <div class="flex flex-wrap gap-3">
                    <button
                        class="bubble-button"
                        on:click=move |_| store.select_and_scroll(Section::Contact)
                    >
                        "Contact Me →"
                    </button>
                    <button
                        class="px-4 py-2 rounded-md bg-white border-black border-[3px] font-bold"
                        on:click=move |_| store.select_and_scroll(Section::Project)
                    >
                        "View Project"
                    </button>
                </div>
            </div>
            <div class="md:w-1/2 zoom-in">
                <div class="relative bouncy">
                    <div class="cartoon-card overflow-hidden">
                        <img
                            src=profile.hero_image.as_str()
                            alt="Developer working"
                            class="w-full h-auto transform rotate-2 hover:rotate-0 transition-transform duration-300"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
