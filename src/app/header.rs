use leptos::prelude::*;

use super::{section_icon, ViewStateStore};
use crate::content::content;
use crate::view_state::Section;

#[component]
pub fn Header() -> impl IntoView {
    let store = ViewStateStore::expect();
    let profile = &content().profile;

    view! {
        <header
            class="sticky top-0 z-50 bg-white/90 backdrop-blur-md border-b-4 border-black"
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    store.close_menu();
                }
            }
        >
            <div class="container mx-auto px-4 py-3">
                <div class="flex justify-between items-center">
                    <div class="flex items-center fade-in">
                        <div class="bg-[#FF6B6B] w-12 h-12 rounded-full flex items-center justify-center text-white font-bold mr-3 border-4 border-black">
                            {profile.initials.as_str()}
                        </div>
                        <h1 class="text-2xl font-bold font-cartoon">{profile.name.as_str()}</h1>
                    </div>

                    <nav class="hidden md:flex items-center space-x-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavItem section /> })
                            .collect_view()}
                    </nav>

                    <button
                        class="md:hidden text-black p-2 bubble-button"
                        aria-label=move || if store.menu_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || store.menu_open().to_string()
                        on:click=move |_| store.toggle_menu_open()
                    >
                        <span class="text-2xl leading-none">
                            {move || if store.menu_open() { "✕" } else { "☰" }}
                        </span>
                    </button>
                </div>

                <Show when=move || store.menu_open()>
                    <div class="md:hidden py-3 border-t border-black mt-3 slide-down">
                        <nav class="flex flex-col space-y-2">
                            {Section::ALL
                                .into_iter()
                                .map(|section| view! { <MobileNavItem section /> })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NavItem(section: Section) -> impl IntoView {
    let store = ViewStateStore::expect();
    view! {
        <a
            href=section.href()
            on:click=move |_| store.set_active_section(section)
            class=move || {
                if store.is_active(section) {
                    "flex items-center px-4 py-2 rounded-xl text-sm font-bold transition-colors bg-[#FFD166] text-black border-2 border-black cartoon-shadow"
                } else {
                    "flex items-center px-4 py-2 rounded-xl text-sm font-bold transition-colors text-black hover:bg-[#FFE599] border-2 border-transparent hover:border-black"
                }
            }
        >
            <span class="mr-2">{section_icon(section)}</span>
            {section.label()}
        </a>
    }
}

#[component]
fn MobileNavItem(section: Section) -> impl IntoView {
    let store = ViewStateStore::expect();
    view! {
        <a
            href=section.href()
            on:click=move |_| store.navigate_from_menu(section)
            class="flex items-center px-4 py-3 hover:bg-[#FFD166] rounded-xl transition-colors text-black font-bold border-2 border-black cartoon-shadow"
        >
            <span class="mr-3 text-[#FF6B6B]">{section_icon(section)}</span>
            {section.label()}
        </a>
    }
}
