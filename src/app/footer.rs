use leptos::prelude::*;

use crate::content::content;
use crate::BUILD_YEAR;

#[component]
pub fn Footer() -> impl IntoView {
    let name = content().profile.name.as_str();
    view! {
        <footer class="py-8 bg-white border-t-4 border-black mt-16">
            <div class="container mx-auto px-4 text-center">
                <div class="text-xl font-bold squiggle inline-block mb-4 font-cartoon">{name}</div>
                <div class="text-black font-bold text-sm">
                    {format!("© {BUILD_YEAR} {name}. All rights reserved.")}
                </div>
            </div>
        </footer>
    }
}
