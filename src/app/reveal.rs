use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to `true` the first time `target` scrolls into view and stays
/// there, so entrance animations play once.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed
}

/// Fade-in-up wrapper for section content.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    view! {
        <div
            node_ref=target
            class=move || if revealed.get() { "reveal reveal-visible" } else { "reveal" }
        >
            {children()}
        </div>
    }
}
