use leptos::{html, prelude::*};

use super::reveal::{use_revealed, Reveal};
use crate::content::content;
use crate::cosmetic::skill_bar_style;

#[component]
pub fn SkillsPanel() -> impl IntoView {
    let bars_ref = NodeRef::<html::Div>::new();
    let revealed = use_revealed(bars_ref);

    view! {
        <Reveal>
            <div class="cartoon-card">
                <div class="p-8">
                    <h2 class="text-3xl font-bold mb-6 squiggle font-cartoon">"My Skills"</h2>
                    <div node_ref=bars_ref class="space-y-6">
                        {content()
                            .skills
                            .iter()
                            .enumerate()
                            .map(move |(index, skill)| {
                                let level = skill.level;
                                view! {
                                    <div class="space-y-2">
                                        <div class="flex justify-between">
                                            <span class="font-medium text-xl">{skill.name.as_str()}</span>
                                            <span class="text-[#FF6B6B] font-bold">{format!("{level}%")}</span>
                                        </div>
                                        <div
                                            class="progress-bar"
                                            role="progressbar"
                                            aria-valuemin="0"
                                            aria-valuemax="100"
                                            aria-valuenow=level.to_string()
                                        >
                                            <div
                                                class="progress-fill"
                                                style=move || skill_bar_style(level, index, revealed.get())
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
