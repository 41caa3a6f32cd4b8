use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;
use crate::content::{content, ResumeEntry, ResumeKind};
use crate::cosmetic::tilt_style;

#[component]
pub fn ResumePanel() -> impl IntoView {
    let content = content();

    view! {
        <Reveal>
            <div class="cartoon-card">
                <div class="p-8">
                    <h2 class="text-3xl font-bold mb-6 squiggle font-cartoon">"Resume"</h2>
                    <div class="space-y-8">
                        <ResumeGroup kind=ResumeKind::Education />
                        <hr class="doodle-hr" />
                        <ResumeGroup kind=ResumeKind::Experience />
                    </div>
                    <div class="mt-8">
                        {match content.profile.cv_href.as_deref() {
                            Some(href) => {
                                Either::Left(
                                    view! {
                                        <a
                                            href=href
                                            download=""
                                            class="inline-block bubble-button wiggle w-full md:w-auto text-center"
                                        >
                                            "Download CV 📄"
                                        </a>
                                    },
                                )
                            }
                            None => {
                                Either::Right(
                                    view! {
                                        <button
                                            class="bubble-button wiggle w-full md:w-auto"
                                            disabled=true
                                        >
                                            "Download CV 📄"
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

#[component]
fn ResumeGroup(kind: ResumeKind) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-bold mb-2 text-[#118AB2]">{kind.heading()}</h3>
            <div class="space-y-4">
                {content()
                    .resume_entries(kind)
                    .enumerate()
                    .map(|(i, entry)| view! { <ResumeCard entry index=i /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ResumeCard(entry: &'static ResumeEntry, index: usize) -> impl IntoView {
    view! {
        <div
            class="bg-white rounded-lg p-4 border-4 border-black cartoon-shadow"
            style=tilt_style(&entry.title, index)
        >
            <div class="flex justify-between mb-1">
                <h4 class="font-bold text-lg">{entry.title.as_str()}</h4>
                <span class="text-[#FF6B6B] text-sm font-bold bg-[#FFD166] px-2 py-1 rounded-full border-2 border-black">
                    {entry.period.as_str()}
                </span>
            </div>
            <p class="text-md">{entry.summary.as_str()}</p>
        </div>
    }
}
