use std::time::Duration;

use leptos::{html, prelude::*};

use super::adaptive::use_in_viewport;
use super::carousel::CarouselView;
use crate::carousel::SlidePolicy;
use crate::content::{ExperienceEntry, EXPERIENCE};

const AUTOPLAY_EVERY: Duration = Duration::from_secs(8);

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let in_viewport = use_in_viewport(section_ref);

    view! {
        <section id="experience" node_ref=section_ref class="w-full max-w-5xl mx-auto py-16 px-4">
            <h2 class="text-3xl font-bold text-center mb-10 section-content">"Experience"</h2>
            <CarouselView
                items=EXPERIENCE.as_slice()
                policy=SlidePolicy::Experience
                label="Experience"
                in_viewport
                autoplay=AUTOPLAY_EVERY
                render=|entry: &'static ExperienceEntry| view! { <ExperienceCard entry /> }.into_any()
            />
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <article class="card p-6 rounded-lg border border-muted/30 bg-brightBlack/30">
            <header class="mb-4">
                <h3 class="text-xl font-bold">{entry.role.as_str()}</h3>
                <div class="flex flex-wrap justify-between text-sm">
                    <span class="text-cyan font-medium">{entry.company.as_str()}</span>
                    <span class="text-muted">{entry.period()}</span>
                </div>
            </header>
            <ul class="list-disc pl-5 space-y-2 text-base">
                {entry
                    .highlights
                    .iter()
                    .map(|h| view! { <li>{h.as_str()}</li> })
                    .collect_view()}
            </ul>
            <div class="mt-4 flex flex-wrap gap-2">
                {entry
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">{t.as_str()}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
