use leptos::prelude::*;

use crate::content::SKILLS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="w-full max-w-5xl mx-auto py-16 px-4">
            <h2 class="text-3xl font-bold text-center mb-10 section-content">"Skills"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="p-4 rounded-md bg-brightBlack/30 border border-muted/30">
                                <h3 class="font-bold text-cyan mb-3">{group.name.as_str()}</h3>
                                <ul class="text-sm space-y-1">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|s| view! { <li>{s.as_str()}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
