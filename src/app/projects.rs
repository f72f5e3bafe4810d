use leptos::{html, prelude::*};

use super::adaptive::use_in_viewport;
use super::carousel::CarouselView;
use crate::carousel::SlidePolicy;
use crate::content::{Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let in_viewport = use_in_viewport(section_ref);

    view! {
        <section id="projects" node_ref=section_ref class="w-full max-w-5xl mx-auto py-16 px-4">
            <h2 class="text-3xl font-bold text-center mb-2 section-content">"Projects"</h2>
            <p class="text-center text-sm text-muted mb-10">"Use ← → or swipe to browse"</p>
            <CarouselView
                items=PROJECTS.as_slice()
                policy=SlidePolicy::Projects
                label="Projects"
                in_viewport
                keyboard=true
                render=|project: &'static Project| view! { <ProjectCard project /> }.into_any()
            />
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card rounded-lg overflow-hidden border border-muted/30 bg-brightBlack/30">
            <div class="h-24" style=project.accent.to_css()></div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title.as_str()}</h3>
                <p class="text-base mb-4 leading-relaxed">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">{t.as_str()}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm">
                    {project
                        .repo
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="text-blue hover:text-brightBlue">
                                    "Source"
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="text-green hover:text-brightGreen">
                                    "Live demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
