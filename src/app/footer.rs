use chrono::DateTime;
use leptos::{html, prelude::*};
use leptos_use::{use_clipboard, UseClipboardReturn};

use super::adaptive::{use_device_tier, use_in_viewport};
use crate::content::PROFILE;
use crate::decor::{visible_layers, BUBBLE_BASE, BUBBLE_LAYERS};
use crate::device::BUBBLES;

fn build_date() -> String {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%b %e %Y").to_string())
        .unwrap_or_default()
}

/// Underwater scene closing the page, with the contact details.
#[component]
pub fn Footer() -> impl IntoView {
    let tier = use_device_tier();
    let section_ref = NodeRef::<html::Section>::new();
    let in_viewport = use_in_viewport(section_ref);
    let profile = &*PROFILE;

    // a rejected clipboard write just never flips `copied`
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();

    let bubbles = move || {
        visible_layers(&BUBBLE_LAYERS, BUBBLE_BASE, BUBBLES, tier.get())
            .iter()
            .copied()
            .map(|sprite| {
                view! { <span class="bubble" style=move || sprite.to_css(0.0, in_viewport.get())></span> }
            })
            .collect_view()
    };

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="underwater relative w-full mt-16 pt-24 pb-10 overflow-hidden"
        >
            <div class="waves absolute inset-x-0 top-0 pointer-events-none" aria-hidden="true"></div>
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                {bubbles}
            </div>
            <div class="relative z-10 max-w-2xl mx-auto text-center px-4">
                <h2 class="text-3xl font-bold mb-4">"Let's Connect"</h2>
                <p class="mb-6">"Open to collaboration, interesting problems and good conversation."</p>
                <button
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    disabled=move || !is_supported.get()
                    on:click=move |_| copy(&profile.email)
                >
                    {move || {
                        if copied.get() {
                            "📋 Copied!".to_string()
                        } else {
                            format!("📧 {}", profile.email)
                        }
                    }}
                </button>
                <div class="flex justify-center gap-4 mt-6">
                    {profile
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue hover:text-brightBlue"
                                >
                                    {link.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-xs text-muted mt-10">
                    "Built with Rust and Leptos · last deployed " {build_date()}
                </p>
            </div>
        </section>
    }
}
