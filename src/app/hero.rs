use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use super::adaptive::{use_device_tier, use_in_viewport};
use super::aurora::Aurora;
use crate::content::PROFILE;
use crate::decor::{visible_layers, BALLOON_BASE, BALLOON_LAYERS, CLOUD_BASE, CLOUD_LAYERS};
use crate::device::{BALLOONS, CLOUDS};

#[component]
pub fn Hero() -> impl IntoView {
    let tier = use_device_tier();
    let section_ref = NodeRef::<html::Section>::new();
    let in_viewport = use_in_viewport(section_ref);
    let (_, scroll_y) = use_window_scroll();
    let profile = &*PROFILE;

    let clouds = move || {
        visible_layers(&CLOUD_LAYERS, CLOUD_BASE, CLOUDS, tier.get())
            .iter()
            .copied()
            .map(|sprite| {
                view! {
                    <div
                        class="cloud"
                        style=move || sprite.to_css(scroll_y.get(), in_viewport.get())
                    ></div>
                }
            })
            .collect_view()
    };
    let balloons = move || {
        visible_layers(&BALLOON_LAYERS, BALLOON_BASE, BALLOONS, tier.get())
            .iter()
            .copied()
            .enumerate()
            .map(|(i, sprite)| {
                view! {
                    <div
                        class=format!("balloon balloon-{}", i % 4)
                        style=move || sprite.to_css(scroll_y.get(), in_viewport.get())
                    >
                        <div class="balloon-envelope"></div>
                        <div class="balloon-basket"></div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="hero relative flex flex-col justify-center items-center min-h-screen overflow-hidden"
        >
            <Aurora in_viewport />
            <div class="sky absolute inset-0 pointer-events-none" aria-hidden="true">
                {clouds}
                {balloons}
            </div>
            <div class="relative z-10 max-w-3xl px-6 text-center section-content">
                <h1 class="font-bold text-4xl lg:text-6xl mb-4">{profile.name.as_str()}</h1>
                <p class="text-xl lg:text-2xl text-cyan mb-8">{profile.headline.as_str()}</p>
                {profile
                    .summary
                    .iter()
                    .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{p.as_str()}</p> })
                    .collect_view()}
                <p class="text-sm text-muted mt-6">"📍 " {profile.location.as_str()}</p>
            </div>
        </section>
    }
}
