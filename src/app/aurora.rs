use leptos::prelude::*;

use super::adaptive::use_device_tier;
use crate::decor::{play_state, visible_layers, AURORA_BANDS, AURORA_BASE};
use crate::device::AURORA_BANDS as AURORA_BUDGET;

/// Drifting aurora bands behind the hero. Band count follows the device
/// tier; the bands freeze while the hero is off screen.
#[component]
pub fn Aurora(#[prop(into)] in_viewport: Signal<bool>) -> impl IntoView {
    let tier = use_device_tier();

    let bands = move || {
        visible_layers(&AURORA_BANDS, AURORA_BASE, AURORA_BUDGET, tier.get())
            .iter()
            .enumerate()
            .map(|(i, (from, to))| {
                let gradient = format!(
                    "background: linear-gradient(100deg, transparent, {from}, {to}, transparent); top: {}%; animation-delay: -{}s;",
                    10 + i * 12,
                    i * 3
                );
                view! {
                    <div
                        class="aurora-band"
                        style=move || {
                            format!(
                                "{gradient} animation-play-state: {};",
                                play_state(in_viewport.get()),
                            )
                        }
                    ></div>
                }
            })
            .collect_view()
    };

    view! { <div class="aurora absolute inset-0 pointer-events-none" aria-hidden="true">{bands}</div> }
}
