use std::time::Duration;

use leptos::{ev, html, prelude::*};

use crate::carousel::{Carousel, Key, SlidePolicy};

/// Slide deck shared by the Experience and Projects sections.
///
/// Every slide stays mounted; only its inline style follows the focused
/// index, except where the policy says a slide shouldn't render at all.
#[component]
pub fn CarouselView<T, F>(
    items: &'static [T],
    policy: SlidePolicy,
    render: F,
    label: &'static str,
    #[prop(into)] in_viewport: Signal<bool>,
    /// Listen for arrow keys on the window while mounted.
    #[prop(optional)]
    keyboard: bool,
    #[prop(optional)] autoplay: Option<Duration>,
) -> impl IntoView
where
    T: Sync + 'static,
    F: Fn(&'static T) -> AnyView + Clone + Send + Sync + 'static,
{
    let carousel = match Carousel::new(items.len()) {
        Ok(c) => RwSignal::new(c),
        Err(e) => {
            log::warn!("{label}: {e}");
            return view! { <p class="text-center text-muted">"Nothing here yet."</p> }.into_any();
        }
    };
    let track_ref = NodeRef::<html::Div>::new();

    if keyboard {
        let handle = window_event_listener(ev::keydown, move |ev| {
            carousel.update(|c| {
                c.handle_key(Key::from(ev.key().as_str()));
            });
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "hydrate")]
    if let Some(every) = autoplay {
        match set_interval_with_handle(
            move || {
                let held =
                    !in_viewport.get_untracked() || carousel.with_untracked(|c| c.is_paused());
                if !held {
                    carousel.update(|c| c.next());
                }
            },
            every,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("{label}: autoplay disabled: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = autoplay;

    let slides = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let render = render.clone();
            let style = Memo::new(move |_| carousel.with(|c| policy.style(c.placement(i))));
            view! {
                <div
                    class="carousel-slide"
                    style=move || style.with(|s| s.to_css())
                    aria-hidden=move || (!style.with(|s| s.interactive)).to_string()
                >
                    {move || style.with(|s| s.rendered).then(|| render(item))}
                </div>
            }
        })
        .collect_view();

    let dots = (0..items.len())
        .map(|i| {
            view! {
                <button
                    class="carousel-dot"
                    class:active=move || carousel.with(|c| c.focused() == i)
                    aria-label=format!("Show slide {}", i + 1)
                    on:click=move |_| carousel.update(|c| c.go_to(i))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div
            class="carousel"
            role="region"
            aria-label=label
            class:paused=move || !in_viewport.get()
            on:mouseenter=move |_| carousel.update(|c| c.set_hovered(true))
            on:mouseleave=move |_| carousel.update(|c| c.set_hovered(false))
        >
            <div
                node_ref=track_ref
                class="carousel-track"
                class:dragging=move || carousel.with(|c| c.is_dragging())
                on:pointerdown=move |ev: ev::PointerEvent| {
                    // keep receiving the gesture after the pointer leaves the track
                    if let Some(track) = track_ref.get_untracked() {
                        if let Err(e) = track.set_pointer_capture(ev.pointer_id()) {
                            log::debug!("{label}: pointer capture refused: {e:?}");
                        }
                    }
                    carousel.update(|c| c.drag_start(ev.client_x() as f64))
                }
                on:pointerup=move |ev: ev::PointerEvent| {
                    carousel.update(|c| {
                        c.drag_end(ev.client_x() as f64);
                    })
                }
                on:lostpointercapture=move |_| carousel.update(|c| c.drag_cancel())
                on:pointercancel=move |_| carousel.update(|c| c.drag_cancel())
            >
                {slides}
            </div>
            <div class="carousel-controls">
                <button
                    class="carousel-arrow"
                    aria-label="Previous"
                    on:click=move |_| carousel.update(|c| c.prev())
                >
                    "‹"
                </button>
                <div class="flex gap-2">{dots}</div>
                <button
                    class="carousel-arrow"
                    aria-label="Next"
                    on:click=move |_| carousel.update(|c| c.next())
                >
                    "›"
                </button>
            </div>
        </div>
    }
    .into_any()
}
