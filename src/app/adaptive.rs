use leptos::{html, prelude::*};

use crate::device::DeviceTier;

#[cfg(feature = "hydrate")]
use crate::device::DeviceProfile;
#[cfg(feature = "hydrate")]
use crate::viewport::{FrameScheduler, Intersection, Subscription, VisibilityPort, VisibilityTracker};

#[derive(Debug, Clone, Copy)]
struct TierContext(ReadSignal<DeviceTier>);

/// Classifies the device once on mount and shares the tier with every
/// section below.
pub fn provide_device_tier() {
    let (tier, set_tier) = signal(DeviceTier::fallback());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| match probe_device() {
        Some(profile) => {
            let t = profile.tier();
            log::info!("device tier {} from {profile:?}", t.as_str());
            set_tier.set(t);
        }
        None => log::warn!("couldn't probe device, keeping {} tier", DeviceTier::fallback().as_str()),
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_tier;

    provide_context(TierContext(tier));
}

pub fn use_device_tier() -> ReadSignal<DeviceTier> {
    expect_context::<TierContext>().0
}

/// Whether `target` is far enough on screen to keep its animations running.
///
/// Starts out visible so server-rendered markup animates until the first
/// observation says otherwise.
pub fn use_in_viewport(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        // the subscription owns the tracker; dropping it cancels any queued frame
        let slot = StoredValue::new_local(None::<Subscription>);
        let release = move || {
            slot.try_update_value(|s| {
                if let Some(sub) = s.take() {
                    sub.unsubscribe();
                }
            });
        };

        Effect::new(move |_| {
            let Some(el) = target.get() else {
                return;
            };
            release();
            let current = visible.get_untracked();
            let tracker = VisibilityTracker::new(RafFrames, current, move |v| {
                let _ = set_visible.try_set(v);
            });
            slot.set_value(Some(tracker.attach(&ElementPort(el.into()))));
        });
        on_cleanup(release);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, set_visible);

    visible
}

#[cfg(feature = "hydrate")]
fn probe_device() -> Option<DeviceProfile> {
    let window = web_sys::window()?;
    let cores = window.navigator().hardware_concurrency();
    let cores = (cores.is_finite() && cores >= 1.0).then_some(cores as u32);
    let reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|m| m.matches());
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY);
    Some(DeviceProfile {
        cores,
        pixel_ratio: window.device_pixel_ratio(),
        reduced_motion,
        width,
    })
}

/// Animation-frame scheduler backed by `requestAnimationFrame`.
#[cfg(feature = "hydrate")]
struct RafFrames;

#[cfg(feature = "hydrate")]
impl FrameScheduler for RafFrames {
    type Handle = AnimationFrameRequestHandle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Handle> {
        request_animation_frame_with_handle(callback).ok()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

/// Intersection observer watching a single element.
#[cfg(feature = "hydrate")]
struct ElementPort(web_sys::Element);

#[cfg(feature = "hydrate")]
impl VisibilityPort for ElementPort {
    fn subscribe(&self, mut callback: Box<dyn FnMut(Intersection)>) -> Subscription {
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    callback(Intersection {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        let thresholds = [0.0, 0.1, 0.2, 0.5]
            .into_iter()
            .map(JsValue::from_f64)
            .collect::<js_sys::Array>();
        options.set_threshold(&thresholds);

        let observer = match IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("intersection observer unavailable, treating section as visible: {e:?}");
                return Subscription::noop();
            }
        };
        observer.observe(&self.0);

        Subscription::new(move || {
            observer.disconnect();
            drop(closure);
        })
    }
}
