//! Viewport visibility tracking with per-frame coalescing.
//!
//! Intersection notifications can arrive in bursts while the page scrolls.
//! [`VisibilityTracker`] keeps a single pending-update slot: a change cancels
//! whatever frame is already queued and queues one new commit, so the value
//! observed last before the next paint is the only one that lands.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Fraction of a section that has to be on screen before it counts as visible.
pub const VISIBILITY_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn is_visible(&self) -> bool {
        self.is_intersecting && self.ratio > VISIBILITY_RATIO
    }
}

/// Source of intersection notifications for one observed element.
pub trait VisibilityPort {
    fn subscribe(&self, callback: Box<dyn FnMut(Intersection)>) -> Subscription;
}

/// Live subscription to a [`VisibilityPort`]. Teardown runs on
/// [`unsubscribe`](Self::unsubscribe) or drop, whichever comes first.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down, for ports that never fire.
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    pub fn unsubscribe(mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// Schedules work for the next animation frame.
pub trait FrameScheduler {
    type Handle;

    /// Queues `callback`. `None` means no frame could be requested; the
    /// caller should run the work itself.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

struct TrackerState<S: FrameScheduler> {
    scheduler: S,
    recorded: Cell<bool>,
    committed: Cell<bool>,
    pending: RefCell<Option<S::Handle>>,
    on_commit: RefCell<Box<dyn FnMut(bool)>>,
}

impl<S: FrameScheduler> TrackerState<S> {
    fn commit(&self, visible: bool) {
        self.pending.borrow_mut().take();
        if self.committed.replace(visible) != visible {
            log::debug!("viewport visibility committed: {visible}");
            (self.on_commit.borrow_mut())(visible);
        }
    }

    fn cancel_pending(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }
}

// queued frames only hold a weak reference, so this runs once the last
// tracker handle goes away
impl<S: FrameScheduler> Drop for TrackerState<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Cheap to clone; every clone shares the same pending slot. Dropping the
/// last clone cancels any frame still queued.
pub struct VisibilityTracker<S: FrameScheduler> {
    state: Rc<TrackerState<S>>,
}

impl<S: FrameScheduler> Clone for VisibilityTracker<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<S> VisibilityTracker<S>
where
    S: FrameScheduler + 'static,
{
    pub fn new(scheduler: S, initial: bool, on_commit: impl FnMut(bool) + 'static) -> Self {
        Self {
            state: Rc::new(TrackerState {
                scheduler,
                recorded: Cell::new(initial),
                committed: Cell::new(initial),
                pending: RefCell::new(None),
                on_commit: RefCell::new(Box::new(on_commit)),
            }),
        }
    }

    pub fn observe(&self, intersection: Intersection) {
        let next = intersection.is_visible();
        if self.state.recorded.get() == next {
            return;
        }
        self.state.recorded.set(next);
        self.cancel_pending();

        let state = Rc::downgrade(&self.state);
        let commit = move || {
            if let Some(state) = state.upgrade() {
                state.commit(next);
            }
        };
        match self.state.scheduler.request(Box::new(commit)) {
            Some(handle) => *self.state.pending.borrow_mut() = Some(handle),
            None => self.state.commit(next),
        }
    }

    /// Feeds `port` into this tracker. Tearing down the returned
    /// subscription also cancels any frame still queued.
    pub fn attach(&self, port: &impl VisibilityPort) -> Subscription {
        let tracker = self.clone();
        let inner = port.subscribe(Box::new(move |intersection| tracker.observe(intersection)));
        let state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            inner.unsubscribe();
            if let Some(state) = state.upgrade() {
                state.cancel_pending();
            }
        })
    }

    pub fn cancel_pending(&self) {
        self.state.cancel_pending();
    }

    pub fn committed(&self) -> bool {
        self.state.committed.get()
    }

    pub fn has_pending(&self) -> bool {
        self.state.pending.borrow().is_some()
    }
}

/// Frame scheduler that only runs queued work when told to.
#[derive(Default)]
pub struct ManualFrames {
    next_id: Cell<u64>,
    queue: RefCell<VecDeque<(u64, Box<dyn FnOnce()>)>>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs everything queued so far, like a single painted frame.
    pub fn flush(&self) {
        let batch = std::mem::take(&mut *self.queue.borrow_mut());
        for (_, callback) in batch {
            callback();
        }
    }
}

impl FrameScheduler for ManualFrames {
    type Handle = u64;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<u64> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push_back((id, callback));
        Some(id)
    }

    fn cancel(&self, handle: u64) {
        self.queue.borrow_mut().retain(|(id, _)| *id != handle);
    }
}

impl<T: FrameScheduler> FrameScheduler for Rc<T> {
    type Handle = T::Handle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Handle> {
        (**self).request(callback)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOWN: Intersection = Intersection {
        is_intersecting: true,
        ratio: 0.5,
    };
    const HIDDEN: Intersection = Intersection {
        is_intersecting: false,
        ratio: 0.0,
    };

    fn recording_tracker(
        initial: bool,
    ) -> (Rc<ManualFrames>, VisibilityTracker<Rc<ManualFrames>>, Rc<RefCell<Vec<bool>>>) {
        let frames = Rc::new(ManualFrames::new());
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let tracker = VisibilityTracker::new(Rc::clone(&frames), initial, move |v| {
            sink.borrow_mut().push(v)
        });
        (frames, tracker, commits)
    }

    struct FakePort {
        callbacks: Rc<RefCell<Vec<Box<dyn FnMut(Intersection)>>>>,
        unsubscribed: Rc<Cell<bool>>,
    }

    impl FakePort {
        fn new() -> Self {
            Self {
                callbacks: Rc::new(RefCell::new(Vec::new())),
                unsubscribed: Rc::new(Cell::new(false)),
            }
        }

        fn fire(&self, intersection: Intersection) {
            for cb in self.callbacks.borrow_mut().iter_mut() {
                cb(intersection);
            }
        }
    }

    impl VisibilityPort for FakePort {
        fn subscribe(&self, callback: Box<dyn FnMut(Intersection)>) -> Subscription {
            self.callbacks.borrow_mut().push(callback);
            let callbacks = Rc::clone(&self.callbacks);
            let unsubscribed = Rc::clone(&self.unsubscribed);
            Subscription::new(move || {
                callbacks.borrow_mut().clear();
                unsubscribed.set(true);
            })
        }
    }

    struct NoFrames;

    impl FrameScheduler for NoFrames {
        type Handle = ();

        fn request(&self, _callback: Box<dyn FnOnce()>) -> Option<()> {
            None
        }

        fn cancel(&self, _handle: ()) {}
    }

    #[test]
    fn test_visibility_ratio() {
        assert!(SHOWN.is_visible());
        assert!(!HIDDEN.is_visible());
        let sliver = Intersection {
            is_intersecting: true,
            ratio: 0.1,
        };
        assert!(!sliver.is_visible());
    }

    #[test]
    fn test_rapid_changes_coalesce_into_one_commit() {
        let (frames, tracker, commits) = recording_tracker(false);
        tracker.observe(SHOWN);
        tracker.observe(HIDDEN);
        tracker.observe(SHOWN);
        assert_eq!(frames.queued(), 1);
        assert!(commits.borrow().is_empty());

        frames.flush();
        assert_eq!(*commits.borrow(), vec![true]);
        assert!(tracker.committed());
        assert!(!tracker.has_pending());
    }

    #[test]
    fn test_repeated_value_schedules_nothing() {
        let (frames, tracker, commits) = recording_tracker(true);
        tracker.observe(SHOWN);
        tracker.observe(SHOWN);
        assert_eq!(frames.queued(), 0);
        frames.flush();
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn test_net_unchanged_burst_does_not_commit() {
        let (frames, tracker, commits) = recording_tracker(true);
        tracker.observe(HIDDEN);
        tracker.observe(SHOWN);
        frames.flush();
        assert!(commits.borrow().is_empty());
        assert!(tracker.committed());
    }

    #[test]
    fn test_one_commit_per_frame() {
        let (frames, tracker, commits) = recording_tracker(true);
        tracker.observe(HIDDEN);
        frames.flush();
        tracker.observe(SHOWN);
        frames.flush();
        assert_eq!(*commits.borrow(), vec![false, true]);
    }

    #[test]
    fn test_cancel_pending_drops_update() {
        let (frames, tracker, commits) = recording_tracker(true);
        tracker.observe(HIDDEN);
        assert!(tracker.has_pending());
        tracker.cancel_pending();
        frames.flush();
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn test_commits_inline_without_frames() {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let tracker = VisibilityTracker::new(NoFrames, true, move |v| sink.borrow_mut().push(v));
        tracker.observe(HIDDEN);
        assert_eq!(*commits.borrow(), vec![false]);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn test_attach_and_unsubscribe() {
        let (frames, tracker, commits) = recording_tracker(true);
        let port = FakePort::new();
        let sub = tracker.attach(&port);

        port.fire(HIDDEN);
        frames.flush();
        assert_eq!(*commits.borrow(), vec![false]);

        sub.unsubscribe();
        assert!(port.unsubscribed.get());
        port.fire(SHOWN);
        frames.flush();
        assert_eq!(*commits.borrow(), vec![false]);
    }

    #[test]
    fn test_replacement_tracker_starts_from_current_value() {
        // a section already committed as hidden, re-observed by a fresh tracker
        let (frames, stale, stale_commits) = recording_tracker(true);
        stale.observe(SHOWN);
        frames.flush();
        assert!(stale_commits.borrow().is_empty());

        let (frames, seeded, commits) = recording_tracker(false);
        seeded.observe(SHOWN);
        assert_eq!(frames.queued(), 1);
        frames.flush();
        assert_eq!(*commits.borrow(), vec![true]);
    }

    #[test]
    fn test_dropping_tracker_cancels_queued_frame() {
        let (frames, tracker, commits) = recording_tracker(true);
        tracker.observe(HIDDEN);
        assert_eq!(frames.queued(), 1);

        drop(tracker);
        assert_eq!(frames.queued(), 0);
        frames.flush();
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_cancels_queued_frame() {
        let (frames, tracker, commits) = recording_tracker(true);
        let port = FakePort::new();
        let sub = tracker.attach(&port);
        port.fire(HIDDEN);
        assert_eq!(frames.queued(), 1);

        sub.unsubscribe();
        assert_eq!(frames.queued(), 0);
        assert!(!tracker.has_pending());
        frames.flush();
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn test_attached_tracker_outlives_local_handle() {
        let (frames, tracker, commits) = recording_tracker(true);
        let port = FakePort::new();
        let sub = tracker.attach(&port);
        drop(tracker);

        port.fire(HIDDEN);
        frames.flush();
        assert_eq!(*commits.borrow(), vec![false]);

        drop(sub);
        assert!(port.unsubscribed.get());
        assert_eq!(frames.queued(), 0);
    }

    #[test]
    fn test_dropping_subscription_tears_down() {
        let (_frames, tracker, _commits) = recording_tracker(true);
        let port = FakePort::new();
        {
            let _sub = tracker.attach(&port);
        }
        assert!(port.unsubscribed.get());
    }
}
