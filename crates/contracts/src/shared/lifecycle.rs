//! Timer-driven transitions of notification banners.
//!
//! The driver decides *what* is scheduled and *when*; the host decides how to wait.
//! The browser binding plugs in `gloo-timers`, tests plug in a manual clock.

use super::notification::{NotificationId, NotificationQueue, Severity, Timeline};
use std::cell::RefCell;
use std::rc::Rc;

/// One-shot delayed callbacks.
pub trait Timer {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Shared mutable access to the queue.
///
/// Returns `None` when the storage is gone (e.g. disposed after page teardown).
pub trait QueueCell {
    fn update<R>(&self, f: impl FnOnce(&mut NotificationQueue) -> R) -> Option<R>;
}

impl QueueCell for Rc<RefCell<NotificationQueue>> {
    fn update<R>(&self, f: impl FnOnce(&mut NotificationQueue) -> R) -> Option<R> {
        let mut queue = self.try_borrow_mut().ok()?;
        Some(f(&mut queue))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Lifecycle<Q, T> {
    queue: Q,
    timer: T,
    timeline: Timeline,
}

impl<Q, T> Lifecycle<Q, T>
where
    Q: QueueCell + Clone + 'static,
    T: Timer + Clone + 'static,
{
    pub fn new(queue: Q, timer: T, timeline: Timeline) -> Self {
        Self {
            queue,
            timer,
            timeline,
        }
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Pushes a banner on top and schedules its auto-expiry.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationId> {
        let message = message.into();
        let id = self.queue.update(|q| q.push(message, severity))?;

        let this = self.clone();
        self.timer
            .schedule(self.timeline.auto_dismiss_ms, Box::new(move || {
                this.dismiss(id);
            }));

        Some(id)
    }

    /// Starts the fade and schedules the detach. Only the first call on a shown
    /// banner acts; returns whether this call started the fade.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let started = self.queue.update(|q| q.begin_fade(id)).unwrap_or(false);
        if !started {
            return false;
        }

        let this = self.clone();
        self.timer
            .schedule(self.timeline.fade_ms, Box::new(move || this.finish(id)));
        true
    }

    fn finish(&self, id: NotificationId) {
        if let Some(Err(e)) = self.queue.update(|q| q.remove(id).map(|_| ())) {
            log::warn!("notification {}: {}", id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::Phase;

    struct Pending {
        due_ms: u64,
        seq: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now_ms: u64,
        seq: u64,
        scheduled: usize,
        pending: Vec<Pending>,
    }

    /// Runs scheduled tasks in due order when time is advanced by hand.
    #[derive(Clone, Default)]
    struct ManualClock(Rc<RefCell<ClockState>>);

    impl Timer for ManualClock {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            let mut state = self.0.borrow_mut();
            state.seq += 1;
            state.scheduled += 1;
            let pending = Pending {
                due_ms: state.now_ms + u64::from(delay_ms),
                seq: state.seq,
                task,
            };
            state.pending.push(pending);
        }
    }

    impl ManualClock {
        fn advance_to(&self, target_ms: u64) {
            loop {
                let next = {
                    let mut state = self.0.borrow_mut();
                    let index = state
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due_ms <= target_ms)
                        .min_by_key(|(_, p)| (p.due_ms, p.seq))
                        .map(|(i, _)| i);
                    index.map(|i| {
                        let pending = state.pending.remove(i);
                        state.now_ms = pending.due_ms;
                        pending.task
                    })
                };
                match next {
                    // borrow released: the task may schedule more work
                    Some(task) => task(),
                    None => break,
                }
            }
            self.0.borrow_mut().now_ms = target_ms;
        }

        fn scheduled(&self) -> usize {
            self.0.borrow().scheduled
        }
    }

    type TestLifecycle = Lifecycle<Rc<RefCell<NotificationQueue>>, ManualClock>;

    fn lifecycle() -> (TestLifecycle, ManualClock) {
        let clock = ManualClock::default();
        let queue = Rc::new(RefCell::new(NotificationQueue::new()));
        (Lifecycle::new(queue, clock.clone(), Timeline::default()), clock)
    }

    fn phase(lifecycle: &TestLifecycle, id: NotificationId) -> Phase {
        lifecycle.queue().borrow().phase(id)
    }

    #[test]
    fn test_undismissed_banner_removed_after_expiry_plus_fade() {
        let (lifecycle, clock) = lifecycle();
        let id = lifecycle.notify("saved", Severity::Info).unwrap();

        clock.advance_to(4_999);
        assert_eq!(phase(&lifecycle, id), Phase::Shown);

        clock.advance_to(5_000);
        assert_eq!(phase(&lifecycle, id), Phase::Fading);

        clock.advance_to(5_299);
        assert_eq!(phase(&lifecycle, id), Phase::Fading);
        assert_eq!(lifecycle.queue().borrow().len(), 1);

        clock.advance_to(5_300);
        assert_eq!(phase(&lifecycle, id), Phase::Removed);
        assert!(lifecycle.queue().borrow().is_empty());
    }

    #[test]
    fn test_manual_dismiss_then_late_expiry_removes_once() {
        let (lifecycle, clock) = lifecycle();
        let id = lifecycle.notify("closed by hand", Severity::Error).unwrap();
        assert_eq!(clock.scheduled(), 1);

        clock.advance_to(1_000);
        assert!(lifecycle.dismiss(id));
        assert!(!lifecycle.dismiss(id));
        assert_eq!(clock.scheduled(), 2);

        clock.advance_to(1_299);
        assert_eq!(phase(&lifecycle, id), Phase::Fading);
        clock.advance_to(1_300);
        assert_eq!(phase(&lifecycle, id), Phase::Removed);

        // the auto-expiry still fires at 5000 but starts no second fade
        clock.advance_to(6_000);
        assert_eq!(clock.scheduled(), 2);
        assert!(lifecycle.queue().borrow().is_empty());
    }

    #[test]
    fn test_dismiss_one_of_three() {
        let (lifecycle, clock) = lifecycle();
        let first = lifecycle.notify("one", Severity::Info).unwrap();
        clock.advance_to(100);
        let second = lifecycle.notify("two", Severity::Info).unwrap();
        clock.advance_to(200);
        let third = lifecycle.notify("three", Severity::Info).unwrap();

        lifecycle.dismiss(second);
        clock.advance_to(600);

        assert_eq!(lifecycle.queue().borrow().ids(), vec![third, first]);

        // each remaining banner keeps its own timer
        clock.advance_to(5_300);
        assert_eq!(phase(&lifecycle, first), Phase::Removed);
        assert_eq!(phase(&lifecycle, third), Phase::Fading);
        clock.advance_to(5_500);
        assert_eq!(phase(&lifecycle, third), Phase::Removed);
    }
}
