//! Repeating timer abstraction used by the widget attacher
//!
//! The browser build drives polling with `setInterval`; tests drive it with
//! [`ManualTimer`], a virtual clock that only moves when told to.

use std::rc::Rc;
use std::time::Duration;

/// Handle to a running repeating timer.
pub trait TimerHandle {
    /// Stop the timer. Idempotent, and safe to call from inside the tick itself.
    fn cancel(&self);

    /// Whether `cancel` has been called
    fn is_cancelled(&self) -> bool;
}

/// Something that can call a closure on a fixed period.
pub trait PollTimer {
    type Handle: TimerHandle + 'static;

    /// Call `tick` every `period` until the returned handle is cancelled.
    /// The first call happens one full period after scheduling.
    fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> Self::Handle;
}

#[cfg(test)]
pub use manual::{ManualHandle, ManualTimer};

#[cfg(test)]
mod manual {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Entry {
        period_ms: u64,
        next_due: u64,
        tick: Rc<dyn Fn()>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        entries: Vec<Entry>,
    }

    /// Virtual-time timer for tests.
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(&self) {
            self.cancelled.set(true);
        }

        fn is_cancelled(&self) -> bool {
            self.cancelled.get()
        }
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Current virtual time in milliseconds
        pub fn now(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        /// Number of timers that have not been cancelled
        pub fn active_timers(&self) -> usize {
            self.clock
                .borrow()
                .entries
                .iter()
                .filter(|e| !e.cancelled.get())
                .count()
        }

        /// Move the clock forward, firing every due tick in time order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;

            loop {
                let next = {
                    let clock = self.clock.borrow();
                    clock
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| !e.cancelled.get() && e.next_due <= target)
                        .min_by_key(|(i, e)| (e.next_due, *i))
                        .map(|(i, _)| i)
                };

                let Some(idx) = next else { break };

                // Release the borrow before running the tick: ticks may schedule or cancel.
                let tick = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock.entries[idx].next_due;
                    clock.now_ms = due;
                    let entry = &mut clock.entries[idx];
                    entry.next_due += entry.period_ms;
                    entry.tick.clone()
                };
                tick();
            }

            self.clock.borrow_mut().now_ms = target;
        }
    }

    impl PollTimer for ManualTimer {
        type Handle = ManualHandle;

        fn every(&self, period: Duration, tick: Rc<dyn Fn()>) -> ManualHandle {
            let period_ms = (period.as_millis() as u64).max(1);
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let next_due = clock.now_ms + period_ms;
            clock.entries.push(Entry {
                period_ms,
                next_due,
                tick,
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_manual_timer_fires_on_period() {
        let timer = ManualTimer::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = fired.clone();
        let clock = timer.clone();
        let _handle = timer.every(
            Duration::from_millis(100),
            Rc::new(move || log.borrow_mut().push(clock.now())),
        );

        timer.advance(99);
        assert!(fired.borrow().is_empty());

        timer.advance(251);
        assert_eq!(*fired.borrow(), vec![100, 200, 300]);
        assert_eq!(timer.now(), 350);
    }

    #[test]
    fn test_manual_timer_cancel_stops_ticks() {
        let timer = ManualTimer::new();
        let count = Rc::new(RefCell::new(0));

        let c = count.clone();
        let handle = timer.every(
            Duration::from_millis(50),
            Rc::new(move || *c.borrow_mut() += 1),
        );

        timer.advance(100);
        handle.cancel();
        assert!(handle.is_cancelled());
        timer.advance(1000);

        assert_eq!(*count.borrow(), 2);
        assert_eq!(timer.active_timers(), 0);
    }

    #[test]
    fn test_manual_timer_interleaves_timers() {
        let timer = ManualTimer::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let a = order.clone();
        let _fast = timer.every(
            Duration::from_millis(30),
            Rc::new(move || a.borrow_mut().push("fast")),
        );
        let b = order.clone();
        let _slow = timer.every(
            Duration::from_millis(50),
            Rc::new(move || b.borrow_mut().push("slow")),
        );

        timer.advance(100);
        assert_eq!(*order.borrow(), vec!["fast", "slow", "fast", "fast", "slow"]);
    }
}
