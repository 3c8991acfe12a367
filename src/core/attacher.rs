//! External widget attachment with bounded retry
//!
//! Third-party embeds (booking calendars, newsletter forms, social posts) are loaded by
//! scripts that finish at some unknown point after the page hydrates. A
//! [`WidgetAttacher`] polls until both its container element and the vendor global
//! are present, calls the vendor render entry point once, and gives up quietly when
//! the attempt budget runs out.
//!
//! [`AttachSession`] ties an attacher to a [`PollTimer`] and tears everything down
//! when dropped, which is how components hook it into their cleanup.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::WidgetError;
use super::timer::{PollTimer, TimerHandle};

/// Polling interval and attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachPolicy {
    /// Milliseconds between readiness checks
    pub interval_ms: u32,
    /// Checks performed before giving up
    pub max_attempts: u32,
}

impl AttachPolicy {
    pub const DEFAULT_INTERVAL_MS: u32 = 100;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
    /// Longest delay `setInterval` accepts without wrapping
    pub const MAX_INTERVAL_MS: u32 = i32::MAX as u32;

    /// Create a policy. Zero values are raised to one, intervals capped at
    /// [`Self::MAX_INTERVAL_MS`].
    pub fn new(interval_ms: u32, max_attempts: u32) -> Self {
        Self {
            interval_ms: interval_ms.clamp(1, Self::MAX_INTERVAL_MS),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms as u64)
    }

    /// Total time spent polling before giving up
    pub fn budget(&self) -> Duration {
        self.interval() * self.max_attempts
    }
}

impl Default for AttachPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS, Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// Lifecycle of one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttachState {
    #[display("idle")]
    Idle,
    #[display("polling")]
    Polling,
    #[display("attached")]
    Attached,
    #[display("gave up")]
    GaveUp,
    #[display("cancelled")]
    Cancelled,
}

impl AttachState {
    /// No further ticks can change this state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AttachState::Attached | AttachState::GaveUp | AttachState::Cancelled
        )
    }
}

/// The page-side collaborator of an attacher: a container and a vendor API.
///
/// Implementations must only read the vendor global in `vendor_ready`; the single
/// write-like call is `render`.
pub trait WidgetHost {
    /// Short human readable name for log lines
    fn describe(&self) -> String;

    /// The target container currently resolves in the document
    fn container_ready(&self) -> bool;

    /// The vendor global exists and exposes its render entry point
    fn vendor_ready(&self) -> bool;

    /// Invoke the vendor render entry point for the container
    fn render(&self) -> Result<(), WidgetError>;

    /// Remove whatever the vendor put into the container
    fn clear_container(&self);
}

/// Bounded-retry attachment state machine.
///
/// All state lives in `Cell`s so a tick that re-enters from inside the vendor call
/// sees the guard flag that was set before the call.
pub struct WidgetAttacher<H> {
    host: H,
    policy: AttachPolicy,
    state: Cell<AttachState>,
    attempts: Cell<u32>,
    rendered: Cell<bool>,
}

impl<H: WidgetHost> WidgetAttacher<H> {
    pub fn new(host: H, policy: AttachPolicy) -> Self {
        Self {
            host,
            policy: AttachPolicy::new(policy.interval_ms, policy.max_attempts),
            state: Cell::new(AttachState::Idle),
            attempts: Cell::new(0),
            rendered: Cell::new(false),
        }
    }

    /// Move from `Idle` to `Polling`. Any other state is left alone.
    pub fn start(&self) -> AttachState {
        if self.state.get() == AttachState::Idle {
            self.state.set(AttachState::Polling);
        }
        self.state.get()
    }

    /// One readiness check.
    pub fn tick(&self) -> AttachState {
        if self.state.get() != AttachState::Polling || self.rendered.get() {
            return self.state.get();
        }

        let attempt = self.attempts.get() + 1;
        self.attempts.set(attempt);

        if self.host.container_ready() && self.host.vendor_ready() {
            // Guard goes up before the vendor call so nothing can render twice.
            self.rendered.set(true);
            self.state.set(AttachState::Attached);

            match self.host.render() {
                Ok(()) => leptos::logging::log!(
                    "[widget] {} attached after {} attempt(s)",
                    self.host.describe(),
                    attempt
                ),
                Err(err) => {
                    leptos::logging::warn!("[widget] {}: {}", self.host.describe(), err)
                }
            }
            return self.state.get();
        }

        if attempt >= self.policy.max_attempts {
            self.state.set(AttachState::GaveUp);
            leptos::logging::warn!(
                "[widget] {} not ready after {} attempts, giving up",
                self.host.describe(),
                attempt
            );
        }

        self.state.get()
    }

    /// Cancel, reset the guard and empty the container. Safe to call repeatedly.
    pub fn teardown(&self) {
        self.state.set(AttachState::Cancelled);
        self.rendered.set(false);
        self.host.clear_container();
    }

    pub fn state(&self) -> AttachState {
        self.state.get()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.get()
    }

    pub fn policy(&self) -> AttachPolicy {
        self.policy
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// A running attachment: attacher plus the timer driving it.
///
/// Dropping the session cancels the timer and tears the attacher down.
pub struct AttachSession<H: WidgetHost + 'static, T: PollTimer + 'static> {
    attacher: Rc<WidgetAttacher<H>>,
    handle: Rc<RefCell<Option<T::Handle>>>,
}

impl<H: WidgetHost + 'static, T: PollTimer + 'static> AttachSession<H, T> {
    /// Begin polling on `timer` according to `policy`.
    pub fn start(host: H, timer: &T, policy: AttachPolicy) -> Self {
        let attacher = Rc::new(WidgetAttacher::new(host, policy));
        attacher.start();

        let handle: Rc<RefCell<Option<T::Handle>>> = Rc::new(RefCell::new(None));

        // Weak references only: the browser timer owns this closure and the
        // session owns the timer.
        let weak_attacher: Weak<WidgetAttacher<H>> = Rc::downgrade(&attacher);
        let weak_handle = Rc::downgrade(&handle);
        let tick: Rc<dyn Fn()> = Rc::new(move || {
            let Some(attacher) = weak_attacher.upgrade() else {
                return;
            };
            if attacher.tick().is_terminal() {
                stop_timer::<T>(&weak_handle);
            }
        });

        let timer_handle = timer.every(attacher.policy().interval(), tick);
        *handle.borrow_mut() = Some(timer_handle);

        Self { attacher, handle }
    }

    pub fn state(&self) -> AttachState {
        self.attacher.state()
    }

    pub fn attacher(&self) -> &Rc<WidgetAttacher<H>> {
        &self.attacher
    }

    /// Stop polling and clean up now instead of waiting for drop.
    pub fn teardown(&self) {
        if let Ok(slot) = self.handle.try_borrow() {
            if let Some(handle) = slot.as_ref() {
                handle.cancel();
            }
        }
        self.attacher.teardown();
    }
}

impl<H: WidgetHost + 'static, T: PollTimer + 'static> Drop for AttachSession<H, T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn stop_timer<T: PollTimer>(slot: &Weak<RefCell<Option<T::Handle>>>) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    if let Ok(slot) = slot.try_borrow() {
        if let Some(handle) = slot.as_ref() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::ManualTimer;

    /// Simulated page: when the container and vendor global appear, what got rendered.
    #[derive(Default)]
    struct FakePage {
        container_from: Cell<Option<u64>>,
        vendor_from: Cell<Option<u64>>,
        renders: RefCell<Vec<u64>>,
        children: Cell<u32>,
        clears: Cell<u32>,
        fail_render: Cell<bool>,
        on_render: RefCell<Option<Box<dyn Fn()>>>,
    }

    struct FakeHost {
        page: Rc<FakePage>,
        clock: ManualTimer,
    }

    impl WidgetHost for FakeHost {
        fn describe(&self) -> String {
            "#sender-form-ABC123".to_string()
        }

        fn container_ready(&self) -> bool {
            self.page
                .container_from
                .get()
                .is_some_and(|t| self.clock.now() >= t)
        }

        fn vendor_ready(&self) -> bool {
            self.page
                .vendor_from
                .get()
                .is_some_and(|t| self.clock.now() >= t)
        }

        fn render(&self) -> Result<(), WidgetError> {
            self.page.renders.borrow_mut().push(self.clock.now());
            if let Some(hook) = self.page.on_render.borrow().as_ref() {
                hook();
            }
            if self.page.fail_render.get() {
                return Err(WidgetError::Render("form not found".into()));
            }
            self.page.children.set(self.page.children.get() + 1);
            Ok(())
        }

        fn clear_container(&self) {
            self.page.clears.set(self.page.clears.get() + 1);
            self.page.children.set(0);
        }
    }

    fn setup(
        container_from: Option<u64>,
        vendor_from: Option<u64>,
    ) -> (ManualTimer, Rc<FakePage>, AttachSession<FakeHost, ManualTimer>) {
        let timer = ManualTimer::new();
        let page = Rc::new(FakePage::default());
        page.container_from.set(container_from);
        page.vendor_from.set(vendor_from);
        let host = FakeHost {
            page: page.clone(),
            clock: timer.clone(),
        };
        let session = AttachSession::start(host, &timer, AttachPolicy::default());
        (timer, page, session)
    }

    #[test]
    fn test_policy_defaults() {
        let policy = AttachPolicy::default();
        assert_eq!(policy.interval(), Duration::from_millis(100));
        assert_eq!(policy.max_attempts, 100);
        assert_eq!(policy.budget(), Duration::from_secs(10));
    }

    #[test]
    fn test_policy_clamps_zero() {
        let policy = AttachPolicy::new(0, 0);
        assert_eq!(policy.interval_ms, 1);
        assert_eq!(policy.max_attempts, 1);
    }

    #[test]
    fn test_policy_caps_interval_to_browser_range() {
        let policy = AttachPolicy::new(u32::MAX, 5);
        assert_eq!(policy.interval_ms, AttachPolicy::MAX_INTERVAL_MS);
        assert!(i32::try_from(policy.interval().as_millis()).is_ok());

        let policy = AttachPolicy::new(AttachPolicy::MAX_INTERVAL_MS, 5);
        assert_eq!(policy.interval_ms, AttachPolicy::MAX_INTERVAL_MS);
    }

    #[test]
    fn test_state_display_and_terminal() {
        assert_eq!(AttachState::GaveUp.to_string(), "gave up");
        assert!(!AttachState::Idle.is_terminal());
        assert!(!AttachState::Polling.is_terminal());
        assert!(AttachState::Attached.is_terminal());
        assert!(AttachState::GaveUp.is_terminal());
        assert!(AttachState::Cancelled.is_terminal());
    }

    #[test]
    fn test_idle_until_started() {
        let timer = ManualTimer::new();
        let page = Rc::new(FakePage::default());
        page.container_from.set(Some(0));
        page.vendor_from.set(Some(0));
        let attacher = WidgetAttacher::new(
            FakeHost {
                page: page.clone(),
                clock: timer,
            },
            AttachPolicy::default(),
        );

        assert_eq!(attacher.tick(), AttachState::Idle);
        assert_eq!(attacher.attempts(), 0);
        assert_eq!(attacher.start(), AttachState::Polling);
        assert_eq!(attacher.tick(), AttachState::Attached);
        assert_eq!(page.renders.borrow().len(), 1);
    }

    #[test]
    fn test_renders_once_when_vendor_arrives() {
        let (timer, page, session) = setup(Some(0), Some(700));

        timer.advance(650);
        assert_eq!(session.state(), AttachState::Polling);
        assert!(page.renders.borrow().is_empty());

        timer.advance(5_000);
        assert_eq!(*page.renders.borrow(), vec![700]);
        assert_eq!(session.state(), AttachState::Attached);
        assert_eq!(session.attacher().attempts(), 7);
        assert!(session.attacher().is_rendered());
        assert_eq!(timer.active_timers(), 0);
    }

    #[test]
    fn test_container_late_and_vendor_at_500() {
        // Container shows up after the third tick, vendor at 500 ms.
        let (timer, page, session) = setup(Some(301), Some(500));

        timer.advance(499);
        assert!(page.renders.borrow().is_empty());

        timer.advance(1);
        assert_eq!(*page.renders.borrow(), vec![500]);

        timer.advance(2_000);
        assert_eq!(page.renders.borrow().len(), 1);
        assert_eq!(session.state(), AttachState::Attached);
    }

    #[test]
    fn test_teardown_at_400_prevents_render() {
        let (timer, page, session) = setup(Some(301), Some(500));

        timer.advance(400);
        drop(session);
        timer.advance(5_000);

        assert!(page.renders.borrow().is_empty());
        assert_eq!(timer.active_timers(), 0);
    }

    #[test]
    fn test_gives_up_after_exact_budget() {
        let (timer, page, session) = setup(Some(0), None);

        timer.advance(9_900);
        assert_eq!(session.state(), AttachState::Polling);
        assert_eq!(session.attacher().attempts(), 99);

        timer.advance(100);
        assert_eq!(session.state(), AttachState::GaveUp);
        assert_eq!(session.attacher().attempts(), 100);

        timer.advance(60_000);
        assert_eq!(session.attacher().attempts(), 100);
        assert!(page.renders.borrow().is_empty());
        assert_eq!(timer.active_timers(), 0);
    }

    #[test]
    fn test_gives_up_when_container_never_appears() {
        let (timer, page, session) = setup(None, Some(0));

        timer.advance(20_000);
        assert_eq!(session.state(), AttachState::GaveUp);
        assert!(page.renders.borrow().is_empty());
    }

    #[test]
    fn test_vendor_after_teardown_never_renders() {
        let (timer, page, session) = setup(Some(0), None);

        timer.advance(300);
        session.teardown();
        assert_eq!(session.state(), AttachState::Cancelled);

        page.vendor_from.set(Some(0));
        timer.advance(5_000);
        assert!(page.renders.borrow().is_empty());
        assert_eq!(session.attacher().attempts(), 3);
    }

    #[test]
    fn test_reentrant_tick_during_render() {
        let (timer, page, session) = setup(Some(0), Some(0));

        // The vendor call takes long enough that another tick lands inside it.
        let weak = Rc::downgrade(session.attacher());
        *page.on_render.borrow_mut() = Some(Box::new(move || {
            if let Some(attacher) = weak.upgrade() {
                attacher.tick();
                attacher.tick();
            }
        }));

        timer.advance(1_000);
        assert_eq!(page.renders.borrow().len(), 1);
        assert_eq!(session.attacher().attempts(), 1);
    }

    #[test]
    fn test_teardown_clears_rendered_container() {
        let (timer, page, session) = setup(Some(0), Some(0));

        timer.advance(100);
        assert_eq!(page.children.get(), 1);

        drop(session);
        assert_eq!(page.children.get(), 0);
        assert!(page.clears.get() >= 1);
    }

    #[test]
    fn test_teardown_resets_guard_and_is_idempotent() {
        let (timer, _page, session) = setup(Some(0), Some(0));

        timer.advance(100);
        assert!(session.attacher().is_rendered());

        session.teardown();
        session.teardown();
        assert!(!session.attacher().is_rendered());
        assert_eq!(session.state(), AttachState::Cancelled);
    }

    #[test]
    fn test_render_failure_is_not_retried() {
        let (timer, page, session) = setup(Some(0), Some(0));
        page.fail_render.set(true);

        timer.advance(2_000);
        assert_eq!(page.renders.borrow().len(), 1);
        assert_eq!(session.state(), AttachState::Attached);
        assert_eq!(page.children.get(), 0);
    }

    #[test]
    fn test_independent_sessions() {
        let timer = ManualTimer::new();
        let first = Rc::new(FakePage::default());
        first.container_from.set(Some(0));
        first.vendor_from.set(Some(200));
        let second = Rc::new(FakePage::default());
        second.container_from.set(Some(0));
        second.vendor_from.set(Some(200));

        let a = AttachSession::start(
            FakeHost {
                page: first.clone(),
                clock: timer.clone(),
            },
            &timer,
            AttachPolicy::default(),
        );
        let b = AttachSession::start(
            FakeHost {
                page: second.clone(),
                clock: timer.clone(),
            },
            &timer,
            AttachPolicy::new(50, 10),
        );

        timer.advance(100);
        drop(a);
        timer.advance(400);

        assert!(first.renders.borrow().is_empty());
        assert_eq!(*second.renders.borrow(), vec![200]);
        assert_eq!(b.state(), AttachState::Attached);
    }
}
