//! Scroll-driven hero intro.
//!
//! On desktop the page starts locked and wheel input is fed into a virtual
//! accumulator that slides the two candidate images in from the sides. Once
//! both images sit at their resting position a short settle timer fires,
//! the lock is released and the intro is complete for good. Mobile viewports
//! start complete.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use yew::Callback;

use crate::config::SiteConfig;
use crate::error::DomError;
use crate::platform::{EventKind, EventSink, InputEvent, Listener, Page, Pending, Scheduler};
use crate::scroll_lock::ScrollLock;

const FULL_SLIDE: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Locked,
    Complete,
}

/// What the hero needs to render one state of the intro.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    pub phase: IntroPhase,
    /// Percent of the slide-in covered so far, in `[0, 100]`.
    pub slide: f64,
    pub left_offset: f64,
    pub right_offset: f64,
}

impl IntroFrame {
    /// Before anything is mounted: both images off-screen.
    pub fn initial() -> Self {
        Self {
            phase: IntroPhase::Locked,
            slide: 0.0,
            left_offset: -FULL_SLIDE,
            right_offset: FULL_SLIDE,
        }
    }

    pub fn complete() -> Self {
        Self {
            phase: IntroPhase::Complete,
            slide: FULL_SLIDE,
            left_offset: 0.0,
            right_offset: 0.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == IntroPhase::Complete
    }

    pub fn left_transform(&self) -> String {
        format!("transform: translateX({}%);", self.left_offset)
    }

    pub fn right_transform(&self) -> String {
        format!("transform: translateX({}%);", self.right_offset)
    }
}

/// Identifies one settle attempt. Only the newest token may complete the intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleToken(u64);

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    units_per_percent: f64,
    tolerance: f64,
    accumulated: f64,
    slide: f64,
    target_reached: bool,
    phase: IntroPhase,
    generation: u64,
}

impl IntroSequencer {
    pub fn new(config: &SiteConfig, viewport_width: f64) -> Self {
        let phase = if config.is_mobile(viewport_width) {
            IntroPhase::Complete
        } else {
            IntroPhase::Locked
        };
        Self {
            units_per_percent: config.wheel_units_per_percent,
            tolerance: config.settle_tolerance,
            accumulated: 0.0,
            slide: 0.0,
            target_reached: false,
            phase,
            generation: 0,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == IntroPhase::Complete
    }

    pub fn slide(&self) -> f64 {
        self.slide
    }

    /// Image offsets in percent. Completion snaps both to rest regardless of
    /// where the accumulator ended up.
    pub fn offsets(&self) -> (f64, f64) {
        if self.is_complete() {
            (0.0, 0.0)
        } else {
            (self.slide - FULL_SLIDE, FULL_SLIDE - self.slide)
        }
    }

    pub fn frame(&self) -> IntroFrame {
        let (left_offset, right_offset) = self.offsets();
        IntroFrame {
            phase: self.phase,
            slide: self.slide,
            left_offset,
            right_offset,
        }
    }

    /// Feeds one wheel delta into the accumulator. Returns `false` once the
    /// intro is complete and wheel input belongs to the page again.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if self.is_complete() {
            return false;
        }
        self.accumulated = (self.accumulated + delta_y).max(0.0);
        self.slide = (self.accumulated / self.units_per_percent).min(FULL_SLIDE);
        if self.slide >= FULL_SLIDE {
            self.target_reached = true;
        }
        true
    }

    /// Real scrolling after completion keeps the images pinned in place.
    pub fn pin(&mut self) {
        if self.is_complete() {
            self.slide = FULL_SLIDE;
        }
    }

    /// Starts a new settle attempt if the slide target was reached and both
    /// images are within tolerance of rest. Any older token is invalidated.
    pub fn arm_settle(&mut self) -> Option<SettleToken> {
        if self.is_complete() || !self.target_reached {
            return None;
        }
        let (left, right) = self.offsets();
        if left.abs() >= self.tolerance || right.abs() >= self.tolerance {
            return None;
        }
        self.generation += 1;
        Some(SettleToken(self.generation))
    }

    /// Completes the intro if `token` is the newest settle attempt.
    pub fn settle(&mut self, token: SettleToken) -> bool {
        if self.is_complete() || token.0 != self.generation {
            return false;
        }
        self.phase = IntroPhase::Complete;
        self.slide = FULL_SLIDE;
        true
    }
}

struct IntroShared {
    state: RefCell<IntroSequencer>,
    lock: RefCell<Option<ScrollLock>>,
    pending: RefCell<Option<Box<dyn Pending>>>,
    page: Rc<dyn Page>,
    scheduler: Rc<dyn Scheduler>,
    settle_delay_ms: u32,
    on_frame: Callback<IntroFrame>,
}

impl IntroShared {
    fn on_wheel(self: &Rc<Self>, event: &mut InputEvent) {
        let (frame, changed) = {
            let mut state = self.state.borrow_mut();
            let before = state.frame();
            if !state.wheel(event.delta_y()) {
                return;
            }
            event.prevent_default();
            let after = state.frame();
            (after, after != before)
        };

        if changed {
            self.on_frame.emit(frame);
        }
        if changed || self.pending.borrow().is_none() {
            self.arm_settle();
        }
    }

    fn on_scroll(&self) {
        self.state.borrow_mut().pin();
    }

    fn arm_settle(self: &Rc<Self>) {
        let token = self.state.borrow_mut().arm_settle();
        let task = token.map(|token| {
            debug!("intro settled, completing in {}ms", self.settle_delay_ms);
            let shared = Rc::downgrade(self);
            self.scheduler.schedule(
                self.settle_delay_ms,
                Box::new(move || {
                    if let Some(shared) = shared.upgrade() {
                        shared.finish(token);
                    }
                }),
            )
        });
        // Replacing the previous handle cancels its timer.
        *self.pending.borrow_mut() = task;
    }

    fn finish(&self, token: SettleToken) {
        let frame = {
            let mut state = self.state.borrow_mut();
            if !state.settle(token) {
                return;
            }
            state.frame()
        };
        self.page.scroll_to_top();
        if let Some(mut lock) = self.lock.borrow_mut().take() {
            lock.release();
        }
        info!("Intro complete, scrolling unlocked");
        self.on_frame.emit(frame);
    }
}

/// Live intro. Dropping it detaches the listeners, cancels a pending settle
/// timer and releases the scroll lock if it is still held.
pub struct IntroHandle {
    _listeners: Vec<Listener>,
    shared: Rc<IntroShared>,
}

impl IntroHandle {
    pub fn frame(&self) -> IntroFrame {
        self.shared.state.borrow().frame()
    }
}

pub fn mount(
    config: &SiteConfig,
    page: Rc<dyn Page>,
    window: Rc<dyn EventSink>,
    scheduler: Rc<dyn Scheduler>,
    on_frame: Callback<IntroFrame>,
) -> Result<IntroHandle, DomError> {
    let state = IntroSequencer::new(config, page.viewport_width());
    let lock = if state.is_complete() {
        info!("Small viewport, skipping intro");
        None
    } else {
        info!("Locking scroll for intro");
        page.scroll_to_top();
        Some(ScrollLock::acquire(Rc::clone(&page)))
    };
    let frame = state.frame();

    let shared = Rc::new(IntroShared {
        state: RefCell::new(state),
        lock: RefCell::new(lock),
        pending: RefCell::new(None),
        page,
        scheduler,
        settle_delay_ms: config.settle_delay_ms,
        on_frame,
    });

    let on_wheel = {
        let shared: Weak<IntroShared> = Rc::downgrade(&shared);
        Rc::new(move |event: &mut InputEvent| {
            if let Some(shared) = shared.upgrade() {
                shared.on_wheel(event);
            }
        })
    };
    let on_scroll = {
        let shared: Weak<IntroShared> = Rc::downgrade(&shared);
        Rc::new(move |_: &mut InputEvent| {
            if let Some(shared) = shared.upgrade() {
                shared.on_scroll();
            }
        })
    };
    let listeners = vec![
        Listener::attach(&window, EventKind::Wheel, on_wheel)?,
        Listener::attach(&window, EventKind::Scroll, on_scroll)?,
    ];

    shared.on_frame.emit(frame);
    Ok(IntroHandle {
        _listeners: listeners,
        shared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::{FakeScheduler, FakeTarget};
    use crate::platform::MockPage;
    use mockall::predicate::eq;

    fn desktop() -> IntroSequencer {
        IntroSequencer::new(&SiteConfig::default(), 1200.0)
    }

    #[test]
    fn mobile_viewport_starts_complete() {
        let state = IntroSequencer::new(&SiteConfig::default(), 600.0);
        assert_eq!(state.phase(), IntroPhase::Complete);
        assert_eq!(state.offsets(), (0.0, 0.0));
    }

    #[test]
    fn slide_stays_bounded_and_monotonic_in_accumulated_delta() {
        let deltas = [
            35.0, -500.0, 12.5, 80.0, -20.0, 0.0, 300.0, 450.0, -5.0, 900.0, 1.0,
        ];
        let mut state = desktop();
        let mut accumulated: f64 = 0.0;
        let mut last = (accumulated, state.slide());
        for delta in deltas {
            state.wheel(delta);
            accumulated = (accumulated + delta).max(0.0);
            let slide = state.slide();
            assert!((0.0..=100.0).contains(&slide), "slide {slide} out of range");
            if accumulated >= last.0 {
                assert!(slide >= last.1);
            }
            last = (accumulated, slide);
        }
    }

    #[test]
    fn upward_wheel_cannot_go_below_zero() {
        let mut state = desktop();
        state.wheel(-250.0);
        assert_eq!(state.slide(), 0.0);
        state.wheel(50.0);
        assert_eq!(state.slide(), 5.0);
        assert_eq!(state.offsets(), (-95.0, 95.0));
    }

    #[test]
    fn settle_requires_full_slide() {
        let mut state = desktop();
        state.wheel(995.0);
        // Offsets are within tolerance but the target was never reached.
        assert!(state.arm_settle().is_none());
        state.wheel(5.0);
        assert!(state.arm_settle().is_some());
    }

    #[test]
    fn stale_settle_token_is_ignored() {
        let mut state = desktop();
        state.wheel(1200.0);
        let first = state.arm_settle().unwrap();
        let second = state.arm_settle().unwrap();
        assert!(!state.settle(first));
        assert_eq!(state.phase(), IntroPhase::Locked);
        assert!(state.settle(second));
        assert!(state.is_complete());
    }

    #[test]
    fn completion_is_terminal() {
        let mut state = desktop();
        state.wheel(1000.0);
        let token = state.arm_settle().unwrap();
        assert!(state.settle(token));
        assert!(!state.wheel(-5000.0));
        assert!(!state.settle(token));
        assert!(state.arm_settle().is_none());
        state.pin();
        assert!(state.is_complete());
        assert_eq!(state.slide(), 100.0);
    }

    struct Harness {
        window: Rc<FakeTarget>,
        scheduler: Rc<FakeScheduler>,
        frames: Rc<RefCell<Vec<IntroFrame>>>,
        handle: IntroHandle,
    }

    fn mount_with(page: MockPage) -> Harness {
        let window = FakeTarget::new();
        let scheduler = FakeScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let on_frame = {
            let frames = Rc::clone(&frames);
            Callback::from(move |frame: IntroFrame| frames.borrow_mut().push(frame))
        };
        let handle = mount(
            &SiteConfig::default(),
            Rc::new(page),
            window.clone(),
            scheduler.clone(),
            on_frame,
        )
        .unwrap();
        Harness {
            window,
            scheduler,
            frames,
            handle,
        }
    }

    fn completions(frames: &RefCell<Vec<IntroFrame>>) -> usize {
        frames
            .borrow()
            .iter()
            .filter(|frame| frame.is_complete())
            .count()
    }

    #[test]
    fn mobile_mount_completes_without_locking() {
        let mut page = MockPage::new();
        page.expect_viewport_width().return_const(600.0);
        page.expect_set_scroll_locked().never();
        page.expect_scroll_to_top().never();

        let harness = mount_with(page);
        assert!(harness.handle.frame().is_complete());
        assert_eq!(completions(&harness.frames), 1);

        let event = harness.window.dispatch(InputEvent::wheel(120.0));
        assert!(!event.default_prevented());
    }

    #[test]
    fn desktop_wheel_unlocks_once_after_settle_delay() {
        let mut page = MockPage::new();
        page.expect_viewport_width().return_const(1200.0);
        page.expect_scroll_to_top().times(2).return_const(());
        page.expect_set_scroll_locked()
            .with(eq(true))
            .times(1)
            .return_const(());
        page.expect_set_scroll_locked()
            .with(eq(false))
            .times(1)
            .return_const(());

        let harness = mount_with(page);
        assert_eq!(harness.handle.frame(), IntroFrame::initial());

        for _ in 0..10 {
            let event = harness.window.dispatch(InputEvent::wheel(100.0));
            assert!(event.default_prevented());
        }
        assert_eq!(harness.scheduler.live_tasks(), 1);
        assert!(!harness.handle.frame().is_complete());

        harness.scheduler.advance(149);
        assert!(!harness.handle.frame().is_complete());
        harness.scheduler.advance(1);
        assert!(harness.handle.frame().is_complete());

        // Wheel and scroll after completion leave the page alone.
        let event = harness.window.dispatch(InputEvent::wheel(-400.0));
        assert!(!event.default_prevented());
        harness.window.dispatch(InputEvent::scroll());
        harness.scheduler.advance(1000);
        assert!(harness.handle.frame().is_complete());
        assert_eq!(completions(&harness.frames), 1);
    }

    #[test]
    fn further_motion_restarts_the_settle_delay() {
        let mut page = MockPage::new();
        page.expect_viewport_width().return_const(1200.0);
        page.expect_scroll_to_top().return_const(());
        page.expect_set_scroll_locked().return_const(());

        let harness = mount_with(page);
        harness.window.dispatch(InputEvent::wheel(1000.0));
        harness.scheduler.advance(100);

        // Backing off cancels the pending timer.
        harness.window.dispatch(InputEvent::wheel(-300.0));
        assert_eq!(harness.scheduler.live_tasks(), 0);
        harness.scheduler.advance(100);
        assert!(!harness.handle.frame().is_complete());

        // The target was already reached once; returning to rest re-arms.
        harness.window.dispatch(InputEvent::wheel(300.0));
        harness.scheduler.advance(150);
        assert!(harness.handle.frame().is_complete());
    }

    #[test]
    fn unmount_detaches_and_unlocks() {
        let mut page = MockPage::new();
        page.expect_viewport_width().return_const(1200.0);
        page.expect_scroll_to_top().times(1).return_const(());
        page.expect_set_scroll_locked()
            .with(eq(true))
            .times(1)
            .return_const(());
        page.expect_set_scroll_locked()
            .with(eq(false))
            .times(1)
            .return_const(());

        let Harness {
            window,
            scheduler,
            frames,
            handle,
        } = mount_with(page);
        window.dispatch(InputEvent::wheel(1000.0));
        assert_eq!(scheduler.live_tasks(), 1);
        let seen = frames.borrow().len();

        drop(handle);
        assert_eq!(window.listener_count(), 0);
        assert_eq!(scheduler.live_tasks(), 0);

        let event = window.dispatch(InputEvent::wheel(100.0));
        assert!(!event.default_prevented());
        scheduler.advance(500);
        assert_eq!(frames.borrow().len(), seen);
    }
}
