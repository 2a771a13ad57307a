//! Cancellable deferred tasks over the browser's timer and animation-frame
//! APIs. Scheduling again supersedes (cancels) the outstanding callback, and
//! dropping a task cancels it, so teardown can never leave a stale callback
//! mutating state after unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{
    request_animation_frame, request_animation_frame_with_handle, set_interval_with_handle,
    set_timeout_with_handle, AnimationFrameRequestHandle, IntervalHandle, TimeoutHandle,
};

/// A trailing-edge debounce timer.
pub struct Debounce {
    delay: Duration,
    handle: Cell<Option<TimeoutHandle>>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            handle: Cell::new(None),
        }
    }

    /// Schedule `task`, cancelling any previously scheduled one.
    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        if let Ok(handle) = set_timeout_with_handle(task, self.delay) {
            self.handle.set(Some(handle));
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// At most one pending animation-frame callback; a new request supersedes
/// the old one, so only the latest task runs on the next frame.
pub struct FrameTask {
    handle: Cell<Option<AnimationFrameRequestHandle>>,
}

impl FrameTask {
    pub fn new() -> Self {
        Self {
            handle: Cell::new(None),
        }
    }

    pub fn request(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        if let Ok(handle) = request_animation_frame_with_handle(task) {
            self.handle.set(Some(handle));
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl Default for FrameTask {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A step function rescheduled every animation frame while it returns `true`.
pub struct RafLoop {
    cancelled: Rc<Cell<bool>>,
}

impl RafLoop {
    pub fn spawn(step: impl FnMut() -> bool + 'static) -> Self {
        let cancelled = Rc::new(Cell::new(false));
        let step: Rc<RefCell<dyn FnMut() -> bool>> = Rc::new(RefCell::new(step));
        schedule_frame(step, Rc::clone(&cancelled));
        Self { cancelled }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_frame(step: Rc<RefCell<dyn FnMut() -> bool>>, cancelled: Rc<Cell<bool>>) {
    request_animation_frame(move || {
        if cancelled.get() {
            return;
        }
        let keep_going = (step.borrow_mut())();
        if keep_going {
            schedule_frame(step, cancelled);
        }
    });
}

/// A fixed-interval poller.
pub struct Poller {
    handle: Cell<Option<IntervalHandle>>,
}

impl Poller {
    pub fn spawn(period_ms: u64, tick: impl FnMut() + 'static) -> Self {
        let poller = Self {
            handle: Cell::new(None),
        };
        let tick = RefCell::new(tick);
        if let Ok(handle) = set_interval_with_handle(
            move || (tick.borrow_mut())(),
            Duration::from_millis(period_ms),
        ) {
            poller.handle.set(Some(handle));
        }
        poller
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel();
    }
}
