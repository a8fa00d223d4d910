//! Transient outcome notification with a single auto-dismiss timer.

use chrono::{DateTime, Duration, Utc};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const FLASH_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
    pub expires_at: DateTime<Utc>,
}

impl FlashMessage {
    pub fn is_success(&self) -> bool {
        self.kind == FlashKind::Success
    }
}

pub trait TimerHandle {
    fn cancel(self);
}

/// Single-shot timers on the UI event loop.
pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    fn now(&self) -> DateTime<Utc>;
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

impl TimerHandle for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

struct Slot<H> {
    current: Option<FlashMessage>,
    timer: Option<H>,
    generation: u64,
    on_expire: Option<Rc<dyn Fn()>>,
}

pub struct FlashScheduler<S: Scheduler> {
    scheduler: S,
    slot: Rc<RefCell<Slot<S::Handle>>>,
}

impl<S: Scheduler> FlashScheduler<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            slot: Rc::new(RefCell::new(Slot {
                current: None,
                timer: None,
                generation: 0,
                on_expire: None,
            })),
        }
    }

    /// Called after the live message times out, never after `clear`.
    pub fn on_expire(&self, observer: impl Fn() + 'static) {
        self.slot.borrow_mut().on_expire = Some(Rc::new(observer));
    }

    pub fn current(&self) -> Option<FlashMessage> {
        self.slot.borrow().current.clone()
    }

    pub fn show(&self, kind: FlashKind, text: impl Into<String>) -> FlashMessage {
        let previous = self.slot.borrow_mut().timer.take();
        if let Some(handle) = previous {
            handle.cancel();
        }

        let message = FlashMessage {
            kind,
            text: text.into(),
            expires_at: self.scheduler.now() + Duration::milliseconds(FLASH_DURATION_MS.into()),
        };
        let generation = {
            let mut slot = self.slot.borrow_mut();
            slot.generation += 1;
            slot.current = Some(message.clone());
            slot.generation
        };

        let weak = Rc::downgrade(&self.slot);
        let handle = self
            .scheduler
            .schedule(FLASH_DURATION_MS, Box::new(move || expire(&weak, generation)));
        self.slot.borrow_mut().timer = Some(handle);
        message
    }

    /// Drops the live message and its timer without notifying the observer.
    pub fn clear(&self) {
        let previous = {
            let mut slot = self.slot.borrow_mut();
            slot.generation += 1;
            slot.current = None;
            slot.timer.take()
        };
        if let Some(handle) = previous {
            handle.cancel();
        }
    }
}

fn expire<H>(slot: &Weak<RefCell<Slot<H>>>, generation: u64) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let observer = {
        let mut slot = slot.borrow_mut();
        if slot.generation != generation {
            return;
        }
        slot.current = None;
        // Fired already; dropping is enough.
        slot.timer = None;
        slot.on_expire.clone()
    };
    if let Some(observer) = observer {
        observer();
    }
}

impl<S: Scheduler> Drop for FlashScheduler<S> {
    fn drop(&mut self) {
        let previous = self.slot.borrow_mut().timer.take();
        if let Some(handle) = previous {
            handle.cancel();
        }
    }
}
