use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::state::flash::{Scheduler, TimerHandle};

struct Task {
    id: u64,
    due_ms: u64,
    run: Box<dyn FnOnce()>,
}

struct Inner {
    origin: DateTime<Utc>,
    elapsed_ms: u64,
    next_id: u64,
    tasks: Vec<Task>,
    fired: usize,
    cancelled: usize,
}

/// Virtual clock; timers only fire from `advance`.
#[derive(Clone)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

pub struct ManualHandle {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        let origin = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid origin");
        Self {
            inner: Rc::new(RefCell::new(Inner {
                origin,
                elapsed_ms: 0,
                next_id: 0,
                tasks: Vec::new(),
                fired: 0,
                cancelled: 0,
            })),
        }
    }

    /// Moves time forward, running due tasks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().elapsed_ms + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due_ms <= target)
                    .min_by_key(|(_, task)| (task.due_ms, task.id))
                    .map(|(idx, _)| idx);
                match due {
                    Some(idx) => {
                        let task = inner.tasks.remove(idx);
                        inner.elapsed_ms = task.due_ms;
                        inner.fired += 1;
                        Some(task.run)
                    }
                    None => {
                        inner.elapsed_ms = target;
                        None
                    }
                }
            };
            match next {
                Some(run) => run(),
                None => break,
            }
        }
    }

    pub fn live_timers(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    pub fn fired(&self) -> usize {
        self.inner.borrow().fired
    }

    pub fn cancelled(&self) -> usize {
        self.inner.borrow().cancelled
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn now(&self) -> DateTime<Utc> {
        let inner = self.inner.borrow();
        inner.origin + Duration::milliseconds(inner.elapsed_ms as i64)
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due_ms = inner.elapsed_ms + u64::from(delay_ms);
        inner.tasks.push(Task {
            id,
            due_ms,
            run: task,
        });
        ManualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        if let Some(pos) = inner.tasks.iter().position(|task| task.id == self.id) {
            inner.tasks.remove(pos);
            inner.cancelled += 1;
        }
    }
}
