//! One-shot delayed tasks.
//!
//! Timers always fire and nothing cancels them today. [`Scheduler::cancel`]
//! exists so a timeout or abort path can be added without touching callers.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle returned for every scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Runs tasks once after a delay.
pub trait Scheduler: Send + Sync {
    /// Queue `task` to run once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> TaskId;

    /// Cancellation hook. A no-op unless an implementation needs it.
    fn cancel(&self, id: TaskId) {
        let _ = id;
    }
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct TimeoutScheduler {
    next_id: AtomicU64,
}

#[cfg(feature = "csr")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
        id
    }
}

/// Virtual-time scheduler. Tasks run only inside [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    next_id: AtomicU64,
    queue: Mutex<ManualQueue>,
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    pending: Vec<PendingTask>,
}

struct PendingTask {
    due: Duration,
    id: TaskId,
    task: Task,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.lock().now
    }

    /// Move virtual time forward by `delta`, running every task that falls
    /// due in deadline order (ties in scheduling order). Tasks scheduled by a
    /// running task are eligible in the same call. Returns how many ran.
    pub fn advance(&self, delta: Duration) -> usize {
        let target = self.lock().now + delta;
        let mut ran = 0;
        loop {
            let next = {
                let mut queue = self.lock();
                let due_index = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= target)
                    .min_by_key(|(_, pending)| (pending.due, pending.id))
                    .map(|(index, _)| index);
                if let Some(index) = due_index {
                    let pending = queue.pending.remove(index);
                    queue.now = pending.due;
                    Some(pending.task)
                } else {
                    queue.now = target;
                    None
                }
            };

            // Lock released before running so the task may schedule more work.
            let Some(task) = next else {
                break;
            };
            task();
            ran += 1;
        }
        ran
    }

    fn lock(&self) -> MutexGuard<'_, ManualQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut queue = self.lock();
        let due = queue.now + delay;
        queue.pending.push(PendingTask { due, id, task });
        id
    }
}
