use std::time::{Duration, Instant};

/// Handle to a task queued in a [`Scheduler`], used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct Scheduled<T> {
    id: u64,
    due: Instant,
    task: T,
}

/// A single-threaded timer queue.
///
/// Tasks are plain values that come back out of [`Scheduler::drain_due`] once
/// their deadline has passed. Nothing runs on its own: the owner polls the
/// queue once per frame and asks the UI to repaint at [`Scheduler::next_deadline`].
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule_at(&mut self, due: Instant, task: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Scheduled { id, due, task });
        TaskHandle(id)
    }

    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        self.schedule_at(now + delay, task)
    }

    /// Cancel a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != handle.0);
        self.pending.len() != before
    }

    #[allow(dead_code)]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.id == handle.0)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first. Tasks with equal deadlines keep scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.id));
        due.into_iter().map(|s| s.task).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
