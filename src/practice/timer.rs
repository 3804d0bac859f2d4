//! Scheduled-task queue for the simulated latencies.
//!
//! Every fake-async delay in the app (analysis lookup, confirmation
//! auto-clear, essay processing, chat replies) goes through a `Scheduler`.
//! The scheduler never reads the wall clock itself: callers pass the current
//! `Instant` in, which keeps every timer deterministic under test.

use std::time::Instant;

/// Token identifying one scheduled task. Holders compare the token a fired
/// task carries against the one they stored to reject superseded timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<E> {
    id: TaskId,
    due: Instant,
    effect: E,
}

/// A queue of delayed effects, polled once per frame.
#[derive(Debug)]
pub struct Scheduler<E> {
    tasks: Vec<Scheduled<E>>,
    next_id: u64,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Queue `effect` to fire once `now >= due`.
    pub fn schedule(&mut self, due: Instant, effect: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled { id, due, effect });
        id
    }

    /// Remove a pending task. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Pop all tasks due at `now`, ordered by deadline then insertion.
    pub fn fire_due(&mut self, now: Instant) -> Vec<(TaskId, E)> {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                fired.push(self.tasks.remove(i));
            } else {
                i += 1;
            }
        }
        fired.sort_by_key(|task| (task.due, task.id.0));
        fired.into_iter().map(|task| (task.id, task.effect)).collect()
    }

    /// Earliest pending deadline, if any. Drives `request_repaint_after`.
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fires_only_at_or_after_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0 + Duration::from_millis(100), "a");

        assert!(scheduler.fire_due(t0 + Duration::from_millis(99)).is_empty());
        let fired = scheduler.fire_due(t0 + Duration::from_millis(100));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, "a");
        assert!(scheduler.is_empty());
    }

    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(t0 + Duration::from_millis(10), "a");

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.fire_due(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn fires_in_deadline_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0 + Duration::from_millis(30), "late");
        scheduler.schedule(t0 + Duration::from_millis(10), "early");

        let fired = scheduler.fire_due(t0 + Duration::from_millis(30));
        let effects: Vec<_> = fired.iter().map(|(_, e)| *e).collect();
        assert_eq!(effects, vec!["early", "late"]);
    }

    #[test]
    fn next_due_reports_earliest_deadline() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.next_due(), None);

        scheduler.schedule(t0 + Duration::from_millis(50), ());
        scheduler.schedule(t0 + Duration::from_millis(20), ());
        assert_eq!(scheduler.next_due(), Some(t0 + Duration::from_millis(20)));
    }
}
