//! Essay submission state machine.
//!
//! Submitting a titled draft shows a processing indicator for a fixed delay,
//! then reveals the canned optimized essay and evaluation.

use std::time::{Duration, Instant};

use crate::practice::timer::{Scheduler, TaskId};

#[derive(Debug)]
pub struct EssayReview {
    pub title: String,
    pub draft: String,
    processing: bool,
    revealed: bool,
    task: Option<TaskId>,
    timers: Scheduler<()>,
    process_delay: Duration,
}

impl EssayReview {
    pub fn new(process_delay: Duration) -> Self {
        Self {
            title: String::new(),
            draft: String::new(),
            processing: false,
            revealed: false,
            task: None,
            timers: Scheduler::new(),
            process_delay,
        }
    }

    /// Submission requires a non-blank title and draft and no submission
    /// already in flight.
    pub fn can_submit(&self) -> bool {
        !self.processing && !self.title.trim().is_empty() && !self.draft.trim().is_empty()
    }

    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.can_submit() {
            return false;
        }
        if let Some(id) = self.task.take() {
            self.timers.cancel(id);
        }
        self.revealed = false;
        self.processing = true;
        self.task = Some(self.timers.schedule(now + self.process_delay, ()));
        true
    }

    pub fn tick(&mut self, now: Instant) {
        for (id, ()) in self.timers.fire_due(now) {
            if self.task == Some(id) {
                self.task = None;
                self.processing = false;
                self.revealed = true;
            }
        }
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn blank_title_or_draft_blocks_submission() {
        let mut essay = EssayReview::new(DELAY);
        assert!(!essay.submit(Instant::now()));

        essay.title = "Long Holidays".to_string();
        assert!(!essay.submit(Instant::now()));

        essay.draft = "   ".to_string();
        assert!(!essay.submit(Instant::now()));
    }

    #[test]
    fn submission_reveals_after_the_processing_delay() {
        let t0 = Instant::now();
        let mut essay = EssayReview::new(DELAY);
        essay.title = "Long Holidays".to_string();
        essay.draft = "Long holidays are usually good for college students.".to_string();

        assert!(essay.submit(t0));
        assert!(essay.is_processing());
        assert!(!essay.is_revealed());
        // A second submit while processing is refused.
        assert!(!essay.submit(t0 + Duration::from_millis(100)));

        essay.tick(t0 + DELAY - Duration::from_millis(1));
        assert!(essay.is_processing());

        essay.tick(t0 + DELAY);
        assert!(!essay.is_processing());
        assert!(essay.is_revealed());
    }

    #[test]
    fn resubmission_restarts_the_processing_window() {
        let t0 = Instant::now();
        let mut essay = EssayReview::new(DELAY);
        essay.title = "t".to_string();
        essay.draft = "d".to_string();
        essay.submit(t0);
        essay.tick(t0 + DELAY);
        assert!(essay.is_revealed());

        let t1 = t0 + Duration::from_secs(10);
        assert!(essay.submit(t1));
        assert!(!essay.is_revealed());
        essay.tick(t1 + DELAY);
        assert!(essay.is_revealed());
    }
}
