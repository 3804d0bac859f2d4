//! Drop-slot state machines.
//!
//! Two slot families exist: `ConfirmSlots` back the essay optimization
//! zones (drop, clear, confirm with a timed acknowledgement that empties the
//! slot) and `LookupSlots` back the reading zones (drop starts a delayed
//! analysis lookup). Both track the task id of their pending timer per slot
//! and ignore any fired timer whose id no longer matches, so a late timer
//! can never clobber state written after it was scheduled.

use std::time::{Duration, Instant};

use crate::practice::lookup::{self, AnnotationEntry};
use crate::practice::payload::{DragPayload, PayloadKind};
use crate::practice::timer::{Scheduler, TaskId};

#[derive(Debug, Default)]
struct ConfirmSlot {
    content: String,
    confirming: bool,
    confirm_task: Option<TaskId>,
}

/// A fixed group of slots with clear/confirm actions, indexed 0..len.
#[derive(Debug)]
pub struct ConfirmSlots {
    slots: Vec<ConfirmSlot>,
    accepts: Vec<PayloadKind>,
    timers: Scheduler<usize>,
    confirm_delay: Duration,
}

impl ConfirmSlots {
    pub fn new(count: usize, accepts: Vec<PayloadKind>, confirm_delay: Duration) -> Self {
        Self {
            slots: (0..count).map(|_| ConfirmSlot::default()).collect(),
            accepts,
            timers: Scheduler::new(),
            confirm_delay,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn accept_kinds(&self) -> &[PayloadKind] {
        &self.accepts
    }

    pub fn accepts(&self, kind: PayloadKind) -> bool {
        self.accepts.contains(&kind)
    }

    pub fn content(&self, index: usize) -> &str {
        &self.slots[index].content
    }

    pub fn is_confirming(&self, index: usize) -> bool {
        self.slots[index].confirming
    }

    /// Accept a payload of an allowed kind, unconditionally replacing the
    /// slot content. A drop mid-confirmation cancels the pending auto-clear
    /// and the slot goes straight back to plain filled state.
    pub fn drop_payload(&mut self, index: usize, payload: &DragPayload) -> bool {
        if !self.accepts(payload.kind) {
            return false;
        }
        if let Some(id) = self.slots[index].confirm_task.take() {
            self.timers.cancel(id);
        }
        let slot = &mut self.slots[index];
        slot.confirming = false;
        slot.content = payload.text.clone();
        true
    }

    /// Empty the slot, cancelling any in-flight confirmation.
    pub fn clear(&mut self, index: usize) {
        if let Some(id) = self.slots[index].confirm_task.take() {
            self.timers.cancel(id);
        }
        let slot = &mut self.slots[index];
        slot.confirming = false;
        slot.content.clear();
    }

    /// Start the acknowledgement window. No-op while the slot is empty or a
    /// confirmation is already running.
    pub fn confirm(&mut self, index: usize, now: Instant) -> bool {
        {
            let slot = &self.slots[index];
            if slot.content.is_empty() || slot.confirming {
                return false;
            }
        }
        let id = self.timers.schedule(now + self.confirm_delay, index);
        let slot = &mut self.slots[index];
        slot.confirming = true;
        slot.confirm_task = Some(id);
        true
    }

    /// Apply elapsed acknowledgement windows: the slot empties and leaves
    /// the confirming state. Stale timers (superseded by a clear or a newer
    /// drop) are dropped on the floor.
    pub fn tick(&mut self, now: Instant) {
        for (id, index) in self.timers.fire_due(now) {
            let slot = &mut self.slots[index];
            if slot.confirm_task == Some(id) {
                slot.confirm_task = None;
                slot.confirming = false;
                slot.content.clear();
            }
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[derive(Debug, Default)]
struct LookupSlot {
    content: String,
    loading: bool,
    analysis: Option<&'static str>,
    lookup_task: Option<TaskId>,
}

/// Slots that resolve their dropped text against a static annotation table
/// after a fixed simulated latency.
#[derive(Debug)]
pub struct LookupSlots {
    slots: Vec<LookupSlot>,
    accepts: Vec<PayloadKind>,
    table: &'static [AnnotationEntry],
    timers: Scheduler<(usize, String)>,
    lookup_delay: Duration,
}

impl LookupSlots {
    pub fn new(
        count: usize,
        accepts: Vec<PayloadKind>,
        table: &'static [AnnotationEntry],
        lookup_delay: Duration,
    ) -> Self {
        Self {
            slots: (0..count).map(|_| LookupSlot::default()).collect(),
            accepts,
            table,
            timers: Scheduler::new(),
            lookup_delay,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn accept_kinds(&self) -> &[PayloadKind] {
        &self.accepts
    }

    pub fn accepts(&self, kind: PayloadKind) -> bool {
        self.accepts.contains(&kind)
    }

    pub fn content(&self, index: usize) -> &str {
        &self.slots[index].content
    }

    pub fn is_loading(&self, index: usize) -> bool {
        self.slots[index].loading
    }

    pub fn analysis(&self, index: usize) -> Option<&'static str> {
        self.slots[index].analysis
    }

    /// Text of every filled slot, for marking dropped highlights in the
    /// passage.
    pub fn contents(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| !slot.content.is_empty())
            .map(|slot| slot.content.as_str())
            .collect()
    }

    /// Accept a payload, replace the slot content and schedule exactly one
    /// lookup of the dropped text. A drop while a lookup is still pending
    /// supersedes it; the stale result is never applied.
    pub fn drop_payload(&mut self, index: usize, payload: &DragPayload, now: Instant) -> bool {
        if !self.accepts(payload.kind) {
            return false;
        }
        if let Some(id) = self.slots[index].lookup_task.take() {
            self.timers.cancel(id);
        }
        let id = self
            .timers
            .schedule(now + self.lookup_delay, (index, payload.text.clone()));
        let slot = &mut self.slots[index];
        slot.content = payload.text.clone();
        slot.loading = true;
        slot.analysis = None;
        slot.lookup_task = Some(id);
        true
    }

    /// Empty the slot and drop any pending lookup.
    pub fn clear(&mut self, index: usize) {
        if let Some(id) = self.slots[index].lookup_task.take() {
            self.timers.cancel(id);
        }
        let slot = &mut self.slots[index];
        slot.content.clear();
        slot.loading = false;
        slot.analysis = None;
    }

    /// Resolve elapsed lookups. A found entry replaces the loading
    /// indicator with its analysis; an unknown sentence just clears the
    /// loading flag and the raw text stays visible.
    pub fn tick(&mut self, now: Instant) {
        for (id, (index, text)) in self.timers.fire_due(now) {
            let slot = &mut self.slots[index];
            if slot.lookup_task == Some(id) {
                slot.lookup_task = None;
                slot.loading = false;
                slot.analysis = lookup::find_analysis(self.table, &text);
            }
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIRM: Duration = Duration::from_millis(1500);
    const LOOKUP: Duration = Duration::from_millis(2000);

    const TABLE: [AnnotationEntry; 1] = [AnnotationEntry {
        original: "A known sentence.",
        analysis: "the analysis\nwith a second line",
    }];

    fn confirm_slots() -> ConfirmSlots {
        ConfirmSlots::new(
            3,
            vec![PayloadKind::Phrase, PayloadKind::SelectedText],
            CONFIRM,
        )
    }

    fn lookup_slots() -> LookupSlots {
        LookupSlots::new(
            2,
            vec![PayloadKind::HighlightedSentence, PayloadKind::SelectedText],
            &TABLE,
            LOOKUP,
        )
    }

    #[test]
    fn disallowed_kind_is_rejected_without_effect() {
        let mut slots = confirm_slots();
        let rejected = DragPayload::highlighted("nope");
        assert!(!slots.drop_payload(0, &rejected));
        assert_eq!(slots.content(0), "");

        let mut reading = lookup_slots();
        let rejected = DragPayload::phrase("nope");
        assert!(!reading.drop_payload(0, &rejected, Instant::now()));
        assert_eq!(reading.content(0), "");
        assert!(!reading.is_loading(0));
    }

    #[test]
    fn drop_overwrites_unconditionally() {
        let mut slots = confirm_slots();
        slots.drop_payload(1, &DragPayload::phrase("first"));
        slots.drop_payload(1, &DragPayload::selected("second"));
        assert_eq!(slots.content(1), "second");
        assert_eq!(slots.content(0), "");
    }

    #[test]
    fn confirm_on_empty_slot_is_a_no_op() {
        let mut slots = confirm_slots();
        assert!(!slots.confirm(0, Instant::now()));
        assert!(!slots.is_confirming(0));
        assert_eq!(slots.next_due(), None);
    }

    #[test]
    fn double_confirm_starts_a_single_window() {
        let t0 = Instant::now();
        let mut slots = confirm_slots();
        slots.drop_payload(0, &DragPayload::phrase("text"));
        assert!(slots.confirm(0, t0));
        assert!(!slots.confirm(0, t0 + Duration::from_millis(500)));
        // The single window still ends 1500 ms after the first confirm.
        slots.tick(t0 + CONFIRM);
        assert_eq!(slots.content(0), "");
        assert!(!slots.is_confirming(0));
    }

    #[test]
    fn confirm_clears_slot_after_exactly_the_delay() {
        let t0 = Instant::now();
        let mut slots = confirm_slots();
        slots.drop_payload(0, &DragPayload::phrase("As far as I am concerned"));
        assert_eq!(slots.content(0), "As far as I am concerned");
        assert!(slots.confirm(0, t0));
        assert!(slots.is_confirming(0));

        slots.tick(t0 + CONFIRM - Duration::from_millis(1));
        assert!(slots.is_confirming(0));
        assert_eq!(slots.content(0), "As far as I am concerned");

        slots.tick(t0 + CONFIRM);
        assert!(!slots.is_confirming(0));
        assert_eq!(slots.content(0), "");
    }

    #[test]
    fn clear_cancels_a_running_confirmation() {
        let t0 = Instant::now();
        let mut slots = confirm_slots();
        slots.drop_payload(0, &DragPayload::phrase("text"));
        slots.confirm(0, t0);
        slots.clear(0);
        assert!(!slots.is_confirming(0));

        // The old window elapsing must not touch the slot again.
        slots.drop_payload(0, &DragPayload::phrase("newer"));
        slots.tick(t0 + CONFIRM);
        assert_eq!(slots.content(0), "newer");
    }

    #[test]
    fn drop_during_confirmation_supersedes_the_auto_clear() {
        let t0 = Instant::now();
        let mut slots = confirm_slots();
        slots.drop_payload(0, &DragPayload::phrase("old"));
        slots.confirm(0, t0);
        slots.drop_payload(0, &DragPayload::phrase("new"));
        assert!(!slots.is_confirming(0));

        slots.tick(t0 + CONFIRM + Duration::from_millis(10));
        assert_eq!(slots.content(0), "new");
    }

    #[test]
    fn known_sentence_resolves_to_its_analysis() {
        let t0 = Instant::now();
        let mut slots = lookup_slots();
        let payload = DragPayload::highlighted("A known sentence.");
        assert!(slots.drop_payload(0, &payload, t0));
        assert!(slots.is_loading(0));
        assert_eq!(slots.analysis(0), None);

        slots.tick(t0 + LOOKUP - Duration::from_millis(1));
        assert!(slots.is_loading(0));

        slots.tick(t0 + LOOKUP);
        assert!(!slots.is_loading(0));
        assert_eq!(slots.analysis(0), Some("the analysis\nwith a second line"));
        assert_eq!(slots.content(0), "A known sentence.");
    }

    #[test]
    fn unknown_sentence_keeps_raw_text_and_no_analysis() {
        let t0 = Instant::now();
        let mut slots = lookup_slots();
        slots.drop_payload(1, &DragPayload::selected("Unknown words"), t0);

        slots.tick(t0 + LOOKUP);
        assert!(!slots.is_loading(1));
        assert_eq!(slots.analysis(1), None);
        assert_eq!(slots.content(1), "Unknown words");
    }

    #[test]
    fn newer_drop_supersedes_a_pending_lookup() {
        let t0 = Instant::now();
        let mut slots = lookup_slots();
        slots.drop_payload(0, &DragPayload::highlighted("A known sentence."), t0);
        // Second drop one second in; the first lookup would resolve at 2 s.
        let t1 = t0 + Duration::from_secs(1);
        slots.drop_payload(0, &DragPayload::selected("Unknown words"), t1);

        slots.tick(t0 + LOOKUP);
        // Still loading: only the superseding lookup (due at t1 + 2 s) counts.
        assert!(slots.is_loading(0));
        assert_eq!(slots.analysis(0), None);

        slots.tick(t1 + LOOKUP);
        assert!(!slots.is_loading(0));
        assert_eq!(slots.analysis(0), None);
        assert_eq!(slots.content(0), "Unknown words");
    }

    #[test]
    fn contents_lists_filled_slots_only() {
        let t0 = Instant::now();
        let mut slots = lookup_slots();
        slots.drop_payload(1, &DragPayload::highlighted("A known sentence."), t0);
        assert_eq!(slots.contents(), vec!["A known sentence."]);
    }
}
