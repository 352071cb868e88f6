//! Timed cues evaluated once per frame
//!
//! A list of `(deadline, event)` pairs kept sorted by deadline. Entries with
//! equal deadlines fire in insertion order.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Entry<E> {
    at: f64,
    seq: u64,
    event: E,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline<E> {
    entries: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Queue `event` to fire once the clock reaches `at`
    pub fn schedule(&mut self, at: f64, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        // Insert after every entry due at or before `at` (keeps FIFO on ties)
        let idx = self.entries.partition_point(|e| e.at <= at);
        self.entries.insert(idx, Entry { at, seq, event });
    }

    /// Remove and return every event due at `now`, earliest first
    pub fn pop_due(&mut self, now: f64) -> Vec<E> {
        let due = self.entries.partition_point(|e| e.at <= now);
        self.entries.drain(..due).map(|e| e.event).collect()
    }

    /// Drop pending events that fail the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&E) -> bool) {
        self.entries.retain(|e| keep(&e.event));
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.entries.first().map(|e| e.at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
