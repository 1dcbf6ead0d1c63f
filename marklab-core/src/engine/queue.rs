//! Event queues — index cursors over pre-sorted event sequences.
//!
//! Mutable pop-from-the-front lists are modeled as a cursor over a vector
//! sorted once at construction. The sort is stable, so same-date events keep
//! their original order, and defensive: callers are not trusted to have
//! pre-sorted their collections.

use chrono::NaiveDate;
use tracing::warn;

/// One of the trade's three event streams, consumed in date order.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
    cursor: usize,
    date_of: fn(&T) -> NaiveDate,
}

impl<T> EventQueue<T> {
    /// Build from an optional collection (absent means empty), sorting by the
    /// event's date key when the caller's ordering cannot be verified.
    pub fn new(events: Option<Vec<T>>, date_of: fn(&T) -> NaiveDate) -> Self {
        let mut events = events.unwrap_or_default();
        if !events.windows(2).all(|w| date_of(&w[0]) <= date_of(&w[1])) {
            warn!("event stream not sorted by date, sorting defensively");
            events.sort_by_key(date_of);
        }
        Self {
            events,
            cursor: 0,
            date_of,
        }
    }

    /// Pop the head if it is due on or before `day`. Each event is yielded
    /// exactly once across the whole replay.
    pub fn pop_due(&mut self, day: NaiveDate) -> Option<&T> {
        let head = self.events.get(self.cursor)?;
        if (self.date_of)(head) <= day {
            self.cursor += 1;
            Some(head)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cursor >= self.events.len()
    }

    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}
