//! `EventQueue`: the virtual clock and its pending resumptions.
//!
//! # Ordering
//!
//! Events live in a `BTreeMap<EventKey, Event>`.  `EventKey` orders by
//! `(due, seq)`, so `pop_first` always yields the earliest event and, among
//! events due at the same time, the one scheduled first.  Nothing about the
//! order depends on hashing or allocation addresses; two runs that schedule
//! the same events in the same order dispatch them identically.
//!
//! # Clock
//!
//! `now` moves only in [`EventQueue::pop_next`], which sets it to the popped
//! event's due time.  Because every event is scheduled at `now + delay` with
//! `delay ≥ 0`, `now` never decreases.

use std::collections::BTreeMap;

use pk_core::{ProcessId, SimTime};

use crate::{Event, EventKey, KernelError, KernelResult, Wake};

#[derive(Debug, Default)]
pub struct EventQueue {
    inner:    BTreeMap<EventKey, Event>,
    now:      SimTime,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule `target` to resume `delay` units from now.
    ///
    /// Rejects a negative, NaN, or infinite delay with
    /// [`KernelError::NegativeDelay`] before touching the queue.
    pub fn schedule(&mut self, delay: f64, target: ProcessId, wake: Wake) -> KernelResult<EventKey> {
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(KernelError::NegativeDelay(delay));
        }
        let event = Event {
            due: self.now.after(delay),
            seq: self.next_seq,
            target,
            wake,
        };
        self.next_seq += 1;
        let key = event.key();
        self.inner.insert(key, event);
        Ok(key)
    }

    /// Remove the earliest event and move the clock to its due time.
    pub fn pop_next(&mut self) -> KernelResult<Event> {
        let (_, event) = self.inner.pop_first().ok_or(KernelError::EmptyQueue)?;
        debug_assert!(event.due >= self.now, "event queue went back in time");
        self.now = event.due;
        Ok(event)
    }

    /// Due time of the earliest pending event, or `None` if empty.
    pub fn peek_due(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|k| k.due)
    }

    /// Sequence number the next scheduled event will receive.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
