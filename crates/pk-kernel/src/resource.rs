//! `Resource`: a pool of interchangeable slots with a FIFO wait queue.

use std::collections::VecDeque;

use pk_core::{ProcessId, SimTime};

/// A queued acquisition request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Waiter {
    pub process:      ProcessId,
    pub requested_at: SimTime,
}

/// Invariant: `held ≤ capacity`, and `waiters` is non-empty only while
/// `held == capacity`.
#[derive(Debug)]
pub struct Resource {
    capacity: u32,
    held:     u32,
    waiters:  VecDeque<Waiter>,
}

impl Resource {
    pub(crate) fn new(capacity: u32) -> Self {
        Self { capacity, held: 0, waiters: VecDeque::new() }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Slots currently held.
    pub fn held(&self) -> u32 {
        self.held
    }

    /// Processes queued for a slot.
    pub fn waiting(&self) -> usize {
        self.waiters.len()
    }

    /// Queued process ids, head first.
    pub fn queue(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.waiters.iter().map(|w| w.process)
    }

    /// Take a slot if one is free.
    pub(crate) fn try_acquire(&mut self) -> bool {
        if self.held < self.capacity {
            self.held += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn enqueue(&mut self, process: ProcessId, now: SimTime) {
        self.waiters.push_back(Waiter { process, requested_at: now });
    }

    /// Give back one slot.
    ///
    /// With a non-empty queue the slot passes straight to the head waiter,
    /// which is returned; `held` is unchanged.  Otherwise `held` drops by one.
    pub(crate) fn release(&mut self) -> Option<Waiter> {
        debug_assert!(self.held > 0, "release on an idle resource");
        match self.waiters.pop_front() {
            Some(next) => Some(next),
            None => {
                self.held -= 1;
                None
            }
        }
    }
}
