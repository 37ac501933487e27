//! `Container`: a bounded numeric level with blocking withdrawal.
//!
//! # Queueing policy
//!
//! Withdrawals are served strictly in arrival order.  After every deposit the
//! queue is scanned from the head, and scanning stops at the first request
//! that the level cannot cover in full.  A large request at the head
//! therefore holds back smaller ones behind it (head-of-line blocking), and a
//! new request never overtakes a queued one even when it would fit.

use std::collections::VecDeque;

use pk_core::{ContainerId, ProcessId, SimTime};

use crate::{KernelError, KernelResult};

/// A queued withdrawal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GetRequest {
    pub process:      ProcessId,
    pub amount:       u64,
    pub requested_at: SimTime,
}

/// Invariant: `level ≤ capacity`.
#[derive(Debug)]
pub struct Container {
    id:        ContainerId,
    capacity:  u64,
    level:     u64,
    get_queue: VecDeque<GetRequest>,
    /// Level at creation plus every deposit as applied (after clamping).
    supplied:  u64,
    /// Sum of every withdrawal completed.
    granted:   u64,
}

impl Container {
    pub(crate) fn new(id: ContainerId, capacity: u64, level: u64) -> KernelResult<Self> {
        if level > capacity {
            return Err(KernelError::InvalidLevel { level, capacity });
        }
        Ok(Self {
            id,
            capacity,
            level,
            get_queue: VecDeque::new(),
            supplied: level,
            granted: 0,
        })
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    /// Pending withdrawals, head first.
    pub fn queued(&self) -> impl Iterator<Item = &GetRequest> + '_ {
        self.get_queue.iter()
    }

    pub fn supplied(&self) -> u64 {
        self.supplied
    }

    pub fn granted(&self) -> u64 {
        self.granted
    }

    /// Level as a percentage of capacity.  An empty-capacity container
    /// reads as 0 %.
    pub fn fill_pct(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.level as f64 / self.capacity as f64 * 100.0
        }
    }

    /// Withdraw `amount` now if possible; otherwise queue the request.
    ///
    /// Returns `Ok(true)` when the withdrawal completed immediately.
    pub(crate) fn get(&mut self, process: ProcessId, amount: u64, now: SimTime) -> KernelResult<bool> {
        if amount > self.capacity {
            return Err(KernelError::InvalidAmount {
                container: self.id,
                amount,
                capacity: self.capacity,
            });
        }
        if self.get_queue.is_empty() && self.level >= amount {
            self.withdraw(amount);
            return Ok(true);
        }
        self.get_queue.push_back(GetRequest { process, amount, requested_at: now });
        Ok(false)
    }

    /// Deposit `amount` (clamped so the level never exceeds capacity), then
    /// serve queued withdrawals from the head.
    ///
    /// Returns the requests completed by this deposit, in queue order.
    pub(crate) fn put(&mut self, amount: u64) -> Vec<GetRequest> {
        let accepted = amount.min(self.capacity - self.level);
        self.level += accepted;
        self.supplied += accepted;

        let mut served = Vec::new();
        while let Some(head) = self.get_queue.front() {
            if head.amount > self.level {
                break;
            }
            let head = *head;
            self.get_queue.pop_front();
            self.withdraw(head.amount);
            served.push(head);
        }
        served
    }

    fn withdraw(&mut self, amount: u64) {
        self.level -= amount;
        self.granted += amount;
    }
}
