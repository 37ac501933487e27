//! Kernel observer trait for tracing and data collection.

use pk_core::{ContainerId, ProcessId, ResourceId, SimTime};

use crate::Event;

/// A domain-neutral notification raised by a process through
/// [`Context::signal`][crate::Context::signal].
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// A container's fill ratio is below a watch threshold.
    LowLevel {
        container:     ContainerId,
        level:         u64,
        capacity:      u64,
        threshold_pct: f64,
    },
}

/// Callbacks invoked by [`Kernel::run`][crate::Kernel::run] as events are
/// dispatched.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see state changes; they
/// cannot cause any.
pub trait KernelObserver {
    /// An event was popped and its process is about to resume.
    fn on_dispatch(&mut self, _event: &Event) {}

    /// A process runs its first step.
    fn on_start(&mut self, _now: SimTime, _process: ProcessId, _name: &str) {}

    /// `process` now holds a slot of `resource`.  `requested_at` equals
    /// `now` when the slot was free.
    fn on_acquire(
        &mut self,
        _now:          SimTime,
        _process:      ProcessId,
        _resource:     ResourceId,
        _requested_at: SimTime,
    ) {}

    fn on_release(&mut self, _now: SimTime, _process: ProcessId, _resource: ResourceId) {}

    /// `amount` units were withdrawn for `process`; `level` is the level
    /// right after the withdrawal.
    fn on_get(
        &mut self,
        _now:       SimTime,
        _process:   ProcessId,
        _container: ContainerId,
        _amount:    u64,
        _level:     u64,
    ) {}

    /// `amount` units were offered to the container; `level` is the level
    /// right after the deposit, before queued withdrawals are served.
    fn on_put(
        &mut self,
        _now:       SimTime,
        _process:   ProcessId,
        _container: ContainerId,
        _amount:    u64,
        _level:     u64,
    ) {}

    fn on_signal(&mut self, _now: SimTime, _process: ProcessId, _signal: &Signal) {}

    /// A process finished (or failed) and left the process table.
    fn on_finish(&mut self, _now: SimTime, _process: ProcessId, _name: &str) {}

    /// Called once when `run` returns successfully.
    fn on_run_end(&mut self, _now: SimTime) {}
}

/// A [`KernelObserver`] that does nothing.
pub struct NoopObserver;

impl KernelObserver for NoopObserver {}

/// Fan every callback out to two observers, left first.
impl<A: KernelObserver, B: KernelObserver> KernelObserver for (A, B) {
    fn on_dispatch(&mut self, event: &Event) {
        self.0.on_dispatch(event);
        self.1.on_dispatch(event);
    }

    fn on_start(&mut self, now: SimTime, process: ProcessId, name: &str) {
        self.0.on_start(now, process, name);
        self.1.on_start(now, process, name);
    }

    fn on_acquire(&mut self, now: SimTime, process: ProcessId, resource: ResourceId, requested_at: SimTime) {
        self.0.on_acquire(now, process, resource, requested_at);
        self.1.on_acquire(now, process, resource, requested_at);
    }

    fn on_release(&mut self, now: SimTime, process: ProcessId, resource: ResourceId) {
        self.0.on_release(now, process, resource);
        self.1.on_release(now, process, resource);
    }

    fn on_get(&mut self, now: SimTime, process: ProcessId, container: ContainerId, amount: u64, level: u64) {
        self.0.on_get(now, process, container, amount, level);
        self.1.on_get(now, process, container, amount, level);
    }

    fn on_put(&mut self, now: SimTime, process: ProcessId, container: ContainerId, amount: u64, level: u64) {
        self.0.on_put(now, process, container, amount, level);
        self.1.on_put(now, process, container, amount, level);
    }

    fn on_signal(&mut self, now: SimTime, process: ProcessId, signal: &Signal) {
        self.0.on_signal(now, process, signal);
        self.1.on_signal(now, process, signal);
    }

    fn on_finish(&mut self, now: SimTime, process: ProcessId, name: &str) {
        self.0.on_finish(now, process, name);
        self.1.on_finish(now, process, name);
    }

    fn on_run_end(&mut self, now: SimTime) {
        self.0.on_run_end(now);
        self.1.on_run_end(now);
    }
}
