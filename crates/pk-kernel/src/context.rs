//! The handle a process uses to act on the kernel during a step.

use pk_core::{ContainerId, ProcessId, ResourceId, SimTime};

use crate::kernel::World;
use crate::{KernelObserver, KernelResult, Process, Signal};

/// Mutable access to the kernel for the process currently running.
///
/// Only non-suspending operations live here.  Anything that may have to
/// wait (timeouts, acquiring a slot, withdrawing goods) is requested by
/// returning a [`Wait`][crate::Wait] from [`Process::resume`].
pub struct Context<'a> {
    pub(crate) world:    &'a mut World,
    pub(crate) observer: &'a mut dyn KernelObserver,
    pub(crate) pid:      ProcessId,
}

impl Context<'_> {
    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.world.queue.now()
    }

    /// The running process.
    #[inline]
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Give back a slot of `resource`.  The head waiter, if any, receives it
    /// and resumes at the current time.
    pub fn release(&mut self, resource: ResourceId) -> KernelResult<()> {
        self.world.release(self.pid, resource, self.observer)
    }

    /// `true` if the running process holds a slot of `resource`.
    pub fn holds(&self, resource: ResourceId) -> bool {
        self.world.holds(self.pid, resource)
    }

    /// Deposit `amount` into `container` and serve queued withdrawals.
    pub fn put(&mut self, container: ContainerId, amount: u64) -> KernelResult<()> {
        self.world.put(self.pid, container, amount, self.observer)
    }

    pub fn level(&self, container: ContainerId) -> KernelResult<u64> {
        Ok(self.world.container(container)?.level())
    }

    pub fn capacity(&self, container: ContainerId) -> KernelResult<u64> {
        Ok(self.world.container(container)?.capacity())
    }

    /// Start a new process at the current time.  The caller keeps running;
    /// the new process takes its first step when its event is dispatched.
    pub fn spawn<P: Process>(&mut self, process: P) -> KernelResult<ProcessId> {
        self.world.spawn(Box::new(process), 0.0)
    }

    /// Start a new process `delay` units from now.
    pub fn spawn_after<P: Process>(&mut self, process: P, delay: f64) -> KernelResult<ProcessId> {
        self.world.spawn(Box::new(process), delay)
    }

    /// Report a notable condition to the observer.
    pub fn signal(&mut self, signal: Signal) {
        let now = self.now();
        self.observer.on_signal(now, self.pid, &signal);
    }
}
