//! The `Kernel` struct and its scheduler loop.

use log::{debug, trace, warn};

use pk_core::{ContainerId, ProcessId, ResourceId, SimTime};

use crate::{
    Container, Context, Event, EventQueue, KernelError, KernelObserver, KernelResult, Process,
    Resource, Step, Wait, Wake,
};

// ── Process table ─────────────────────────────────────────────────────────────

struct ProcessSlot {
    /// `None` only while the process is being resumed.
    process: Option<Box<dyn Process>>,
    name:    String,
    /// Resource slots currently held, in acquisition order.
    held:    Vec<ResourceId>,
}

/// All mutable kernel state.  Split from [`Kernel`] so a running process can
/// be lent a [`Context`] over it while its own box is checked out of the
/// process table.
#[derive(Default)]
pub(crate) struct World {
    pub(crate) queue: EventQueue,
    resources:        Vec<Resource>,
    containers:       Vec<Container>,
    /// Indexed by `ProcessId`; a slot becomes `None` when its process ends.
    /// Ids are never reused.
    slots:            Vec<Option<ProcessSlot>>,
    live:             usize,
}

impl World {
    fn slot_mut(&mut self, pid: ProcessId) -> KernelResult<&mut ProcessSlot> {
        self.slots
            .get_mut(pid.index())
            .and_then(Option::as_mut)
            .ok_or(KernelError::UnknownProcess(pid))
    }

    fn resource_mut(&mut self, id: ResourceId) -> KernelResult<&mut Resource> {
        self.resources.get_mut(id.index()).ok_or(KernelError::UnknownResource(id))
    }

    pub(crate) fn container(&self, id: ContainerId) -> KernelResult<&Container> {
        self.containers.get(id.index()).ok_or(KernelError::UnknownContainer(id))
    }

    fn container_mut(&mut self, id: ContainerId) -> KernelResult<&mut Container> {
        self.containers.get_mut(id.index()).ok_or(KernelError::UnknownContainer(id))
    }

    pub(crate) fn holds(&self, pid: ProcessId, resource: ResourceId) -> bool {
        matches!(
            self.slots.get(pid.index()),
            Some(Some(slot)) if slot.held.contains(&resource)
        )
    }

    pub(crate) fn spawn(&mut self, process: Box<dyn Process>, delay: f64) -> KernelResult<ProcessId> {
        let pid = ProcessId::try_from(self.slots.len())
            .map_err(|_| KernelError::IdSpaceExhausted("process"))?;
        self.queue.schedule(delay, pid, Wake::Start)?;
        self.slots.push(Some(ProcessSlot {
            name:    process.name().to_owned(),
            process: Some(process),
            held:    Vec::new(),
        }));
        self.live += 1;
        Ok(pid)
    }

    // ── Non-suspending operations ─────────────────────────────────────────

    pub(crate) fn release(
        &mut self,
        pid:      ProcessId,
        resource: ResourceId,
        observer: &mut dyn KernelObserver,
    ) -> KernelResult<()> {
        let slot = self.slot_mut(pid)?;
        let pos = slot
            .held
            .iter()
            .position(|&r| r == resource)
            .ok_or(KernelError::NotHeld { process: pid, resource })?;
        slot.held.remove(pos);
        self.hand_back(pid, resource, observer)
    }

    /// Return one slot to `resource`, passing it to the head waiter if any.
    /// The caller has already removed it from `pid`'s held list.
    fn hand_back(
        &mut self,
        pid:      ProcessId,
        resource: ResourceId,
        observer: &mut dyn KernelObserver,
    ) -> KernelResult<()> {
        let now = self.queue.now();
        let handoff = self.resource_mut(resource)?.release();
        debug!("{now} {pid} released {resource}");
        observer.on_release(now, pid, resource);

        if let Some(next) = handoff {
            self.slot_mut(next.process)?.held.push(resource);
            self.queue.schedule(0.0, next.process, Wake::Granted(resource))?;
            debug!(
                "{now} {resource} handed to {} after {:.1} waiting",
                next.process,
                now.since(next.requested_at)
            );
            observer.on_acquire(now, next.process, resource, next.requested_at);
        }
        Ok(())
    }

    pub(crate) fn put(
        &mut self,
        pid:       ProcessId,
        container: ContainerId,
        amount:    u64,
        observer:  &mut dyn KernelObserver,
    ) -> KernelResult<()> {
        let now = self.queue.now();
        let c = self.container_mut(container)?;
        let served = c.put(amount);
        let mut level = c.level() + served.iter().map(|r| r.amount).sum::<u64>();
        observer.on_put(now, pid, container, amount, level);

        for request in served {
            level -= request.amount;
            self.queue.schedule(0.0, request.process, Wake::Filled(container, request.amount))?;
            debug!("{now} {} withdrew {} from {container}", request.process, request.amount);
            observer.on_get(now, request.process, container, request.amount, level);
        }
        Ok(())
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Register `wait` for `pid`.  Returns the wake to resume with right away
    /// if the condition already holds; `None` if the process must suspend.
    fn park(
        &mut self,
        pid:      ProcessId,
        wait:     Wait,
        observer: &mut dyn KernelObserver,
    ) -> KernelResult<Option<Wake>> {
        let now = self.queue.now();
        match wait {
            Wait::Timeout(delay) => {
                self.queue.schedule(delay, pid, Wake::Timeout)?;
                Ok(None)
            }
            Wait::Acquire(resource) => {
                if self.holds(pid, resource) {
                    return Err(KernelError::AlreadyHeld { process: pid, resource });
                }
                if self.resource_mut(resource)?.try_acquire() {
                    self.slot_mut(pid)?.held.push(resource);
                    debug!("{now} {pid} acquired {resource}");
                    observer.on_acquire(now, pid, resource, now);
                    Ok(Some(Wake::Granted(resource)))
                } else {
                    self.resource_mut(resource)?.enqueue(pid, now);
                    debug!("{now} {pid} queued for {resource}");
                    Ok(None)
                }
            }
            Wait::Get(container, amount) => {
                let c = self.container_mut(container)?;
                if c.get(pid, amount, now)? {
                    let level = c.level();
                    debug!("{now} {pid} withdrew {amount} from {container}");
                    observer.on_get(now, pid, container, amount, level);
                    Ok(Some(Wake::Filled(container, amount)))
                } else {
                    debug!("{now} {pid} queued for {amount} from {container}");
                    Ok(None)
                }
            }
        }
    }

    /// Step `process` until it suspends or finishes.  Returns `true` if it
    /// is now waiting.
    fn drive(
        &mut self,
        pid:      ProcessId,
        process:  &mut dyn Process,
        mut wake: Wake,
        observer: &mut dyn KernelObserver,
    ) -> KernelResult<bool> {
        loop {
            let step = {
                let mut ctx = Context { world: &mut *self, observer: &mut *observer, pid };
                process.resume(&mut ctx, wake)?
            };
            match step {
                Step::Done => return Ok(false),
                Step::Wait(wait) => match self.park(pid, wait, observer)? {
                    Some(immediate) => wake = immediate,
                    None => return Ok(true),
                },
            }
        }
    }

    fn dispatch(&mut self, event: Event, observer: &mut dyn KernelObserver) -> KernelResult<()> {
        let pid = event.target;
        let slot = self.slot_mut(pid)?;
        let mut process = slot.process.take().ok_or(KernelError::UnknownProcess(pid))?;
        if event.wake == Wake::Start {
            observer.on_start(event.due, pid, &slot.name);
        }

        match self.drive(pid, process.as_mut(), event.wake, observer) {
            Ok(true) => {
                self.slot_mut(pid)?.process = Some(process);
                Ok(())
            }
            Ok(false) => self.terminate(pid, observer),
            Err(e) => {
                if let Err(cleanup) = self.terminate(pid, observer) {
                    warn!("cleanup of failed {pid} also failed: {cleanup}");
                }
                Err(e)
            }
        }
    }

    /// Remove a finished process, returning any slots it still holds.
    fn terminate(&mut self, pid: ProcessId, observer: &mut dyn KernelObserver) -> KernelResult<()> {
        let now = self.queue.now();
        let held = std::mem::take(&mut self.slot_mut(pid)?.held);
        for resource in held {
            warn!("{now} {pid} ended while holding {resource}; releasing it");
            self.hand_back(pid, resource, observer)?;
        }
        if let Some(slot) = self.slots[pid.index()].take() {
            self.live -= 1;
            trace!("{now} {pid} ({}) finished", slot.name);
            observer.on_finish(now, pid, &slot.name);
        }
        Ok(())
    }
}

// ── Kernel ────────────────────────────────────────────────────────────────────

/// Outcome of [`Kernel::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Events dispatched during this call.
    pub dispatched:      u64,
    /// Clock value when the run stopped (time of the last dispatched event).
    pub final_time:      SimTime,
    /// `true` if events at or past the horizon were left pending; `false`
    /// if the queue drained.
    pub horizon_reached: bool,
    pub live_processes:  usize,
    pub pending_events:  usize,
}

/// The discrete-event kernel.
///
/// Owns the virtual clock, the event queue, every resource and container,
/// and the table of live processes.  Execution is single-threaded and
/// cooperative: exactly one process step runs at a time, and control only
/// changes hands when a process returns a [`Wait`] or finishes.
///
/// # Example
///
/// ```rust,ignore
/// let mut kernel = Kernel::new();
/// let street = kernel.add_resource(2)?;
/// let goods  = kernel.add_container(50, 50)?;
/// kernel.spawn(MyProcess::new(street, goods))?;
/// let summary = kernel.run(SimTime::new(10_000.0), &mut NoopObserver)?;
/// ```
#[derive(Default)]
pub struct Kernel {
    world: World,
}

impl Kernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource with `capacity` interchangeable slots.
    pub fn add_resource(&mut self, capacity: u32) -> KernelResult<ResourceId> {
        if capacity == 0 {
            return Err(KernelError::InvalidCapacity);
        }
        let id = ResourceId::try_from(self.world.resources.len())
            .map_err(|_| KernelError::IdSpaceExhausted("resource"))?;
        self.world.resources.push(Resource::new(capacity));
        Ok(id)
    }

    /// Register a container holding `level` of `capacity` units.
    pub fn add_container(&mut self, capacity: u64, level: u64) -> KernelResult<ContainerId> {
        let id = ContainerId::try_from(self.world.containers.len())
            .map_err(|_| KernelError::IdSpaceExhausted("container"))?;
        self.world.containers.push(Container::new(id, capacity, level)?);
        Ok(id)
    }

    /// Start `process` at the current time.
    pub fn spawn<P: Process>(&mut self, process: P) -> KernelResult<ProcessId> {
        self.world.spawn(Box::new(process), 0.0)
    }

    /// Start `process` `delay` units from now.
    pub fn spawn_after<P: Process>(&mut self, process: P, delay: f64) -> KernelResult<ProcessId> {
        self.world.spawn(Box::new(process), delay)
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.world.queue.now()
    }

    /// Dispatch the single earliest event.
    ///
    /// Fails with [`KernelError::EmptyQueue`] when nothing is pending.
    /// Returns the new clock value.
    pub fn advance<O: KernelObserver>(&mut self, observer: &mut O) -> KernelResult<SimTime> {
        let event = self.world.queue.pop_next()?;
        trace!("{} dispatch #{} {} ({})", event.due, event.seq, event.target, event.wake);
        observer.on_dispatch(&event);
        self.world.dispatch(event, observer)?;
        Ok(self.now())
    }

    /// Dispatch events while the earliest one is due strictly before
    /// `until`.  Stops without error when the queue drains.
    ///
    /// Processes still waiting when the run stops stay suspended.
    pub fn run<O: KernelObserver>(&mut self, until: SimTime, observer: &mut O) -> KernelResult<RunSummary> {
        if !until.units().is_finite() {
            return Err(KernelError::InvalidHorizon(until.units()));
        }
        let mut dispatched = 0;
        let horizon_reached = loop {
            match self.world.queue.peek_due() {
                None => break false,
                Some(due) if due >= until => break true,
                Some(_) => {
                    self.advance(observer)?;
                    dispatched += 1;
                }
            }
        };
        observer.on_run_end(self.now());
        Ok(RunSummary {
            dispatched,
            final_time: self.now(),
            horizon_reached,
            live_processes: self.world.live,
            pending_events: self.world.queue.len(),
        })
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.world.resources.get(id.index())
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.world.container(id).ok()
    }

    /// Processes spawned and not yet finished (running, scheduled, or
    /// waiting).
    pub fn live_processes(&self) -> usize {
        self.world.live
    }

    pub fn pending_events(&self) -> usize {
        self.world.queue.len()
    }

    pub fn is_live(&self, pid: ProcessId) -> bool {
        matches!(self.world.slots.get(pid.index()), Some(Some(_)))
    }

    /// `true` if `pid` holds a slot of `resource`.
    pub fn holds(&self, pid: ProcessId, resource: ResourceId) -> bool {
        self.world.holds(pid, resource)
    }
}
