//! The `Process` trait: a suspendable actor driven by the kernel.

use pk_core::{ContainerId, ResourceId};

use crate::{Context, KernelResult, Wake};

/// A condition a process waits on before its next step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Wait {
    /// Resume after this many time units.  Must be finite and `≥ 0`.
    Timeout(f64),

    /// Resume once a slot of the resource is held.  Granted immediately
    /// (without suspending) when a slot is free.
    Acquire(ResourceId),

    /// Resume once `amount` units have been withdrawn from the container.
    Get(ContainerId, u64),
}

/// What a process asks for at the end of a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    Wait(Wait),
    Done,
}

/// A unit of simulation logic that runs until it has to wait.
///
/// Implementors are explicit state machines: they keep a stage marker in
/// `self`, and each call to [`resume`][Self::resume] runs from the stored
/// stage to the next suspension point, updates the marker, and returns the
/// [`Wait`] it needs.  The kernel calls `resume` exactly once per satisfied
/// wait, passing the [`Wake`] that satisfied it.
///
/// Between two suspension points a process runs without interruption, so
/// any state it reads and writes through the [`Context`] is consistent.
///
/// # Example
///
/// ```rust,ignore
/// enum Stage { Start, Parked, Done }
///
/// struct Blink { stage: Stage }
///
/// impl Process for Blink {
///     fn name(&self) -> &str { "blink" }
///
///     fn resume(&mut self, ctx: &mut Context<'_>, _wake: Wake) -> KernelResult<Step> {
///         match self.stage {
///             Stage::Start => {
///                 self.stage = Stage::Parked;
///                 Ok(Step::Wait(Wait::Timeout(5.0)))
///             }
///             Stage::Parked | Stage::Done => {
///                 self.stage = Stage::Done;
///                 Ok(Step::Done)
///             }
///         }
///     }
/// }
/// ```
pub trait Process: 'static {
    /// Human-readable label used in logs and observer callbacks.
    fn name(&self) -> &str;

    /// Run the next step.
    ///
    /// Returning an error aborts the run: the kernel releases anything the
    /// process still holds and propagates the error out of
    /// [`Kernel::run`][crate::Kernel::run].
    fn resume(&mut self, ctx: &mut Context<'_>, wake: Wake) -> KernelResult<Step>;
}
