use pk_core::{ContainerId, ProcessId, ResourceId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KernelError {
    /// Nothing left to dispatch.  This is how a run ends normally; `run`
    /// never surfaces it.
    #[error("no pending events")]
    EmptyQueue,

    #[error("requested {amount} units from {container} with capacity {capacity}")]
    InvalidAmount {
        container: ContainerId,
        amount:    u64,
        capacity:  u64,
    },

    #[error("delay {0} is negative or not finite")]
    NegativeDelay(f64),

    #[error("{0} is not registered")]
    UnknownResource(ResourceId),

    #[error("{0} is not registered")]
    UnknownContainer(ContainerId),

    #[error("{0} is not a live process")]
    UnknownProcess(ProcessId),

    #[error("{process} released {resource} without holding it")]
    NotHeld {
        process:  ProcessId,
        resource: ResourceId,
    },

    #[error("{process} requested {resource} while already holding a slot of it")]
    AlreadyHeld {
        process:  ProcessId,
        resource: ResourceId,
    },

    #[error("resource capacity must be at least 1")]
    InvalidCapacity,

    #[error("initial level {level} exceeds container capacity {capacity}")]
    InvalidLevel { level: u64, capacity: u64 },

    #[error("run horizon {0} is not finite")]
    InvalidHorizon(f64),

    #[error("no {0} ids left")]
    IdSpaceExhausted(&'static str),
}

impl KernelError {
    /// `true` for conditions that mark the normal end of a run rather than
    /// a fault.
    pub fn is_informational(&self) -> bool {
        matches!(self, KernelError::EmptyQueue)
    }
}

pub type KernelResult<T> = Result<T, KernelError>;
