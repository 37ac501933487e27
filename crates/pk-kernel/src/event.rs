//! Kernel events: scheduled resumptions of a process.

use std::fmt;

use pk_core::{ContainerId, ProcessId, ResourceId, SimTime};

/// Why a process is being resumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// First step of a freshly spawned process.
    Start,
    /// A `Wait::Timeout` elapsed.
    Timeout,
    /// A slot of the resource now belongs to the process.
    Granted(ResourceId),
    /// The requested amount was withdrawn from the container on the
    /// process's behalf.
    Filled(ContainerId, u64),
}

impl fmt::Display for Wake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wake::Start => f.write_str("start"),
            Wake::Timeout => f.write_str("timeout"),
            Wake::Granted(r) => write!(f, "granted {r}"),
            Wake::Filled(c, amount) => write!(f, "filled {amount} from {c}"),
        }
    }
}

/// Queue ordering key: earliest `due` first, then lowest `seq`.
///
/// `seq` is assigned at schedule time from a strictly increasing counter,
/// so events due at the same instant run in the order they were scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventKey {
    pub due: SimTime,
    pub seq: u64,
}

/// A single pending resumption.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub due:    SimTime,
    pub seq:    u64,
    pub target: ProcessId,
    pub wake:   Wake,
}

impl Event {
    #[inline]
    pub fn key(&self) -> EventKey {
        EventKey { due: self.due, seq: self.seq }
    }
}
