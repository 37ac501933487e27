//! `pk-kernel`: the discrete-event simulation kernel.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`event`]     | `Event`, `EventKey`, `Wake`                               |
//! | [`queue`]     | `EventQueue` (`BTreeMap<(due, seq), Event>` + clock)      |
//! | [`process`]   | `Process` trait, `Step`, `Wait`                           |
//! | [`context`]   | `Context`: what a running process may do                  |
//! | [`resource`]  | `Resource`: N slots, FIFO waiters                         |
//! | [`container`] | `Container`: bounded level, head-of-line withdrawals      |
//! | [`kernel`]    | `Kernel`, `RunSummary`: the scheduler loop                |
//! | [`observer`]  | `KernelObserver`, `NoopObserver`, `Signal`                |
//! | [`error`]     | `KernelError`, `KernelResult<T>`                          |
//!
//! # Dispatch model (summary)
//!
//! ```text
//! while queue.peek_due() < until:
//!   event   = queue.pop_next()            // now = event.due
//!   process = slots[event.target]
//!   loop:
//!     step = process.resume(ctx, wake)
//!     Done            → release leftovers, drop the process
//!     Wait(Timeout d) → schedule(now + d); suspend
//!     Wait(Acquire r) → free slot?   take it, resume again now
//!                       else         queue on r; suspend
//!     Wait(Get c, n)  → level ≥ n and nobody queued?  withdraw, resume again now
//!                       else                          queue on c; suspend
//! ```
//!
//! Releases and deposits never suspend the caller.  They schedule the
//! processes they unblock as ordinary events at the current time, so a
//! woken process runs after the releasing one has finished its step.

pub mod container;
pub mod context;
pub mod error;
pub mod event;
pub mod kernel;
pub mod observer;
pub mod process;
pub mod queue;
pub mod resource;


pub use container::{Container, GetRequest};
pub use context::Context;
pub use error::{KernelError, KernelResult};
pub use event::{Event, EventKey, Wake};
pub use kernel::{Kernel, RunSummary};
pub use observer::{KernelObserver, NoopObserver, Signal};
pub use process::{Process, Step, Wait};
pub use queue::EventQueue;
pub use resource::{Resource, Waiter};
