//! `pk-core`: foundational types for the `curbside` parking simulator.
//!
//! This crate is a dependency of every other `pk-*` crate.  It has no `pk-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ProcessId`, `ResourceId`, `ContainerId`              |
//! | [`time`]        | `SimTime` (virtual clock value)                       |
//! | [`rng`]         | `SimRng` (seeded, explicitly threaded)                |
//! | [`config`]      | `SimConfig`, `Spacing`, TOML loading + validation     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, Spacing};
pub use error::{CoreError, CoreResult};
pub use ids::{ContainerId, ProcessId, ResourceId};
pub use rng::SimRng;
pub use time::SimTime;
