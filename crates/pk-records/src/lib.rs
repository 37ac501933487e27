//! `pk-records`: the street survey as typed records.
//!
//! # Pipeline
//!
//! ```text
//! survey.csv ──load_records_csv──▶ Vec<StreetRecord> ──sort_by_timestamp──▶ generator
//! ```
//!
//! Categorical columns become enums at load time; a row with an unknown tag
//! or a malformed time is rejected there, so nothing downstream has to
//! handle raw strings.

pub mod error;
pub mod loader;
pub mod order;
pub mod record;
pub mod tags;

#[cfg(test)]
mod tests;

pub use error::{RecordError, RecordResult};
pub use loader::{load_records_csv, load_records_reader};
pub use order::{inter_arrival_delays, sort_by_timestamp};
pub use record::{ClockTime, EventKind, StreetRecord};
pub use tags::{Disruption, Purpose, StreetSide, VehicleClass};
