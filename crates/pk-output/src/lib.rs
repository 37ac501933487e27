//! `pk-output`: trace writers for curbside runs.
//!
//! | File           | One row per                                      |
//! |----------------|--------------------------------------------------|
//! | `vehicles.csv` | vehicle (spawn, slot grant, wait, goods, finish) |
//! | `alerts.csv`   | low-level signal                                 |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `pk_kernel::KernelObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pk_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer).ignoring([scenario.monitor(), scenario.generator()]);
//! scenario.run(&mut obs)?;
//! obs.finish()?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{AlertRow, VehicleRow};
pub use writer::TraceWriter;
