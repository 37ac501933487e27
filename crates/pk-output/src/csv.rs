//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicles.csv`
//! - `alerts.csv`
//!
//! Times are virtual time units.  Optional fields are written empty.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AlertRow, OutputResult, VehicleRow};

pub const VEHICLE_HEADER: [&str; 7] =
    ["process", "name", "spawned_at", "acquired_at", "waited", "goods", "finished_at"];

pub const ALERT_HEADER: [&str; 5] = ["time", "container", "level", "capacity", "threshold_pct"];

/// Writes the vehicle trace and the alert log to two CSV files.
pub struct CsvWriter {
    vehicles: Writer<File>,
    alerts:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut vehicles = Writer::from_path(dir.join("vehicles.csv"))?;
        vehicles.write_record(VEHICLE_HEADER)?;

        let mut alerts = Writer::from_path(dir.join("alerts.csv"))?;
        alerts.write_record(ALERT_HEADER)?;

        Ok(Self { vehicles, alerts, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl TraceWriter for CsvWriter {
    fn write_vehicle(&mut self, row: &VehicleRow) -> OutputResult<()> {
        self.vehicles.write_record(&[
            row.process.to_string(),
            row.name.clone(),
            row.spawned_at.to_string(),
            opt(row.acquired_at),
            opt(row.waited),
            row.goods.to_string(),
            opt(row.finished_at),
        ])?;
        Ok(())
    }

    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
        self.alerts.write_record(&[
            row.time.to_string(),
            row.container.to_string(),
            row.level.to_string(),
            row.capacity.to_string(),
            row.threshold_pct.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.vehicles.flush()?;
        self.alerts.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
