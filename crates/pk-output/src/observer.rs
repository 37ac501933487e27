//! `TraceObserver<W>`: bridges `KernelObserver` to a `TraceWriter`.

use std::collections::{BTreeMap, HashSet};

use pk_core::{ContainerId, ProcessId, ResourceId, SimTime};
use pk_kernel::{KernelObserver, Signal};

use crate::row::{AlertRow, VehicleRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`KernelObserver`] that writes one [`VehicleRow`] per finished process
/// and one [`AlertRow`] per low-level signal.
///
/// Processes passed to [`ignoring`][Self::ignoring] (the monitor and the
/// generator, typically) are left out of the vehicle trace.  Rows for
/// processes still in flight are written by [`finish`][Self::finish].
///
/// Errors from the writer are stored internally because observer callbacks
/// have no return value.  Check with [`take_error`][Self::take_error] once
/// the run returns.
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    ignored:    HashSet<ProcessId>,
    open:       BTreeMap<ProcessId, VehicleRow>,
    started:    u64,
    finished:   u64,
    alerts:     u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            ignored:    HashSet::new(),
            open:       BTreeMap::new(),
            started:    0,
            finished:   0,
            alerts:     0,
            last_error: None,
        }
    }

    /// Leave these processes out of the vehicle trace.
    pub fn ignoring(mut self, pids: impl IntoIterator<Item = ProcessId>) -> Self {
        self.ignored.extend(pids);
        self
    }

    /// Vehicles that took their first step.
    pub fn vehicles_started(&self) -> u64 {
        self.started
    }

    pub fn vehicles_finished(&self) -> u64 {
        self.finished
    }

    /// Vehicles started but not finished.
    pub fn vehicles_in_flight(&self) -> usize {
        self.open.len()
    }

    pub fn alerts(&self) -> u64 {
        self.alerts
    }

    /// Write rows for vehicles still in flight and close the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        for (_, row) in std::mem::take(&mut self.open) {
            self.writer.write_vehicle(&row)?;
        }
        self.writer.finish()
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> KernelObserver for TraceObserver<W> {
    fn on_start(&mut self, now: SimTime, process: ProcessId, name: &str) {
        if self.ignored.contains(&process) {
            return;
        }
        self.started += 1;
        self.open.insert(process, VehicleRow {
            process:     process.0,
            name:        name.to_owned(),
            spawned_at:  now.units(),
            acquired_at: None,
            waited:      None,
            goods:       0,
            finished_at: None,
        });
    }

    fn on_acquire(&mut self, now: SimTime, process: ProcessId, _: ResourceId, requested_at: SimTime) {
        if let Some(row) = self.open.get_mut(&process) {
            if row.acquired_at.is_none() {
                row.acquired_at = Some(now.units());
                row.waited = Some(now.since(requested_at));
            }
        }
    }

    fn on_get(&mut self, _: SimTime, process: ProcessId, _: ContainerId, amount: u64, _: u64) {
        if let Some(row) = self.open.get_mut(&process) {
            row.goods += amount;
        }
    }

    fn on_signal(&mut self, now: SimTime, _: ProcessId, signal: &Signal) {
        let Signal::LowLevel { container, level, capacity, threshold_pct } = *signal;
        self.alerts += 1;
        let row = AlertRow {
            time: now.units(),
            container: container.0,
            level,
            capacity,
            threshold_pct,
        };
        let result = self.writer.write_alert(&row);
        self.store_err(result);
    }

    fn on_finish(&mut self, now: SimTime, process: ProcessId, _: &str) {
        if let Some(mut row) = self.open.remove(&process) {
            row.finished_at = Some(now.units());
            self.finished += 1;
            let result = self.writer.write_vehicle(&row);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _: SimTime) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
