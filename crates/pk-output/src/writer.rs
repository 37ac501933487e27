//! The `TraceWriter` trait implemented by trace backends.

use crate::{AlertRow, OutputResult, VehicleRow};

/// Sink for trace rows.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    fn write_vehicle(&mut self, row: &VehicleRow) -> OutputResult<()>;

    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()>;

    /// Push buffered rows to the underlying files without closing them.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
