//! The typed street event record.

use std::fmt;

use crate::{Disruption, Purpose, RecordError, StreetSide, VehicleClass};

/// Time of day, in whole seconds since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub u32);

impl ClockTime {
    /// Parse `HH:MM` or `HH:MM:SS`.
    pub fn parse(s: &str) -> Result<Self, RecordError> {
        let bad = || RecordError::Parse(format!("invalid time of day {s:?}: expected HH:MM[:SS]"));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(bad());
        }
        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| bad())?;
        }
        let [h, m, sec] = fields;
        if h > 23 || m > 59 || sec > 59 {
            return Err(bad());
        }
        Ok(ClockTime(h * 3_600 + m * 60 + sec))
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.0 / 3_600, (self.0 / 60) % 60, self.0 % 60)
    }
}

/// Whether a record marks a vehicle stopping or leaving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Arrival => "arrival",
            EventKind::Departure => "departure",
        })
    }
}

/// One observed stop event.  Read-only once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreetRecord {
    /// Survey row identifier.  Arrival and departure of the same stop share it.
    pub id:         String,
    pub kind:       EventKind,
    pub side:       StreetSide,
    pub vehicle:    VehicleClass,
    pub purpose:    Purpose,
    pub disruption: Disruption,
    pub started_at: ClockTime,
    pub ended_at:   Option<ClockTime>,
}

impl StreetRecord {
    /// The instant this record is ordered by: the start of parking for an
    /// arrival, its end for a departure.
    pub fn timestamp(&self) -> ClockTime {
        match self.kind {
            EventKind::Arrival => self.started_at,
            EventKind::Departure => self.ended_at.unwrap_or(self.started_at),
        }
    }
}
