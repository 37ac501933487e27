//! Offline ordering of loaded records.

use crate::StreetRecord;

/// Sort records by [`StreetRecord::timestamp`].  The sort is stable, so
/// records with equal timestamps keep their input order.
pub fn sort_by_timestamp(records: &mut [StreetRecord]) {
    records.sort_by_key(StreetRecord::timestamp);
}

/// Seconds between each record and the one before it.  The first delay is
/// zero.  Expects records already sorted by timestamp; a record earlier than
/// its predecessor gets a zero delay.
pub fn inter_arrival_delays(records: &[StreetRecord]) -> Vec<f64> {
    let mut prev = records.first().map(|r| r.timestamp().secs());
    records
        .iter()
        .map(|r| {
            let ts = r.timestamp().secs();
            let gap = prev.map_or(0, |p| ts.saturating_sub(p));
            prev = Some(ts);
            f64::from(gap)
        })
        .collect()
}
