//! Plain data row types written by trace writers.

/// One vehicle's passage through the street.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRow {
    pub process:     u32,
    pub name:        String,
    pub spawned_at:  f64,
    /// When the first resource slot was granted.  `None` if the vehicle was
    /// still queued when the run ended.
    pub acquired_at: Option<f64>,
    /// Time spent queued for that slot.
    pub waited:      Option<f64>,
    /// Total units withdrawn from containers.
    pub goods:       u64,
    /// `None` if the vehicle was still in the street when the run ended.
    pub finished_at: Option<f64>,
}

/// One low-level alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertRow {
    pub time:          f64,
    pub container:     u16,
    pub level:         u64,
    pub capacity:      u64,
    pub threshold_pct: f64,
}
