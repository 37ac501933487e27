//! Run configuration.
//!
//! `SimConfig` is loaded from a TOML file by the application crate (any key
//! may be omitted; omitted keys take the defaults below) and then adjusted
//! by command-line overrides before being validated and handed to the
//! scenario builder.
//!
//! ```toml
//! street_capacity    = 2
//! parking_capacity   = 50
//! threshold_pct      = 10.0
//! horizon            = 10000.0
//! inter_arrival      = [30, 300]
//! delivery_level     = [5, 25]
//! seed               = 42
//! spacing            = "uniform"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, SimTime};

/// How the vehicle generator spaces consecutive arrivals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// Uniform integer draw from `inter_arrival` for every vehicle.
    #[default]
    Uniform,
    /// Gap between consecutive record timestamps (seconds), so the run
    /// replays the survey's own rhythm.
    Records,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Concurrent vehicles the street can serve.
    pub street_capacity: u32,

    /// Goods budget capacity of the shared parking container.
    pub parking_capacity: u64,

    /// Starting level of the container.  `None` starts full.
    pub initial_level: Option<u64>,

    /// The monitor raises an alert while `level / capacity * 100` is below
    /// this percentage.
    pub threshold_pct: f64,

    /// Run until this time (exclusive).
    pub horizon: f64,

    /// Monitor polling interval.
    pub monitor_interval: f64,

    /// Inclusive `[min, max]` inter-arrival delay for `Spacing::Uniform`.
    pub inter_arrival: [u64; 2],

    /// Inclusive `[min, max]` goods draw.  A vehicle needs
    /// `full_delivery_size - draw` units.
    pub delivery_level: [u64; 2],

    pub full_delivery_size: u64,

    /// Goods units unloaded per time unit.
    pub delivery_speed: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub spacing: Spacing,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            street_capacity:    2,
            parking_capacity:   50,
            initial_level:      None,
            threshold_pct:      10.0,
            horizon:            10_000.0,
            monitor_interval:   10.0,
            inter_arrival:      [30, 300],
            delivery_level:     [5, 25],
            full_delivery_size: 50,
            delivery_speed:     2.0,
            seed:               42,
            spacing:            Spacing::Uniform,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document.  Unknown keys are rejected.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The time at which the run stops (exclusive upper bound).
    #[inline]
    pub fn horizon(&self) -> SimTime {
        SimTime::new(self.horizon)
    }

    /// Container level at time zero.
    #[inline]
    pub fn starting_level(&self) -> u64 {
        self.initial_level.unwrap_or(self.parking_capacity)
    }

    /// Check every field that the scenario builder relies on.
    pub fn validate(&self) -> CoreResult<()> {
        fn bad(msg: String) -> CoreResult<()> {
            Err(CoreError::Config(msg))
        }

        if self.street_capacity == 0 {
            return bad("street_capacity must be at least 1".into());
        }
        if self.starting_level() > self.parking_capacity {
            return bad(format!(
                "initial_level {} exceeds parking_capacity {}",
                self.starting_level(),
                self.parking_capacity
            ));
        }
        if !(0.0..=100.0).contains(&self.threshold_pct) {
            return bad(format!("threshold_pct {} is outside [0, 100]", self.threshold_pct));
        }
        if !(self.horizon.is_finite() && self.horizon > 0.0) {
            return bad(format!("horizon {} must be a positive number", self.horizon));
        }
        if !(self.monitor_interval.is_finite() && self.monitor_interval > 0.0) {
            return bad(format!("monitor_interval {} must be positive", self.monitor_interval));
        }
        if !(self.delivery_speed.is_finite() && self.delivery_speed > 0.0) {
            return bad(format!("delivery_speed {} must be positive", self.delivery_speed));
        }
        for (name, [lo, hi]) in [
            ("inter_arrival", self.inter_arrival),
            ("delivery_level", self.delivery_level),
        ] {
            if lo > hi {
                return bad(format!("{name} range [{lo}, {hi}] is inverted"));
            }
        }
        if self.delivery_level[1] > self.full_delivery_size {
            return bad(format!(
                "delivery_level max {} exceeds full_delivery_size {}",
                self.delivery_level[1], self.full_delivery_size
            ));
        }
        let largest_need = self.full_delivery_size - self.delivery_level[0];
        if largest_need > self.parking_capacity {
            return bad(format!(
                "a vehicle may need {largest_need} goods units but parking_capacity is {}",
                self.parking_capacity
            ));
        }
        Ok(())
    }
}
