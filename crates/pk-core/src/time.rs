//! Simulation time model.
//!
//! # Design
//!
//! `SimTime` is a non-negative real number of abstract time units.  It is
//! real-valued rather than an integer tick because service durations are
//! derived by division (`goods / delivery_speed`) and routinely fall between
//! whole units.
//!
//! Ordering must be total so `SimTime` can key a `BTreeMap`; the inner value
//! is an [`OrderedFloat`].  The kernel never produces NaN: every delay is
//! validated before it is added to the clock.

use std::fmt;

use ordered_float::OrderedFloat;

/// A point on the virtual clock.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SimTime(OrderedFloat<f64>);

impl SimTime {
    pub const ZERO: SimTime = SimTime(OrderedFloat(0.0));

    #[inline]
    pub fn new(units: f64) -> Self {
        SimTime(OrderedFloat(units))
    }

    /// Raw time units since the start of the run.
    #[inline]
    pub fn units(self) -> f64 {
        self.0.into_inner()
    }

    /// The time `delay` units after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime::new(self.units() + delay)
    }

    /// Units elapsed from `earlier` to `self`.  Negative if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.units() - earlier.units()
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.1}", self.units())
    }
}
