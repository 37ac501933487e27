//! Periodic fill check of the parking container.

use log::warn;

use pk_core::ContainerId;
use pk_kernel::{Context, KernelResult, Process, Signal, Step, Wait, Wake};

/// Checks the parking level every `interval` units, forever.  Each check
/// that finds the fill percentage below `threshold_pct` raises one
/// [`Signal::LowLevel`].  The alert is informational and changes nothing.
pub struct Monitor {
    parking:       ContainerId,
    threshold_pct: f64,
    interval:      f64,
}

impl Monitor {
    pub fn new(parking: ContainerId, threshold_pct: f64, interval: f64) -> Self {
        Self { parking, threshold_pct, interval }
    }
}

impl Process for Monitor {
    fn name(&self) -> &str {
        "monitor"
    }

    fn resume(&mut self, ctx: &mut Context<'_>, _wake: Wake) -> KernelResult<Step> {
        let level = ctx.level(self.parking)?;
        let capacity = ctx.capacity(self.parking)?;
        let pct = level as f64 / capacity as f64 * 100.0;
        if pct < self.threshold_pct {
            warn!("parking is becoming full at {}: {level}/{capacity} goods left", ctx.now());
            ctx.signal(Signal::LowLevel {
                container: self.parking,
                level,
                capacity,
                threshold_pct: self.threshold_pct,
            });
        }
        Ok(Step::Wait(Wait::Timeout(self.interval)))
    }
}
