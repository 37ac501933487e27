//! Feeds vehicles into the street, one per record.

use std::collections::VecDeque;

use log::debug;

use pk_core::{SimRng, Spacing};
use pk_kernel::{Context, KernelResult, Process, Step, Wait, Wake};
use pk_records::{StreetRecord, inter_arrival_delays};

use crate::{Curb, GoodsPolicy, Vehicle};

/// Waits an inter-arrival delay, spawns `Car N` for the next record, and
/// repeats until the records run out.
///
/// Delays are either drawn uniformly from `inter_arrival` or taken from the
/// gaps between record timestamps, per [`Spacing`].  Records are consumed
/// in the order given, which the scenario builder sorts by timestamp.
pub struct Generator<G: GoodsPolicy> {
    records:       VecDeque<StreetRecord>,
    gaps:          VecDeque<f64>,
    spacing:       Spacing,
    inter_arrival: [u64; 2],
    curb:          Curb,
    rng:           SimRng,
    policy:        G,
    spawned:       u64,
    waiting:       bool,
}

impl<G: GoodsPolicy> Generator<G> {
    pub fn new(
        records:       Vec<StreetRecord>,
        spacing:       Spacing,
        inter_arrival: [u64; 2],
        curb:          Curb,
        rng:           SimRng,
        policy:        G,
    ) -> Self {
        let gaps = match spacing {
            Spacing::Records => inter_arrival_delays(&records).into(),
            Spacing::Uniform => VecDeque::new(),
        };
        Self {
            records: records.into(),
            gaps,
            spacing,
            inter_arrival,
            curb,
            rng,
            policy,
            spawned: 0,
            waiting: false,
        }
    }

    fn next_delay(&mut self) -> f64 {
        match self.spacing {
            Spacing::Uniform => self.rng.between(self.inter_arrival) as f64,
            Spacing::Records => self.gaps.pop_front().unwrap_or(0.0),
        }
    }
}

impl<G: GoodsPolicy> Process for Generator<G> {
    fn name(&self) -> &str {
        "generator"
    }

    fn resume(&mut self, ctx: &mut Context<'_>, _wake: Wake) -> KernelResult<Step> {
        if self.waiting {
            if let Some(record) = self.records.pop_front() {
                let need = self.policy.goods_needed(&record, &mut self.rng);
                let name = format!("Car {}", self.spawned);
                let pid = ctx.spawn(Vehicle::new(name, record, self.curb, need))?;
                debug!("{} spawned {pid} needing {need} goods", ctx.now());
                self.spawned += 1;
            }
        }

        if self.records.is_empty() {
            debug!("{} generator out of records after {} vehicles", ctx.now(), self.spawned);
            return Ok(Step::Done);
        }
        self.waiting = true;
        Ok(Step::Wait(Wait::Timeout(self.next_delay())))
    }
}
