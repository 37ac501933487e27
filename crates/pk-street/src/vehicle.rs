//! A vehicle that stops on the street to unload.

use log::info;

use pk_core::SimTime;
use pk_kernel::{Context, KernelResult, Process, Step, Wait, Wake};
use pk_records::StreetRecord;

use crate::Curb;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    Arriving,
    WaitingForStreet,
    WaitingForGoods,
    Unloading,
}

/// Takes a street slot, withdraws its goods need from the parking
/// container, unloads at the curb's speed, and frees the slot.
pub struct Vehicle {
    name:       String,
    record:     StreetRecord,
    curb:       Curb,
    need:       u64,
    stage:      Stage,
    arrived_at: SimTime,
}

impl Vehicle {
    pub fn new(name: String, record: StreetRecord, curb: Curb, need: u64) -> Self {
        Self { name, record, curb, need, stage: Stage::Arriving, arrived_at: SimTime::ZERO }
    }

    pub fn need(&self) -> u64 {
        self.need
    }

    fn narrate(&self, now: SimTime) {
        let r = &self.record;
        info!("{} arriving at street at {now}", self.name);
        info!(
            "{}: record {} ({} at {}), side {} station {}, {}, {}, disruption {}",
            self.name,
            r.id,
            r.kind,
            r.timestamp(),
            r.side,
            r.side.station(),
            r.vehicle,
            r.purpose,
            r.disruption,
        );
    }
}

impl Process for Vehicle {
    fn name(&self) -> &str {
        &self.name
    }

    fn resume(&mut self, ctx: &mut Context<'_>, _wake: Wake) -> KernelResult<Step> {
        match self.stage {
            Stage::Arriving => {
                self.arrived_at = ctx.now();
                self.narrate(self.arrived_at);
                self.stage = Stage::WaitingForStreet;
                Ok(Step::Wait(Wait::Acquire(self.curb.street)))
            }
            Stage::WaitingForStreet => {
                self.stage = Stage::WaitingForGoods;
                Ok(Step::Wait(Wait::Get(self.curb.parking, self.need)))
            }
            Stage::WaitingForGoods => {
                self.stage = Stage::Unloading;
                Ok(Step::Wait(Wait::Timeout(self.need as f64 / self.curb.speed)))
            }
            Stage::Unloading => {
                ctx.release(self.curb.street)?;
                info!(
                    "{} finished delivery in {:.1} time units",
                    self.name,
                    ctx.now().since(self.arrived_at)
                );
                Ok(Step::Done)
            }
        }
    }
}
