//! How many goods units a vehicle takes from the parking container.

use std::collections::VecDeque;

use pk_core::{SimConfig, SimRng};
use pk_records::StreetRecord;

/// Decides the goods need of each vehicle as it is spawned.
///
/// Called once per vehicle, in spawn order, by the generator that owns the
/// run's [`SimRng`].
pub trait GoodsPolicy: 'static {
    fn goods_needed(&mut self, record: &StreetRecord, rng: &mut SimRng) -> u64;
}

/// `full - draw`, where `draw` is uniform over the inclusive `draw` range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformDraw {
    pub full: u64,
    pub draw: [u64; 2],
}

impl UniformDraw {
    pub fn from_config(config: &SimConfig) -> Self {
        Self { full: config.full_delivery_size, draw: config.delivery_level }
    }
}

impl GoodsPolicy for UniformDraw {
    fn goods_needed(&mut self, _record: &StreetRecord, rng: &mut SimRng) -> u64 {
        self.full.saturating_sub(rng.between(self.draw))
    }
}

/// Replays a fixed list of draws, cycling when it runs out.  An empty list
/// draws zero, so every vehicle needs `full`.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    full:  u64,
    draws: VecDeque<u64>,
}

impl ScriptedDraws {
    pub fn new(full: u64, draws: impl IntoIterator<Item = u64>) -> Self {
        Self { full, draws: draws.into_iter().collect() }
    }
}

impl GoodsPolicy for ScriptedDraws {
    fn goods_needed(&mut self, _record: &StreetRecord, _rng: &mut SimRng) -> u64 {
        let draw = match self.draws.pop_front() {
            Some(d) => {
                self.draws.push_back(d);
                d
            }
            None => 0,
        };
        self.full.saturating_sub(draw)
    }
}
