//! `pk-street`: the curbside street scenario on top of `pk-kernel`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`curb`]      | `Curb`: the street resource, parking container, speed    |
//! | [`goods`]     | `GoodsPolicy` trait, `UniformDraw`, `ScriptedDraws`      |
//! | [`vehicle`]   | `Vehicle` process                                        |
//! | [`monitor`]   | `Monitor` process (low-level alerts)                     |
//! | [`generator`] | `Generator` process (one vehicle per record)             |
//! | [`scenario`]  | `ScenarioBuilder`, `Scenario`                            |
//! | [`error`]     | `StreetError`, `StreetResult<T>`                         |
//!
//! # Vehicle life cycle
//!
//! ```text
//! spawn ─▶ Acquire(street) ─▶ Get(parking, need) ─▶ Timeout(need / speed) ─▶ release ─▶ done
//! ```
//!
//! A vehicle holds its street slot while waiting for goods, so a large need
//! blocked at the head of the parking queue also keeps a slot occupied.

pub mod curb;
pub mod error;
pub mod generator;
pub mod goods;
pub mod monitor;
pub mod scenario;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use curb::Curb;
pub use error::{StreetError, StreetResult};
pub use generator::Generator;
pub use goods::{GoodsPolicy, ScriptedDraws, UniformDraw};
pub use monitor::Monitor;
pub use scenario::{Scenario, ScenarioBuilder};
pub use vehicle::Vehicle;
