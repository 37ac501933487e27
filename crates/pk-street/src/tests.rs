//! Scenario-level tests for the street processes.

use std::collections::HashMap;

use pk_core::{ContainerId, ProcessId, ResourceId, SimConfig, SimTime};
use pk_kernel::{KernelObserver, Signal};
use pk_records::{
    ClockTime, Disruption, EventKind, Purpose, StreetRecord, StreetSide, VehicleClass,
};

fn record(id: &str, at: &str) -> StreetRecord {
    StreetRecord {
        id:         id.into(),
        kind:       EventKind::Arrival,
        side:       StreetSide::SouthToNorth,
        vehicle:    VehicleClass::SmallTruck,
        purpose:    Purpose::GoodsDelivery,
        disruption: Disruption::None,
        started_at: ClockTime::parse(at).unwrap(),
        ended_at:   None,
    }
}

fn records(n: usize) -> Vec<StreetRecord> {
    (0..n).map(|i| record(&i.to_string(), &format!("07:{:02}", i % 60))).collect()
}

/// Records what happened to whom, by process name.
#[derive(Default)]
struct Log {
    names:    HashMap<ProcessId, String>,
    started:  Vec<(String, f64)>,
    /// (name, granted at, requested at)
    acquired: Vec<(String, f64, f64)>,
    released: Vec<(String, f64)>,
    /// (name, at, amount, level after)
    gets:     Vec<(String, f64, u64, u64)>,
    /// (at, level)
    alerts:   Vec<(f64, u64)>,
    finished: Vec<(String, f64)>,
}

impl Log {
    fn name(&self, pid: ProcessId) -> String {
        self.names.get(&pid).cloned().unwrap_or_default()
    }

    fn acquired_at(&self, who: &str) -> f64 {
        self.acquired.iter().find(|(n, ..)| n == who).map(|a| a.1).unwrap()
    }

    fn released_at(&self, who: &str) -> f64 {
        self.released.iter().find(|(n, _)| n == who).map(|r| r.1).unwrap()
    }
}

impl KernelObserver for Log {
    fn on_start(&mut self, now: SimTime, process: ProcessId, name: &str) {
        self.names.insert(process, name.to_owned());
        self.started.push((name.to_owned(), now.units()));
    }

    fn on_acquire(&mut self, now: SimTime, process: ProcessId, _: ResourceId, requested_at: SimTime) {
        self.acquired.push((self.name(process), now.units(), requested_at.units()));
    }

    fn on_release(&mut self, now: SimTime, process: ProcessId, _: ResourceId) {
        self.released.push((self.name(process), now.units()));
    }

    fn on_get(&mut self, now: SimTime, process: ProcessId, _: ContainerId, amount: u64, level: u64) {
        self.gets.push((self.name(process), now.units(), amount, level));
    }

    fn on_signal(&mut self, now: SimTime, _: ProcessId, signal: &Signal) {
        let Signal::LowLevel { level, .. } = signal;
        self.alerts.push((now.units(), *level));
    }

    fn on_finish(&mut self, now: SimTime, _: ProcessId, name: &str) {
        self.finished.push((name.to_owned(), now.units()));
    }
}

#[cfg(test)]
mod goods {
    use pk_core::{SimConfig, SimRng};

    use super::record;
    use crate::{GoodsPolicy, ScriptedDraws, UniformDraw};

    #[test]
    fn uniform_need_is_full_minus_draw() {
        let mut policy = UniformDraw::from_config(&SimConfig::default());
        let mut rng = SimRng::new(3);
        let r = record("1", "07:00");
        for _ in 0..500 {
            let need = policy.goods_needed(&r, &mut rng);
            assert!((25..=45).contains(&need), "{need}");
        }
    }

    #[test]
    fn scripted_draws_cycle() {
        let mut policy = ScriptedDraws::new(50, [45, 40, 48]);
        let mut rng = SimRng::new(0);
        let r = record("1", "07:00");
        let needs: Vec<u64> = (0..5).map(|_| policy.goods_needed(&r, &mut rng)).collect();
        assert_eq!(needs, [5, 10, 2, 5, 10]);

        let mut empty = ScriptedDraws::new(20, []);
        assert_eq!(empty.goods_needed(&r, &mut rng), 20);
    }
}

#[cfg(test)]
mod vehicles {
    use super::{Log, SimConfig, record, records};
    use crate::{ScenarioBuilder, ScriptedDraws, StreetError};

    fn three_trucks() -> (crate::Scenario, Log) {
        let config = SimConfig { inter_arrival: [1, 1], horizon: 100.0, ..SimConfig::default() };
        let recs = vec![record("a", "07:00"), record("b", "07:01"), record("c", "07:02")];
        let mut scenario = ScenarioBuilder::new(config, recs)
            .policy(ScriptedDraws::new(50, [45, 40, 48]))
            .build()
            .unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();
        (scenario, log)
    }

    #[test]
    fn third_vehicle_waits_for_first_release() {
        let (_, log) = three_trucks();

        assert_eq!(log.acquired_at("Car 0"), 1.0);
        assert_eq!(log.acquired_at("Car 1"), 2.0);
        assert_eq!(log.released_at("Car 0"), 3.5);
        assert_eq!(log.released_at("Car 1"), 7.0);

        let car2 = log.acquired.iter().find(|a| a.0 == "Car 2").unwrap();
        assert_eq!(car2.2, 3.0, "requested on arrival");
        assert_eq!(car2.1, 3.5, "granted when Car 0 left");
        assert!(car2.1 >= log.released_at("Car 0"));
    }

    #[test]
    fn goods_are_withdrawn_in_order() {
        let (scenario, log) = three_trucks();

        let gets: Vec<(&str, u64, u64)> =
            log.gets.iter().map(|(n, _, amount, level)| (n.as_str(), *amount, *level)).collect();
        assert_eq!(gets, [("Car 0", 5, 45), ("Car 1", 10, 35), ("Car 2", 2, 33)]);

        let parking = scenario.parking_state().unwrap();
        assert_eq!(parking.level(), 33);
        assert_eq!(parking.supplied(), parking.granted() + parking.level());
    }

    #[test]
    fn all_vehicles_finish_and_monitor_stays_live() {
        let (scenario, log) = three_trucks();

        let finished: Vec<&str> = log.finished.iter().map(|f| f.0.as_str()).collect();
        assert_eq!(finished, ["generator", "Car 0", "Car 2", "Car 1"]);
        assert_eq!(scenario.kernel().live_processes(), 1);
        assert!(scenario.kernel().is_live(scenario.monitor()));
        assert_eq!(scenario.kernel().resource(scenario.street()).unwrap().held(), 0);
    }

    #[test]
    fn starved_goods_keep_street_slots_occupied() {
        let config = SimConfig {
            initial_level: Some(12),
            inter_arrival: [1, 1],
            horizon: 50.0,
            ..SimConfig::default()
        };
        let mut scenario = ScenarioBuilder::new(config, records(3))
            .policy(ScriptedDraws::new(50, [30, 30, 45]))
            .build()
            .unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        let street = scenario.kernel().resource(scenario.street()).unwrap();
        assert_eq!(street.held(), 2);
        assert_eq!(street.waiting(), 1);

        let parking = scenario.parking_state().unwrap();
        assert_eq!(parking.level(), 12);
        let queued: Vec<u64> = parking.queued().map(|g| g.amount).collect();
        assert_eq!(queued, [20, 20]);
        assert!(log.gets.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let config = SimConfig { street_capacity: 0, ..SimConfig::default() };
        let err = ScenarioBuilder::new(config, records(1)).build().err().unwrap();
        assert!(matches!(err, StreetError::Config(_)));
    }
}

#[cfg(test)]
mod monitor {
    use super::{Log, SimConfig, record};
    use crate::{ScenarioBuilder, ScriptedDraws};

    #[test]
    fn one_alert_per_check_while_low() {
        let config = SimConfig { initial_level: Some(4), horizon: 35.0, ..SimConfig::default() };
        let mut scenario = ScenarioBuilder::new(config, Vec::new()).build().unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        assert_eq!(log.alerts, [(0.0, 4), (10.0, 4), (20.0, 4), (30.0, 4)]);
    }

    #[test]
    fn no_alert_at_or_above_threshold() {
        let config = SimConfig { initial_level: Some(5), horizon: 100.0, ..SimConfig::default() };
        let mut scenario = ScenarioBuilder::new(config, Vec::new()).build().unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        assert!(log.alerts.is_empty());
    }

    #[test]
    fn alerts_start_once_goods_run_low() {
        let config = SimConfig {
            initial_level: Some(10),
            inter_arrival: [15, 15],
            horizon: 35.0,
            ..SimConfig::default()
        };
        let mut scenario = ScenarioBuilder::new(config, vec![record("a", "07:00")])
            .policy(ScriptedDraws::new(50, [40]))
            .build()
            .unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        assert_eq!(log.gets[0].1, 15.0);
        assert_eq!(log.alerts, [(20.0, 0), (30.0, 0)]);
    }
}

#[cfg(test)]
mod generator {
    use super::{Log, SimConfig, record, records};
    use crate::{ScenarioBuilder, ScriptedDraws};
    use pk_core::Spacing;

    fn vehicle_starts(log: &Log) -> Vec<f64> {
        log.started.iter().filter(|(n, _)| n.starts_with("Car ")).map(|s| s.1).collect()
    }

    #[test]
    fn record_spacing_replays_survey_gaps() {
        let config = SimConfig { spacing: Spacing::Records, horizon: 500.0, ..SimConfig::default() };
        // Out of order on purpose: the builder sorts by timestamp.
        let recs = vec![record("c", "07:02"), record("a", "07:00"), record("b", "07:00:30")];
        let mut scenario = ScenarioBuilder::new(config, recs)
            .policy(ScriptedDraws::new(50, [49]))
            .build()
            .unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        assert_eq!(vehicle_starts(&log), [0.0, 30.0, 120.0]);
    }

    #[test]
    fn uniform_spacing_stays_in_range() {
        let config = SimConfig { horizon: 1_000_000.0, ..SimConfig::default() };
        let mut scenario = ScenarioBuilder::new(config, records(40))
            .policy(ScriptedDraws::new(50, [50]))
            .build()
            .unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        let starts = vehicle_starts(&log);
        assert_eq!(starts.len(), 40);
        let mut prev = 0.0;
        for t in starts {
            assert!((30.0..=300.0).contains(&(t - prev)), "gap {}", t - prev);
            prev = t;
        }
    }

    #[test]
    fn generator_finishes_when_records_run_out() {
        let config = SimConfig { inter_arrival: [5, 5], horizon: 1_000.0, ..SimConfig::default() };
        let mut scenario = ScenarioBuilder::new(config, records(4))
            .policy(ScriptedDraws::new(50, [49]))
            .build()
            .unwrap();
        let mut log = Log::default();
        scenario.run(&mut log).unwrap();

        assert!(!scenario.kernel().is_live(scenario.generator()));
        let gen_done = log.finished.iter().find(|f| f.0 == "generator").unwrap().1;
        assert_eq!(gen_done, 20.0);
        assert_eq!(scenario.record_count(), 4);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed: u64| {
            let config = SimConfig { seed, ..SimConfig::default() };
            let mut scenario = ScenarioBuilder::new(config, records(30)).build().unwrap();
            let mut log = Log::default();
            scenario.run(&mut log).unwrap();
            (log.acquired, log.gets, log.finished)
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42).0, run(7).0);
    }
}
