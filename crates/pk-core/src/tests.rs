//! Unit tests for pk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ContainerId, ProcessId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = ProcessId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ProcessId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn narrow_ids_reject_overflow() {
        assert!(ResourceId::try_from(70_000usize).is_err());
        assert!(ContainerId::try_from(65_535usize).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(ProcessId(7).to_string(), "ProcessId(7)");
        assert_eq!(ResourceId(0).to_string(), "ResourceId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime::new(10.0);
        assert_eq!(t.after(2.5), SimTime::new(12.5));
        assert_eq!(SimTime::new(15.0).since(t), 5.0);
        assert_eq!(SimTime::ZERO.units(), 0.0);
    }

    #[test]
    fn total_order_for_map_keys() {
        let mut v = vec![SimTime::new(3.0), SimTime::new(0.5), SimTime::new(2.25)];
        v.sort();
        assert_eq!(v, vec![SimTime::new(0.5), SimTime::new(2.25), SimTime::new(3.0)]);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::new(12.5).to_string(), "t=12.5");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let xs: Vec<u64> = (0..16).map(|_| a.between([30, 300])).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.between([30, 300])).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn between_is_inclusive_and_bounded() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            let v = rng.between([5, 25]);
            assert!((5..=25).contains(&v));
        }
        assert_eq!(rng.between([9, 9]), 9);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u64> = (0..16).map(|_| a.between([0, 1_000_000])).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.between([0, 1_000_000])).collect();
        assert_ne!(xs, ys);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig, SimTime, Spacing};

    #[test]
    fn defaults_match_reference_scenario() {
        let c = SimConfig::default();
        assert_eq!(c.street_capacity, 2);
        assert_eq!(c.parking_capacity, 50);
        assert_eq!(c.starting_level(), 50);
        assert_eq!(c.threshold_pct, 10.0);
        assert_eq!(c.horizon(), SimTime::new(10_000.0));
        assert_eq!(c.spacing, Spacing::Uniform);
        c.validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = SimConfig::from_toml_str(
            "street_capacity = 3\nspacing = \"records\"\ninter_arrival = [10, 20]\n",
        )
        .unwrap();
        assert_eq!(c.street_capacity, 3);
        assert_eq!(c.spacing, Spacing::Records);
        assert_eq!(c.inter_arrival, [10, 20]);
        assert_eq!(c.parking_capacity, 50);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = SimConfig::from_toml_str("parking_spots = 3\n").unwrap_err();
        assert!(matches!(err, CoreError::Toml(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cases = [
            SimConfig { street_capacity: 0, ..SimConfig::default() },
            SimConfig { initial_level: Some(51), ..SimConfig::default() },
            SimConfig { threshold_pct: 120.0, ..SimConfig::default() },
            SimConfig { horizon: 0.0, ..SimConfig::default() },
            SimConfig { delivery_speed: f64::NAN, ..SimConfig::default() },
            SimConfig { inter_arrival: [300, 30], ..SimConfig::default() },
            SimConfig { delivery_level: [5, 60], ..SimConfig::default() },
            SimConfig { full_delivery_size: 80, ..SimConfig::default() },
        ];
        for c in cases {
            assert!(matches!(c.validate(), Err(CoreError::Config(_))), "{c:?}");
        }
    }
}
