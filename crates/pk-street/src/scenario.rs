//! Fluent builder that wires a street scenario into a [`Kernel`].

use log::info;

use pk_core::{ContainerId, ProcessId, ResourceId, SimConfig, SimRng, SimTime};
use pk_kernel::{Container, Kernel, KernelObserver, RunSummary};
use pk_records::{StreetRecord, sort_by_timestamp};

use crate::{Curb, Generator, GoodsPolicy, Monitor, StreetResult, UniformDraw};

/// Fluent builder for [`Scenario`].
///
/// # Example
///
/// ```rust,ignore
/// let mut scenario = ScenarioBuilder::new(config, records)
///     .policy(ScriptedDraws::new(50, [45, 40, 48]))
///     .build()?;
/// let summary = scenario.run(&mut NoopObserver)?;
/// ```
pub struct ScenarioBuilder<G: GoodsPolicy = UniformDraw> {
    config:  SimConfig,
    records: Vec<StreetRecord>,
    policy:  G,
}

impl ScenarioBuilder<UniformDraw> {
    /// Start from a configuration and the loaded records.  Records need not
    /// be sorted.  Goods needs default to [`UniformDraw`] over the
    /// configured range.
    pub fn new(config: SimConfig, records: Vec<StreetRecord>) -> Self {
        let policy = UniformDraw::from_config(&config);
        Self { config, records, policy }
    }
}

impl<G: GoodsPolicy> ScenarioBuilder<G> {
    /// Replace the goods policy.
    pub fn policy<H: GoodsPolicy>(self, policy: H) -> ScenarioBuilder<H> {
        ScenarioBuilder { config: self.config, records: self.records, policy }
    }

    /// Validate the configuration and build the kernel.
    ///
    /// The monitor is spawned before the generator, so at time zero the
    /// first fill check runs before the first vehicle is scheduled.
    pub fn build(self) -> StreetResult<Scenario> {
        let ScenarioBuilder { config, mut records, policy } = self;
        config.validate()?;
        sort_by_timestamp(&mut records);
        let record_count = records.len();

        let mut kernel = Kernel::new();
        let street = kernel.add_resource(config.street_capacity)?;
        let parking = kernel.add_container(config.parking_capacity, config.starting_level())?;
        let curb = Curb { street, parking, speed: config.delivery_speed };

        let monitor =
            kernel.spawn(Monitor::new(parking, config.threshold_pct, config.monitor_interval))?;
        let generator = kernel.spawn(Generator::new(
            records,
            config.spacing,
            config.inter_arrival,
            curb,
            SimRng::new(config.seed),
            policy,
        ))?;

        info!(
            "scenario: {record_count} records, street capacity {}, parking {}/{}, seed {}",
            config.street_capacity,
            config.starting_level(),
            config.parking_capacity,
            config.seed
        );

        Ok(Scenario { kernel, config, curb, monitor, generator, record_count })
    }
}

/// A built street scenario, ready to run.
pub struct Scenario {
    kernel:       Kernel,
    config:       SimConfig,
    curb:         Curb,
    monitor:      ProcessId,
    generator:    ProcessId,
    record_count: usize,
}

impl Scenario {
    /// Run up to the configured horizon.
    pub fn run<O: KernelObserver>(&mut self, observer: &mut O) -> StreetResult<RunSummary> {
        let horizon = self.config.horizon();
        self.run_until(horizon, observer)
    }

    /// Run up to `until` (exclusive).  May be called repeatedly with
    /// increasing horizons.
    pub fn run_until<O: KernelObserver>(
        &mut self,
        until: SimTime,
        observer: &mut O,
    ) -> StreetResult<RunSummary> {
        let summary = self.kernel.run(until, observer)?;
        info!(
            "run stopped at {} after {} events ({} processes live, {} events pending)",
            summary.final_time, summary.dispatched, summary.live_processes, summary.pending_events
        );
        Ok(summary)
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn curb(&self) -> Curb {
        self.curb
    }

    pub fn street(&self) -> ResourceId {
        self.curb.street
    }

    pub fn parking(&self) -> ContainerId {
        self.curb.parking
    }

    /// The parking container.  Always registered by [`ScenarioBuilder::build`].
    pub fn parking_state(&self) -> Option<&Container> {
        self.kernel.container(self.curb.parking)
    }

    pub fn monitor(&self) -> ProcessId {
        self.monitor
    }

    pub fn generator(&self) -> ProcessId {
        self.generator
    }

    /// Number of records handed to the generator.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}
