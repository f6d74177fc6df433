//! Fluent builder for constructing a [`Sim`].

use gc_car::CarSpec;
use gc_core::SimConfig;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust
/// use gc_car::CarSpec;
/// use gc_sim::SimBuilder;
///
/// let sim = SimBuilder::grid(10, 10)?
///     .car(CarSpec::parse("A", 2, 2, "N", "FFRFF")?)
///     .snapshot_interval(0)
///     .build()?;
/// assert_eq!(sim.cars.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SimBuilder {
    config: SimConfig,
    cars:   Vec<CarSpec>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, cars: Vec::new() }
    }

    /// Shorthand for `SimBuilder::new(SimConfig::new(width, height)?)`.
    pub fn grid(width: u32, height: u32) -> SimResult<Self> {
        Ok(Self::new(SimConfig::new(width, height)?))
    }

    /// Queue one car.  Cars are added in call order.
    pub fn car(mut self, spec: CarSpec) -> Self {
        self.cars.push(spec);
        self
    }

    /// Queue several cars, preserving iteration order.
    pub fn cars(mut self, specs: impl IntoIterator<Item = CarSpec>) -> Self {
        self.cars.extend(specs);
        self
    }

    /// Snapshot every `ticks` ticks (0 disables snapshots).
    pub fn snapshot_interval(mut self, ticks: u64) -> Self {
        self.config.snapshot_interval_ticks = ticks;
        self
    }

    /// Validate every queued car and return a ready-to-run [`Sim`].
    ///
    /// Stops at the first car that breaks the input contract.
    pub fn build(self) -> SimResult<Sim> {
        let mut sim = Sim::new(self.config);
        for spec in self.cars {
            sim.add_car(spec)?;
        }
        Ok(sim)
    }
}
