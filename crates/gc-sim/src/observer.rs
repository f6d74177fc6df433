//! Simulation observer trait for progress reporting and data collection.

use gc_car::CarRoster;
use gc_core::Tick;

use crate::{CollisionEvent, SimReport};

/// Callbacks invoked by [`Sim::run_with`][crate::Sim::run_with] and
/// [`Sim::step`][crate::Sim::step] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — collision printer
///
/// ```rust
/// use gc_sim::{CollisionEvent, SimObserver};
///
/// struct CollisionPrinter;
///
/// impl SimObserver for CollisionPrinter {
///     fn on_collision(&mut self, event: &CollisionEvent) {
///         println!("step {}: crash at {}", event.tick, event.position);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any car moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each cell where cars newly collided this tick, after all
    /// cars have moved.  Events within a tick arrive in order of their first
    /// occupant's `CarId`.
    fn on_collision(&mut self, _event: &CollisionEvent) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of cars that executed a command this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks) with read-only access to every car.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &CarRoster) {}

    /// Called once after the run completes, with the final report.
    fn on_sim_end(&mut self, _final_tick: Tick, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
