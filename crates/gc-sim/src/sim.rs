//! The `Sim` struct and its tick loop.

use gc_car::{CarRoster, CarSpec, CollisionRecord};
use gc_core::{CarId, GridBounds, GridPos, SimClock, SimConfig, Tick};
use tracing::{debug, info, trace};

use crate::{CollisionEvent, NoopObserver, SimError, SimObserver, SimReport, SimResult};

#[cfg(feature = "fx-hash")]
type CellMap<V> = rustc_hash::FxHashMap<GridPos, V>;
#[cfg(not(feature = "fx-hash"))]
type CellMap<V> = std::collections::HashMap<GridPos, V>;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine: grid bounds, clock and the car roster.
///
/// Cars are added with [`add_car`](Self::add_car) before the first tick and
/// are only mutated by the tick loop afterwards.  Construct a fresh `Sim` for
/// every simulation attempt; a finished `Sim` keeps its clock, so running it
/// again processes no further ticks, yields the same report and does not
/// call [`SimObserver::on_sim_end`] a second time.
pub struct Sim {
    /// Grid bounds and snapshot interval.
    pub config: SimConfig,

    /// Last processed tick.
    pub clock: SimClock,

    /// Cars in insertion order.
    pub cars: CarRoster,

    /// Set once `on_sim_end` has been delivered.
    ended: bool,
}

impl Sim {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            clock: SimClock::new(),
            cars:  CarRoster::new(),
            ended: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.config.bounds
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Append a car.  Fails fast on an empty or duplicate name, an off-grid
    /// start, or if the simulation has already started.
    pub fn add_car(&mut self, spec: CarSpec) -> SimResult<CarId> {
        if self.clock.started() {
            return Err(SimError::AlreadyStarted(self.clock.current_tick));
        }
        let id = self.cars.push(spec, self.config.bounds)?;
        debug!(car = %self.cars[id].name(), id = id.0, "car added");
        Ok(id)
    }

    /// Last tick that executes any command: the longest queue's length.
    pub fn max_ticks(&self) -> Tick {
        Tick(self.cars.max_commands() as u64)
    }

    /// `true` once every command of every car has been processed.
    pub fn is_finished(&self) -> bool {
        self.clock.current_tick >= self.max_ticks()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run to completion and return the report.
    pub fn run(&mut self) -> SimReport {
        self.run_with(&mut NoopObserver)
    }

    /// Run to completion, calling `observer` hooks at every tick boundary.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> SimReport {
        if self.cars.is_empty() {
            return SimReport::default();
        }

        while self.step(observer).is_some() {}

        let report = self.report();
        if self.ended {
            debug!(final_tick = self.clock.current_tick.0, "simulation already finished");
            return report;
        }
        self.ended = true;
        info!(
            cars = self.cars.len(),
            collided = report.collided_count(),
            final_tick = self.clock.current_tick.0,
            "simulation finished"
        );
        observer.on_sim_end(self.clock.current_tick, &report);
        report
    }

    /// Process exactly one tick.
    ///
    /// Returns the tick just processed, or `None` if every queue is
    /// exhausted.  Useful for tests and incremental stepping.  When snapshots
    /// are enabled, the first call also snapshots the starting positions at
    /// `Tick::ZERO`.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<Tick> {
        if self.is_finished() {
            return None;
        }
        if !self.clock.started() && self.config.snapshot_due(Tick::ZERO) {
            observer.on_snapshot(Tick::ZERO, &self.cars);
        }
        let tick = self.clock.advance();

        observer.on_tick_start(tick);
        let moved = self.move_cars(tick);
        for event in self.detect_collisions(tick) {
            observer.on_collision(&event);
        }
        observer.on_tick_end(tick, moved);
        if self.config.snapshot_due(tick) {
            observer.on_snapshot(tick, &self.cars);
        }

        trace!(tick = tick.0, moved, "tick processed");
        Some(tick)
    }

    /// Report for the current state, in insertion order.
    pub fn report(&self) -> SimReport {
        SimReport::from_cars(self.clock.current_tick, &self.cars)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Phase ①: every active car with a command for `tick` executes it.
    fn move_cars(&mut self, tick: Tick) -> usize {
        let bounds = self.bounds();
        let mut moved = 0;
        for car in self.cars.iter_mut() {
            if car.is_collided() {
                continue;
            }
            if let Some(command) = car.command_at(tick) {
                car.transition(command, bounds);
                moved += 1;
            }
        }
        moved
    }

    /// Phases ② and ③: group by cell, freeze newly collided cars.
    fn detect_collisions(&mut self, tick: Tick) -> Vec<CollisionEvent> {
        let mut groups: Vec<(GridPos, Vec<CarId>)> = build_collision_index(&self.cars)
            .into_iter()
            .filter(|(_, occupants)| occupants.len() > 1)
            .collect();
        // Hash order is arbitrary; occupants are ascending, so sort by the first.
        groups.sort_unstable_by_key(|(_, occupants)| occupants[0]);

        let mut events = Vec::with_capacity(groups.len());
        for (position, occupants) in groups {
            let newly_collided = self.freeze_group(tick, position, &occupants);
            if newly_collided.is_empty() {
                continue;
            }
            debug!(
                tick = tick.0,
                %position,
                occupants = occupants.len(),
                newly = newly_collided.len(),
                "collision"
            );
            events.push(CollisionEvent { tick, position, occupants, newly_collided });
        }
        events
    }

    /// Mark every not-yet-collided occupant of `position` as collided.
    ///
    /// Partners are all other occupants, frozen obstacles included.  Returns
    /// the ids that changed state.
    fn freeze_group(&mut self, tick: Tick, position: GridPos, occupants: &[CarId]) -> Vec<CarId> {
        let names: Vec<String> = occupants
            .iter()
            .map(|&id| self.cars[id].name().to_owned())
            .collect();

        let mut newly_collided = Vec::new();
        for (i, &id) in occupants.iter().enumerate() {
            if self.cars[id].is_collided() {
                continue;
            }
            let partners = names
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, name)| name.clone())
                .collect();
            let record = CollisionRecord { partners, position, tick };
            if self.cars[id].mark_collided(record) {
                newly_collided.push(id);
            }
        }
        newly_collided
    }
}

// ── Collision index ───────────────────────────────────────────────────────────

/// Build a `GridPos → Vec<CarId>` index of every car, collided or not.
///
/// Each vec is in ascending `CarId` (insertion) order.
/// Time complexity: O(car_count).
fn build_collision_index(cars: &CarRoster) -> CellMap<Vec<CarId>> {
    let mut index: CellMap<Vec<CarId>> = Default::default();
    for (id, car) in cars.enumerate() {
        index.entry(car.position()).or_default().push(id);
    }
    index
}
