//! Collision events reported to observers.

use gc_core::{CarId, GridPos, Tick};

/// Two or more cars ended a tick in the same cell and at least one of them
/// collided for the first time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionEvent {
    pub tick:     Tick,
    pub position: GridPos,
    /// Every car in the cell, in insertion order, including cars frozen by an
    /// earlier collision.
    pub occupants: Vec<CarId>,
    /// The subset of `occupants` that collided at this tick.
    pub newly_collided: Vec<CarId>,
}

impl CollisionEvent {
    /// `true` if a previously frozen car took part, i.e. some occupant was
    /// already collided before this tick.
    pub fn involves_obstacle(&self) -> bool {
        self.newly_collided.len() < self.occupants.len()
    }
}
