//! End-of-run report.

use std::fmt;

use gc_car::Car;
use gc_core::{GridPos, Heading, Tick};

/// Final state of one car.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum CarOutcome {
    /// Executed its whole queue without colliding.
    Survived {
        name:     String,
        position: GridPos,
        heading:  Heading,
    },
    /// Stopped by its first collision.
    Collided {
        name:     String,
        partners: Vec<String>,
        position: GridPos,
        tick:     Tick,
    },
}

impl CarOutcome {
    pub fn from_car(car: &Car) -> Self {
        match car.collision() {
            Some(rec) => CarOutcome::Collided {
                name:     car.name().to_owned(),
                partners: rec.partners.clone(),
                position: rec.position,
                tick:     rec.tick,
            },
            None => CarOutcome::Survived {
                name:     car.name().to_owned(),
                position: car.position(),
                heading:  car.heading(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CarOutcome::Survived { name, .. } | CarOutcome::Collided { name, .. } => name,
        }
    }

    /// Final cell for survivors, collision cell otherwise.
    pub fn position(&self) -> GridPos {
        match self {
            CarOutcome::Survived { position, .. } | CarOutcome::Collided { position, .. } => *position,
        }
    }

    pub fn is_collided(&self) -> bool {
        matches!(self, CarOutcome::Collided { .. })
    }
}

impl fmt::Display for CarOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarOutcome::Survived { name, position, heading } => {
                write!(f, "- {name}, {position} {heading}")
            }
            CarOutcome::Collided { name, partners, position, tick } => {
                write!(
                    f,
                    "- {name}, collides with {} at {position} at step {tick}",
                    partners.join(" and "),
                )
            }
        }
    }
}

/// Outcome of every car, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// Last tick the simulation processed.
    pub final_tick: Tick,
    pub outcomes:   Vec<CarOutcome>,
}

impl SimReport {
    pub fn from_cars<'a>(final_tick: Tick, cars: impl IntoIterator<Item = &'a Car>) -> Self {
        Self {
            final_tick,
            outcomes: cars.into_iter().map(CarOutcome::from_car).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CarOutcome> {
        self.outcomes.iter().find(|o| o.name() == name)
    }

    pub fn collided_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_collided()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl fmt::Display for SimReport {
    /// One report line per car, newline-separated, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{outcome}")?;
        }
        Ok(())
    }
}
