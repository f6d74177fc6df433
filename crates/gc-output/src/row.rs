//! Plain data row types written by output backends.

use gc_car::Car;
use gc_core::{CarId, Tick};
use gc_sim::{CarOutcome, CollisionEvent};

/// Separator for id and name lists inside a single CSV field.
pub const LIST_SEPARATOR: &str = ";";

/// A snapshot of one car at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub tick:     u64,
    pub car_id:   u32,
    pub name:     String,
    pub x:        i32,
    pub y:        i32,
    pub heading:  char,
    pub collided: bool,
}

impl CarSnapshotRow {
    pub fn new(tick: Tick, id: CarId, car: &Car) -> Self {
        Self {
            tick:     tick.0,
            car_id:   id.0,
            name:     car.name().to_owned(),
            x:        car.position().x,
            y:        car.position().y,
            heading:  car.heading().as_char(),
            collided: car.is_collided(),
        }
    }
}

/// One collision event.  Car lists hold `CarId`s joined by `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRow {
    pub tick:           u64,
    pub x:              i32,
    pub y:              i32,
    pub occupants:      String,
    pub newly_collided: String,
}

impl From<&CollisionEvent> for CollisionRow {
    fn from(event: &CollisionEvent) -> Self {
        Self {
            tick:           event.tick.0,
            x:              event.position.x,
            y:              event.position.y,
            occupants:      join_ids(&event.occupants),
            newly_collided: join_ids(&event.newly_collided),
        }
    }
}

fn join_ids(ids: &[CarId]) -> String {
    ids.iter()
        .map(|id| id.0.to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Final outcome of one car.
///
/// Survivors carry a heading and no tick; collided cars carry the collision
/// tick and partner names (joined by `;`) and no heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name:     String,
    pub status:   &'static str,
    pub x:        i32,
    pub y:        i32,
    pub heading:  Option<char>,
    pub tick:     Option<u64>,
    pub partners: String,
}

impl From<&CarOutcome> for ReportRow {
    fn from(outcome: &CarOutcome) -> Self {
        match outcome {
            CarOutcome::Survived { name, position, heading } => Self {
                name:     name.clone(),
                status:   "survived",
                x:        position.x,
                y:        position.y,
                heading:  Some(heading.as_char()),
                tick:     None,
                partners: String::new(),
            },
            CarOutcome::Collided { name, partners, position, tick } => Self {
                name:     name.clone(),
                status:   "collided",
                x:        position.x,
                y:        position.y,
                heading:  None,
                tick:     Some(tick.0),
                partners: partners.join(LIST_SEPARATOR),
            },
        }
    }
}
