//! Built-in scenarios and the seeded random scenario generator.

use std::collections::HashSet;

use anyhow::{Result, bail};
use gc_car::CarSpec;
use gc_core::{GridBounds, GridPos, SimConfig, SimRng};
use gc_sim::{Sim, SimBuilder};

/// `(name, x, y, heading, commands)` in console notation.
type CarRow = (&'static str, i32, i32, &'static str, &'static str);

pub struct Scenario {
    pub name:        &'static str,
    pub description: &'static str,
    pub width:       u32,
    pub height:      u32,
    pub cars:        &'static [CarRow],
}

impl Scenario {
    pub fn specs(&self) -> Result<Vec<CarSpec>> {
        let specs = self
            .cars
            .iter()
            .map(|&(name, x, y, heading, commands)| CarSpec::parse(name, x, y, heading, commands))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(specs)
    }

    pub fn build(&self, snapshot_interval: u64) -> Result<Sim> {
        let sim = SimBuilder::grid(self.width, self.height)?
            .cars(self.specs()?)
            .snapshot_interval(snapshot_interval)
            .build()?;
        Ok(sim)
    }
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name:        "single",
        description: "one car drives north, turns east and ends facing south",
        width:       10,
        height:      10,
        cars:        &[("A", 1, 2, "N", "FFRFFFFRRL")],
    },
    Scenario {
        name:        "crossing",
        description: "two cars meet at (5,4) on step 7",
        width:       10,
        height:      10,
        cars:        &[("A", 1, 2, "N", "FFRFFFFRRL"), ("B", 7, 8, "W", "FFLFFFFFFF")],
    },
    Scenario {
        name:        "head-on",
        description: "two cars drive into each other on step 1",
        width:       10,
        height:      10,
        cars:        &[("Car1", 2, 2, "N", "FF"), ("Car2", 2, 4, "S", "FF")],
    },
    Scenario {
        name:        "pile-up",
        description: "a third car drives into an earlier wreck",
        width:       10,
        height:      10,
        cars:        &[("A", 0, 0, "E", "F"), ("B", 2, 0, "W", "F"), ("C", 1, 3, "S", "FFF")],
    },
    Scenario {
        name:        "wall",
        description: "a car pushes against the north edge",
        width:       10,
        height:      10,
        cars:        &[("A", 5, 8, "N", "FFFFR")],
    },
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

// ── Random scenarios ──────────────────────────────────────────────────────────

/// Upper limit on `RandomParams::cars`.
pub const MAX_RANDOM_CARS: usize = 10_000;

/// Upper limit on `RandomParams::max_commands`.
pub const MAX_RANDOM_COMMANDS: usize = 10_000;

/// Settings for [`generate`].
pub struct RandomParams {
    pub width:        u32,
    pub height:       u32,
    pub cars:         usize,
    pub max_commands: usize,
    pub seed:         u64,
}

/// Console-style name for the `i`-th generated car: `A`..`Z`, then `Car27`...
fn car_name(i: usize) -> String {
    match u8::try_from(i) {
        Ok(n) if n < 26 => char::from(b'A' + n).to_string(),
        _ => format!("Car{}", i + 1),
    }
}

/// Generate `params.cars` cars on distinct starting cells.
///
/// The same parameters always produce the same cars.
pub fn generate(params: &RandomParams) -> Result<Vec<CarSpec>> {
    let bounds = GridBounds::new(params.width, params.height)?;
    if params.cars > MAX_RANDOM_CARS {
        bail!("at most {MAX_RANDOM_CARS} cars can be generated, got {}", params.cars);
    }
    if params.max_commands > MAX_RANDOM_COMMANDS {
        bail!("at most {MAX_RANDOM_COMMANDS} commands per car, got {}", params.max_commands);
    }
    if params.cars as u64 > bounds.area() {
        bail!("cannot place {} cars on a {bounds} grid", params.cars);
    }

    let mut rng = SimRng::new(params.seed);
    let mut taken: HashSet<GridPos> = HashSet::new();
    let mut specs = Vec::new();

    for i in 0..params.cars {
        let mut car_rng = rng.child(i as u64);
        let position = loop {
            let pos = GridPos::new(
                car_rng.gen_range(0..params.width as i32),
                car_rng.gen_range(0..params.height as i32),
            );
            if taken.insert(pos) {
                break pos;
            }
        };
        let len = car_rng.gen_range(0..=params.max_commands);
        specs.push(CarSpec::new(car_name(i), position, car_rng.heading(), car_rng.commands(len)));
    }
    Ok(specs)
}

/// Build a ready-to-run sim from generated cars.
pub fn build_random(params: &RandomParams, snapshot_interval: u64) -> Result<Sim> {
    let config = SimConfig::new(params.width, params.height)?.with_snapshot_interval(snapshot_interval);
    let sim = SimBuilder::new(config).cars(generate(params)?).build()?;
    Ok(sim)
}
