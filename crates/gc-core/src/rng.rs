//! Deterministic RNG wrapper used to generate scenarios.
//!
//! The simulation itself is fully deterministic and never draws random
//! numbers.  `SimRng` exists for the scenario generator: the same seed always
//! yields the same cars, so a generated scenario can be reproduced from its
//! seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Command, Heading};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for scenario generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one per
    /// generated car.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniformly random heading.
    pub fn heading(&mut self) -> Heading {
        Heading::CLOCKWISE[self.0.gen_range(0..Heading::CLOCKWISE.len())]
    }

    /// Random command queue of exactly `len` commands.
    pub fn commands(&mut self, len: usize) -> Vec<Command> {
        (0..len)
            .map(|_| Command::ALL[self.0.gen_range(0..Command::ALL.len())])
            .collect()
    }
}
