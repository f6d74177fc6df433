//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  Ticks are 1-indexed:
//! tick `t` executes the command at queue index `t - 1`, and `Tick::ZERO`
//! means "nothing has run yet".

use std::fmt;

use crate::{GcResult, GridBounds};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick (a "step" in the printed report).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The first tick that executes a command.
    pub const FIRST: Tick = Tick(1);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Command-queue index executed at this tick, or `None` for `Tick::ZERO`.
    #[inline]
    pub fn command_index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the last tick the simulation has processed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Last processed tick; `Tick::ZERO` before the first step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick and return the new tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = self.current_tick.next();
        self.current_tick
    }

    /// `true` once at least one tick has been processed.
    #[inline]
    pub fn started(&self) -> bool {
        self.current_tick > Tick::ZERO
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Configuration for one simulation run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid dimensions.
    pub bounds: GridBounds,

    /// Emit a position snapshot to the observer every N ticks.  0 disables.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// Validated config for a `width × height` grid with snapshots every tick.
    pub fn new(width: u32, height: u32) -> GcResult<Self> {
        Ok(Self {
            bounds: GridBounds::new(width, height)?,
            snapshot_interval_ticks: 1,
        })
    }

    /// Replace the snapshot interval (0 disables snapshots).
    pub fn with_snapshot_interval(mut self, ticks: u64) -> Self {
        self.snapshot_interval_ticks = ticks;
        self
    }

    /// `true` if the observer should receive a snapshot at `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0 % self.snapshot_interval_ticks == 0
    }
}
