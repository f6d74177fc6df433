//! `gc-core` — foundational types for the `gridcar` simulator.
//!
//! This crate is a dependency of every other `gc-*` crate.  It has no `gc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`                                               |
//! | [`grid`]        | `GridPos`, `GridBounds`, boundary clamp               |
//! | [`heading`]     | `Heading` and its rotation table                      |
//! | [`command`]     | `Command` (`F`/`L`/`R`) and queue formatting          |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded scenario generation)                 |
//! | [`error`]       | `GcError`, `GcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod command;
pub mod error;
pub mod grid;
pub mod heading;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::Command;
pub use error::{GcError, GcResult};
pub use grid::{GridBounds, GridPos};
pub use heading::Heading;
pub use ids::CarId;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
