//! `gc-sim` — tick loop and collision detection for the `gridcar` simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 1..=max_commands:
//!   ① Move     — each car, in insertion order, executes command[tick - 1]
//!                if its queue reaches that far and it has not collided.
//!   ② Group    — every car (collided or not) is grouped by cell.
//!   ③ Collide  — in each group of 2+, every car not yet collided is frozen
//!                with the other occupants as partners.  Already-collided
//!                cars keep their record but still block the cell.
//! ```
//!
//! Collisions are only evaluated after every car has moved for the tick, so
//! cars that swap cells in one tick pass through each other.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` on reports and events.       |
//! | `fx-hash` | FxHash instead of SipHash for the collision index.     |
//!
//! # Quick-start
//!
//! ```rust
//! use gc_car::CarSpec;
//! use gc_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::grid(10, 10)?
//!     .car(CarSpec::parse("A", 1, 2, "N", "FFRFFFFRRL")?)
//!     .car(CarSpec::parse("B", 7, 8, "W", "FFLFFFFFFF")?)
//!     .build()?;
//! let report = sim.run();
//! assert_eq!(
//!     report.to_string(),
//!     "- A, collides with B at (5,4) at step 7\n- B, collides with A at (5,4) at step 7",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::CollisionEvent;
pub use observer::{NoopObserver, SimObserver};
pub use report::{CarOutcome, SimReport};
pub use sim::Sim;
