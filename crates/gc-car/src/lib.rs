//! `gc-car` — the car (agent) state machine for the `gridcar` simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`spec`]     | `CarSpec` — validated construction input for one car      |
//! | [`car`]      | `Car`, `CollisionRecord`, the `transition` state machine  |
//! | [`roster`]   | `CarRoster` — insertion-ordered, name-unique car storage  |
//!
//! A car is `Active` until its first collision and `Collided` forever after.
//! Only the simulation's collision pass moves a car from one state to the
//! other, through [`Car::mark_collided`].

pub mod car;
pub mod roster;
pub mod spec;


pub use car::{Car, CollisionRecord};
pub use roster::CarRoster;
pub use spec::CarSpec;
