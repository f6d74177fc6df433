//! Input-contract error type.
//!
//! Every value that reaches the simulation core is expected to be valid
//! already.  When it is not, construction fails fast with a `GcError` instead
//! of silently coercing the value.  Sub-crates wrap `GcError` as one variant
//! of their own error enums.

use thiserror::Error;

use crate::{GridBounds, GridPos};

/// Violations of the simulation input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GcError {
    #[error("grid must be at least 1x1 and at most i32::MAX per side, got {width}x{height}")]
    InvalidGrid { width: u32, height: u32 },

    #[error("car name cannot be empty")]
    EmptyName,

    #[error("a car named {0:?} already exists")]
    DuplicateName(String),

    #[error("car {name:?} at {pos} is outside the {bounds} grid")]
    OutOfBounds {
        name:   String,
        pos:    GridPos,
        bounds: GridBounds,
    },

    #[error("invalid heading {0:?}, expected one of N, E, S, W")]
    InvalidHeading(String),

    #[error("invalid command {0:?}, expected one of F, L, R")]
    InvalidCommand(char),
}

/// Shorthand result type for all `gc-*` crates.
pub type GcResult<T> = Result<T, GcError>;
