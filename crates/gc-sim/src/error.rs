use gc_core::{GcError, Tick};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid simulation input: {0}")]
    Contract(#[from] GcError),

    #[error("cannot add cars once the simulation has started (at step {0})")]
    AlreadyStarted(Tick),
}

pub type SimResult<T> = Result<T, SimError>;
