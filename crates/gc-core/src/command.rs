//! Car commands.
//!
//! The alphabet is closed: a `Command` can only be `F`, `L` or `R`, so an
//! invalid symbol is rejected when converting from text and can never reach
//! the simulation.

use std::fmt;

use crate::{GcError, GcResult};

/// One instruction in a car's command queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Move one cell forward.
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Forward,
    /// Rotate 90° counter-clockwise.
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    Left,
    /// Rotate 90° clockwise.
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Right,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Forward, Command::Left, Command::Right];

    pub fn as_char(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Left    => 'L',
            Command::Right   => 'R',
        }
    }

    /// Parse a whole command string such as `"FFRFF"`.
    ///
    /// Case-insensitive.  Fails on the first symbol outside `F`/`L`/`R`.
    /// The empty string is a valid, empty queue.
    pub fn parse_queue(s: &str) -> GcResult<Vec<Command>> {
        s.chars().map(Command::try_from).collect()
    }

    /// Render a queue back to its compact text form.
    pub fn queue_to_string(queue: &[Command]) -> String {
        queue.iter().map(|c| c.as_char()).collect()
    }
}

impl TryFrom<char> for Command {
    type Error = GcError;

    fn try_from(c: char) -> GcResult<Self> {
        match c.to_ascii_uppercase() {
            'F' => Ok(Command::Forward),
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            _   => Err(GcError::InvalidCommand(c)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
