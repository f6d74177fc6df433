//! Construction input for a single car.

use gc_core::{Command, GcError, GcResult, GridBounds, GridPos, Heading};

/// Everything needed to place one car on the grid.
///
/// Heading and commands are typed, so only the name and position can be
/// wrong; [`validate`](Self::validate) checks those against a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSpec {
    pub name:     String,
    pub position: GridPos,
    pub heading:  Heading,
    pub commands: Vec<Command>,
}

impl CarSpec {
    pub fn new(
        name:     impl Into<String>,
        position: impl Into<GridPos>,
        heading:  Heading,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            heading,
            commands,
        }
    }

    /// Build a spec from the compact text forms used on the console,
    /// e.g. `CarSpec::parse("A", 1, 2, "N", "FFRFF")`.
    pub fn parse(name: &str, x: i32, y: i32, heading: &str, commands: &str) -> GcResult<Self> {
        Ok(Self::new(
            name,
            (x, y),
            heading.parse()?,
            Command::parse_queue(commands)?,
        ))
    }

    /// Check the name and starting cell against `bounds`.
    ///
    /// Name uniqueness depends on the other cars and is checked by
    /// [`CarRoster::push`](crate::CarRoster::push).
    pub fn validate(&self, bounds: GridBounds) -> GcResult<()> {
        if self.name.trim().is_empty() {
            return Err(GcError::EmptyName);
        }
        if !bounds.contains(self.position) {
            return Err(GcError::OutOfBounds {
                name:   self.name.clone(),
                pos:    self.position,
                bounds,
            });
        }
        Ok(())
    }
}
