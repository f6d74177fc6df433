//! A single car and its movement state machine.

use std::fmt;

use gc_core::{Command, GridBounds, GridPos, Heading, Tick};

use crate::CarSpec;

// ── CollisionRecord ───────────────────────────────────────────────────────────

/// What a car hit, where, and when.  Written exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionRecord {
    /// Names of every other car in the cell, in insertion order.
    pub partners: Vec<String>,
    pub position: GridPos,
    pub tick:     Tick,
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// One car on the grid.
///
/// Fields are private: the only mutations are [`transition`](Self::transition)
/// and [`mark_collided`](Self::mark_collided), and neither changes anything
/// once the car has collided.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    name:      String,
    position:  GridPos,
    heading:   Heading,
    commands:  Vec<Command>,
    collision: Option<CollisionRecord>,
}

impl Car {
    /// Create an active car from `spec` without re-validating it.
    pub fn new(spec: CarSpec) -> Self {
        Self {
            name:      spec.name,
            position:  spec.position,
            heading:   spec.heading,
            commands:  spec.commands,
            collision: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> GridPos {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[inline]
    pub fn collision(&self) -> Option<&CollisionRecord> {
        self.collision.as_ref()
    }

    #[inline]
    pub fn is_collided(&self) -> bool {
        self.collision.is_some()
    }

    /// The command this car executes at `tick`, if its queue reaches that far.
    #[inline]
    pub fn command_at(&self, tick: Tick) -> Option<Command> {
        tick.command_index().and_then(|i| self.commands.get(i).copied())
    }

    /// Apply one command.  No-op once the car has collided.
    ///
    /// `Forward` moves one cell along the heading, clamped per axis to
    /// `bounds`.  `Left`/`Right` rotate a quarter turn in place.
    pub fn transition(&mut self, command: Command, bounds: GridBounds) {
        if self.is_collided() {
            return;
        }
        match command {
            Command::Forward => self.position = bounds.step(self.position, self.heading),
            Command::Left    => self.heading = self.heading.left(),
            Command::Right   => self.heading = self.heading.right(),
        }
    }

    /// Freeze the car with `record`.
    ///
    /// Returns `false`, leaving the car untouched, if it had already collided.
    pub fn mark_collided(&mut self, record: CollisionRecord) -> bool {
        if self.is_collided() {
            return false;
        }
        self.collision = Some(record);
        true
    }
}

impl fmt::Display for Car {
    /// Pre-run listing line: `- <name>, (<x>,<y>), <heading> , <commands>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}, {}, {} , {}",
            self.name,
            self.position,
            self.heading,
            Command::queue_to_string(&self.commands),
        )
    }
}
