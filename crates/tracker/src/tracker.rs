use tracing::debug;

use crate::{
    command::{Command, STOP_TOKEN},
    domain::{Direction, Position},
    error::RejectedCommand,
};

/// Position plus the ordered log of accepted moves.
///
/// The position is always the vector sum of the unit steps in `history`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    position: Position,
    history: Vec<Direction>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn history(&self) -> &[Direction] {
        &self.history
    }

    pub fn is_at_origin(&self) -> bool {
        self.position.is_origin()
    }

    /// Moves one unit in `direction` and records it.
    pub fn move_towards(&mut self, direction: Direction) -> Position {
        self.position = self.position.step(direction);
        self.history.push(direction);
        debug!(
            direction = direction.label(),
            x = self.position.x,
            y = self.position.y,
            moves = self.history.len(),
            "tracker: moved"
        );
        self.position
    }

    /// Applies a raw movement command and returns the new position.
    ///
    /// `STOP` ends a session rather than moving, so it is rejected here like
    /// any other non-movement token.
    pub fn apply(&mut self, command: &str) -> Result<Position, RejectedCommand> {
        match Command::parse(command)? {
            Command::Move(direction) => Ok(self.move_towards(direction)),
            Command::Stop => Err(RejectedCommand::new(STOP_TOKEN)),
        }
    }

    /// Direction labels joined with ` -> `.
    pub fn trail(&self) -> String {
        join_trail(&self.history)
    }
}

pub(crate) fn join_trail(history: &[Direction]) -> String {
    history
        .iter()
        .map(|direction| direction.label())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
