use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseVariantError;

/// A point on the unbounded integer grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// Returns the position one unit away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Legend order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    pub fn short_token(self) -> &'static str {
        &self.label()[..1]
    }

    /// Axis hint shown in the simple legend, e.g. `y+1`.
    pub fn axis_hint(self) -> &'static str {
        match self {
            Direction::North => "y+1",
            Direction::South => "y-1",
            Direction::East => "x+1",
            Direction::West => "x-1",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much of the session the console output reports. Both variants drive
/// the same tracker; `Detailed` adds the move count and trail to the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Simple,
    Detailed,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Simple => "simple",
            Variant::Detailed => "detailed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("simple") {
            Ok(Variant::Simple)
        } else if value.eq_ignore_ascii_case("detailed") {
            Ok(Variant::Detailed)
        } else {
            Err(ParseVariantError {
                value: value.to_string(),
            })
        }
    }
}
