use std::{
    io::{self, BufRead},
    str::FromStr,
};

use crate::{domain::Direction, error::RejectedCommand};

pub const STOP_TOKEN: &str = "STOP";

/// Trims surrounding whitespace and uppercases.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Reads one raw line, `None` at end of input. Invalid UTF-8 is decoded
/// lossily instead of failing the read.
pub fn read_line_lossy<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Stop,
    Move(Direction),
}

impl Command {
    /// Normalizes `raw` and matches it against the fixed vocabulary. Empty and
    /// malformed input fall into the same rejection as unknown words.
    pub fn parse(raw: &str) -> Result<Self, RejectedCommand> {
        let token = normalize(raw);
        let command = match token.as_str() {
            STOP_TOKEN => Command::Stop,
            "N" | "NORTH" => Command::Move(Direction::North),
            "S" | "SOUTH" => Command::Move(Direction::South),
            "E" | "EAST" => Command::Move(Direction::East),
            "W" | "WEST" => Command::Move(Direction::West),
            _ => return Err(RejectedCommand::new(token)),
        };
        Ok(command)
    }
}

impl FromStr for Command {
    type Err = RejectedCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
