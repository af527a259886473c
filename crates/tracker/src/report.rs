//! Console wording for banners, per-command feedback and the end-of-session
//! summary.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Direction, Position, Variant},
    tracker::join_trail,
};

pub const COMMAND_PROMPT: &str = "Enter command: ";
pub const INVALID_COMMAND_NOTICE: &str =
    "Invalid command! Please use N/North, S/South, E/East, W/West, or STOP";
pub const SESSION_ENDED: &str = "SESSION ENDED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub variant: Variant,
    pub final_position: Position,
    pub accepted_moves: usize,
    pub rejected_commands: usize,
    pub returned_to_origin: bool,
    pub trail: Vec<Direction>,
}

impl SessionSummary {
    pub fn trail_text(&self) -> String {
        join_trail(&self.trail)
    }
}

/// Name shared by the startup menu and the detailed banner.
pub fn version_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Simple => "Simple version",
        Variant::Detailed => "Detailed version",
    }
}

pub fn title(variant: Variant) -> String {
    match variant {
        Variant::Simple => "=== GPS Tracker Simulator ===".to_string(),
        Variant::Detailed => format!("=== GPS Tracker Simulator ({}) ===", version_name(variant)),
    }
}

fn rule_width(variant: Variant) -> usize {
    match variant {
        Variant::Simple => 40,
        Variant::Detailed => 45,
    }
}

fn legend_line(variant: Variant, direction: Direction) -> String {
    let short = direction.short_token();
    let label = direction.label();
    let mut line = format!(
        "  {short} or {} or {label} or {} = Move {label}",
        short.to_lowercase(),
        label.to_lowercase()
    );
    if variant == Variant::Simple {
        line.push_str(&format!(" ({})", direction.axis_hint()));
    }
    line
}

pub fn write_start_banner<W: Write>(
    out: &mut W,
    variant: Variant,
    start: Position,
) -> io::Result<()> {
    writeln!(out, "{}", title(variant))?;
    writeln!(out, "Starting position: {start}")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    for direction in Direction::ALL {
        writeln!(out, "{}", legend_line(variant, direction))?;
    }
    writeln!(out, "  STOP = End session")?;
    writeln!(out, "{}", "-".repeat(rule_width(variant)))
}

pub fn move_feedback(direction: Direction, position: Position) -> String {
    format!("Moved {direction}. Current position: {position}")
}

pub fn write_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    let rule = "=".repeat(rule_width(summary.variant));
    let detailed = summary.variant == Variant::Detailed;

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{SESSION_ENDED}")?;
    writeln!(out, "Final position: {}", summary.final_position)?;
    if detailed {
        writeln!(out, "Total moves made: {}", summary.accepted_moves)?;
    }

    if summary.returned_to_origin {
        writeln!(out, "Congratulations! You returned to the origin (0, 0)!")?;
    } else {
        writeln!(out, "You did not return to the origin (0, 0).")?;
    }

    if detailed && !summary.trail.is_empty() {
        writeln!(out, "Move history: {}", summary.trail_text())?;
    }
    writeln!(out, "{rule}")
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
