use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    command::{read_line_lossy, Command},
    domain::{Direction, Position, Variant},
    error::{RejectedCommand, SessionError},
    report::{self, SessionSummary, COMMAND_PROMPT, INVALID_COMMAND_NOTICE},
    tracker::Tracker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended,
}

/// Outcome of feeding one input line to a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved {
        direction: Direction,
        position: Position,
    },
    Rejected(RejectedCommand),
    Stopped,
}

/// One run of the interactive loop, from the origin until `STOP`.
#[derive(Debug, Clone)]
pub struct Session {
    variant: Variant,
    tracker: Tracker,
    state: SessionState,
    rejected: usize,
}

impl Session {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            tracker: Tracker::new(),
            state: SessionState::Running,
            rejected: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn rejected_commands(&self) -> usize {
        self.rejected
    }

    pub fn step(&mut self, line: &str) -> Result<Step, SessionError> {
        if self.state == SessionState::Ended {
            return Err(SessionError::Ended);
        }

        match Command::parse(line) {
            Ok(Command::Stop) => {
                self.end();
                Ok(Step::Stopped)
            }
            Ok(Command::Move(direction)) => {
                let position = self.tracker.move_towards(direction);
                Ok(Step::Moved {
                    direction,
                    position,
                })
            }
            Err(rejected) => {
                self.rejected += 1;
                warn!(token = %rejected.token, "session: rejected command");
                Ok(Step::Rejected(rejected))
            }
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            variant: self.variant,
            final_position: self.tracker.position(),
            accepted_moves: self.tracker.history().len(),
            rejected_commands: self.rejected,
            returned_to_origin: self.tracker.is_at_origin(),
            trail: self.tracker.history().to_vec(),
        }
    }

    /// Drives the session from `input` until `STOP` or end of input, writing
    /// the banner, per-command feedback and the final summary to `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<SessionSummary, SessionError> {
        if self.state == SessionState::Ended {
            return Err(SessionError::Ended);
        }

        info!(variant = %self.variant, "session: started");
        report::write_start_banner(output, self.variant, self.tracker.position())?;

        loop {
            write!(output, "\n{COMMAND_PROMPT}")?;
            output.flush()?;

            let Some(line) = read_line_lossy(&mut input)? else {
                warn!("session: input closed before STOP, ending session");
                self.end();
                break;
            };

            match self.step(&line)? {
                Step::Moved {
                    direction,
                    position,
                } => writeln!(output, "{}", report::move_feedback(direction, position))?,
                Step::Rejected(_) => writeln!(output, "{INVALID_COMMAND_NOTICE}")?,
                Step::Stopped => break,
            }
        }

        let summary = self.summary();
        report::write_summary(output, &summary)?;
        output.flush()?;
        Ok(summary)
    }

    fn end(&mut self) {
        self.state = SessionState::Ended;
        info!(
            x = self.tracker.position().x,
            y = self.tracker.position().y,
            moves = self.tracker.history().len(),
            rejected = self.rejected,
            "session: ended"
        );
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
