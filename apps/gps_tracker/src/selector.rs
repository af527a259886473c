use std::io::{self, BufRead, Write};

use tracing::debug;
use tracker_core::{command::read_line_lossy, report::version_name, Variant};

pub const FALLBACK_NOTICE: &str = "Invalid choice. Running simple version by default.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(Variant),
    Fallback,
}

impl Selection {
    pub fn variant(self) -> Variant {
        match self {
            Selection::Chosen(variant) => variant,
            Selection::Fallback => Variant::Simple,
        }
    }
}

pub fn interpret_choice(raw: &str) -> Selection {
    match raw.trim() {
        "1" => Selection::Chosen(Variant::Simple),
        "2" => Selection::Chosen(Variant::Detailed),
        _ => Selection::Fallback,
    }
}

/// Asks which variant to run. Closed input and undecodable bytes count as an
/// invalid choice.
pub fn choose_variant<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Variant> {
    writeln!(output, "Choose version:")?;
    writeln!(output, "1. {}", version_name(Variant::Simple))?;
    writeln!(output, "2. {}", version_name(Variant::Detailed))?;
    write!(output, "Enter choice (1 or 2): ")?;
    output.flush()?;

    let line = read_line_lossy(input)?.unwrap_or_default();

    let selection = interpret_choice(&line);
    if selection == Selection::Fallback {
        writeln!(output, "{FALLBACK_NOTICE}")?;
    }
    debug!(?selection, "selector: variant chosen");
    Ok(selection.variant())
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
