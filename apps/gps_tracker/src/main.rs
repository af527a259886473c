use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracker_core::{Session, SessionSummary, Variant};

mod config;
mod selector;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "gps_tracker",
    version,
    about = "Track a point on a 2D grid with N/S/E/W commands until STOP"
)]
struct Args {
    /// Config file (defaults to ./gps_tracker.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip the startup prompt and run this variant (simple or detailed).
    #[arg(long)]
    variant: Option<Variant>,
    /// Print the session summary as a JSON line after the console summary.
    #[arg(long)]
    summary_json: bool,
    /// tracing filter directives for stderr logs. RUST_LOG wins when set.
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(variant) = self.variant {
            settings.variant = Some(variant);
        }
        if self.summary_json {
            settings.summary_json = true;
        }
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// One JSON line, written after the console summary.
fn write_summary_json<W: Write>(out: &mut W, summary: &SessionSummary) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(summary)?)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_settings(args.config.as_deref())?;
    let mut settings = loaded.settings;
    args.apply_to(&mut settings);

    init_tracing(&settings.log_filter);
    for notice in &loaded.ignored {
        warn!("config: ignored {notice}");
    }
    info!(?settings, "gps_tracker starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let variant = match settings.variant {
        Some(variant) => variant,
        None => selector::choose_variant(&mut input, &mut output)
            .context("failed to read version choice")?,
    };

    let mut session = Session::new(variant);
    let summary = session
        .run(&mut input, &mut output)
        .context("tracker session failed")?;

    if settings.summary_json {
        write_summary_json(&mut output, &summary).context("failed to write summary json")?;
    }

    Ok(())
}
