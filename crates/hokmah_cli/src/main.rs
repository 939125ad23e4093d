//! Console front-end for the Hokmah task tracker.
//!
//! # Responsibility
//! - Parse flags, start logging and open the tracker.
//! - Feed stdin lines to the tracker and print each outcome.
//! - Stop on the farewell reply or end of input.

mod render;

use anyhow::Context;
use clap::Parser;
use hokmah_core::{
    default_log_dir, default_log_level, init_logging, Outcome, Tracker, TrackerConfig,
    TrackerError,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hokmah")]
#[command(about = "A personal task tracker that would rather you left it alone")]
struct Cli {
    /// Save file path (defaults to the platform data directory)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print each outcome as one JSON object per line
    #[arg(long)]
    json: bool,
}

fn start_logging(cli: &Cli) {
    let Some(log_dir) = cli.log_dir.clone().or_else(default_log_dir) else {
        return;
    };
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
}

struct Console<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Console<W> {
    fn block(&mut self, lines: &[String]) -> io::Result<()> {
        let rule = render::separator();
        writeln!(self.out, "{rule}")?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{rule}")?;
        self.out.flush()
    }

    fn welcome(&mut self) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        self.block(&render::welcome_lines())
    }

    fn startup_error(&mut self, err: TrackerError) -> anyhow::Result<()> {
        if self.json {
            let value = render::error_json(err).context("failed to encode error")?;
            writeln!(self.out, "{value}")?;
            return Ok(());
        }
        self.block(&[err.to_string()])?;
        Ok(())
    }

    fn outcome(&mut self, outcome: &Outcome) -> anyhow::Result<()> {
        if self.json {
            let value = render::outcome_json(outcome).context("failed to encode outcome")?;
            writeln!(self.out, "{value}")?;
            self.out.flush()?;
            return Ok(());
        }
        self.block(&render::outcome_lines(outcome))?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    start_logging(&cli);

    let config = cli
        .data_file
        .clone()
        .map(TrackerConfig::new)
        .unwrap_or_default();
    let (mut tracker, load_error) = Tracker::open(config);

    let mut console = Console {
        out: io::stdout().lock(),
        json: cli.json,
    };
    console.welcome()?;
    if let Some(err) = load_error {
        console.startup_error(err)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command from stdin")?;
        let outcome = tracker.process(&line);
        console.outcome(&outcome)?;
        if outcome.is_farewell() {
            break;
        }
    }

    info!(
        "event=session_end module=cli status=ok tasks={}",
        tracker.tasks().len()
    );
    Ok(())
}
