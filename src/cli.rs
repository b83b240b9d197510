//! Command-line interface

use std::cell::Cell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gesture_oui::{EntryOutcome, GestureInput, GestureTrail, Symbol, PATTERN_TABLE};
use tracing::info;

use crate::config::AppConfig;
use crate::console::ConsoleFeedback;
use crate::trace::MotionTrace;

#[derive(Parser, Debug)]
#[command(name = "gesture-ip")]
#[command(version, about = "Type an IPv4 address with mid-air hand swipes", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Replay a recorded motion trace through the gesture engine
    Replay {
        /// Trace file (.toml or .json)
        trace: PathBuf,

        /// Override the detection threshold
        #[arg(long)]
        threshold: Option<f32>,

        /// Print the gesture debug trail after the replay
        #[arg(long)]
        trail: bool,
    },
    /// Print the gesture pattern table
    Keymap,
    /// Show the symbol a gesture pattern maps to
    Classify {
        /// Pattern of direction codes, e.g. "UL"
        pattern: String,
    },
}

/// Result of replaying a trace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub gestures: usize,
    pub rejected: usize,
    pub completed: Vec<String>,
    pub final_text: String,
}

/// Run a command, writing user-facing output to `out`
pub fn execute<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Replay {
            trace,
            threshold,
            trail,
        } => {
            let mut config = config.clone();
            if let Some(threshold) = threshold {
                config.detector.threshold = *threshold;
                config.validate()?;
            }
            let motion = MotionTrace::load(trace)?;
            let summary = replay(&motion, &config, *trail, out)?;
            writeln!(
                out,
                "{} gesture(s), {} rejected, {} address(es) completed",
                summary.gestures,
                summary.rejected,
                summary.completed.len()
            )?;
            Ok(())
        }
        Command::Keymap => {
            for (pattern, symbol) in PATTERN_TABLE {
                writeln!(out, "{:<3} {}", pattern, symbol)?;
            }
            Ok(())
        }
        Command::Classify { pattern } => {
            let symbol = Symbol::from_pattern(&pattern.to_ascii_uppercase());
            writeln!(out, "{}", symbol)?;
            Ok(())
        }
    }
}

/// Drive a trace through detection and entry, printing feedback to `out`
pub fn replay<W: Write>(
    trace: &MotionTrace,
    config: &AppConfig,
    show_trail: bool,
    out: &mut W,
) -> Result<ReplaySummary> {
    if let Some(description) = &trace.description {
        info!("Replaying trace: {}", description);
    }

    let mut source = trace.clone().into_source(config.detector.threshold)?;
    let feedback = ConsoleFeedback::new(&mut *out, config.feedback.cue_volume);
    let mut input = GestureInput::new(config.build_detector()?, config.build_entry(), feedback);

    let trail = GestureTrail::new(config.entry.trail_lines);
    if config.entry.trail_lines > 0 {
        trail.attach(input.bus_mut());
    }
    let finished = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&finished);
    input.subscribe(move |event| {
        if event.is_final() {
            counter.set(counter.get() + 1);
        }
    });

    input
        .start(&mut source)
        .context("Failed to start gesture input")?;
    let outcomes = input.pump(&mut source)?;
    input.stop(&mut source)?;

    let mut summary = ReplaySummary {
        gestures: finished.get(),
        final_text: input.entry().rendered(),
        ..ReplaySummary::default()
    };
    let mut committed = 0;
    for outcome in &outcomes {
        match outcome {
            EntryOutcome::Applied(_) => committed += 1,
            EntryOutcome::Completed(address) => {
                committed += 1;
                summary.completed.push(address.clone());
            }
            EntryOutcome::Previewed(_) | EntryOutcome::Rejected(_) => {}
        }
    }
    summary.rejected = summary.gestures.saturating_sub(committed);
    drop(input);

    if show_trail {
        for line in trail.lines() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(summary)
}
