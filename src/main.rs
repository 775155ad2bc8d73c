//! Headless runner for the pebble sandbox.
//!
//! Steps a sandbox for a fixed amount of simulated time, optionally
//! launching bodies at a regular interval, and reports the final state.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pebble::numeric::steps_in;
use pebble::{init_logging, Sandbox, SandboxConfig, Trigger};

/// Run the pebble physics sandbox without a window
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 10.0)]
    seconds: f64,
    /// Launch a body every N ticks (0 never launches)
    #[arg(short, long, default_value_t = 0)]
    launch_every: u64,
    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: Option<&PathBuf>) -> Result<SandboxConfig> {
    match path {
        Some(path) => SandboxConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(SandboxConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    let steps = steps_in(args.seconds, config.steps_per_second)
        .with_context(|| format!("cannot run for {} seconds", args.seconds))?;
    let mut sandbox = Sandbox::with_default_scene(&config).context("building sandbox")?;

    info!("running {steps} step(s)");
    for tick in 0..u64::from(steps) {
        if args.launch_every > 0 && tick % args.launch_every == 0 {
            sandbox.trigger(Trigger::Launch);
        }
        sandbox.tick();
    }

    let snapshot = sandbox.snapshot();
    info!(
        "finished at t={:.2}s with {} body(ies)",
        snapshot.time,
        snapshot.bodies.len()
    );
    if args.json {
        let json = snapshot.to_json().context("serialising snapshot")?;
        let mut out = io::stdout().lock();
        writeln!(out, "{json}").context("writing snapshot")?;
    }
    Ok(())
}
