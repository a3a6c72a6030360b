//! Headless comparison of every algorithm on one shuffled permutation
//!
//! Usage: `sort-report [--size N] [--seed S] [--config PATH]`
//!
//! Runs each engine with zero pacing and a silent sink and prints the
//! comparison, swap and rendered-step counts.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortviz_core::config::{default_config_path, load_config, VisualizerConfig};
use sortviz_core::{Algorithm, ArrayModel, Frame, RunController, RunOutcome, StepSink, Tone};

/// Sink that only counts frames
#[derive(Default)]
struct CountingSink {
    frames: u64,
}

impl StepSink for CountingSink {
    fn render(&mut self, _frame: &Frame<'_>) {
        self.frames += 1;
    }

    fn play_tone(&mut self, _tone: Tone) -> Result<()> {
        Ok(())
    }
}

/// Rendered steps without the final sweep, which only a completed run plays
/// in full
fn sort_steps(steps: u64, len: usize, outcome: RunOutcome) -> u64 {
    match outcome {
        RunOutcome::Completed => steps.saturating_sub(len as u64),
        RunOutcome::Stopped | RunOutcome::Ignored => steps,
    }
}

struct Args {
    size: Option<usize>,
    seed: u64,
    config: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        size: None,
        seed: 1,
        config: default_config_path(),
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = || iter.next().with_context(|| format!("{} needs a value", arg));
        match arg.as_str() {
            "--size" => args.size = Some(value()?.parse().context("--size must be a number")?),
            "--seed" => args.seed = value()?.parse().context("--seed must be a number")?,
            "--config" => args.config = PathBuf::from(value()?),
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = parse_args()?;
    let mut config: VisualizerConfig = load_config(&args.config);
    if let Some(size) = args.size {
        config.element_count = size;
    }
    config.validate();
    let config = config.without_pacing();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let start = ArrayModel::shuffled(config.element_count, &mut rng)?;

    println!(
        "{} elements, seed {}",
        config.element_count, args.seed
    );
    println!(
        "{:<16} {:>12} {:>10} {:>8} {:>7}",
        "algorithm", "comparisons", "swaps", "steps", "sorted"
    );

    for algorithm in Algorithm::ALL {
        let mut controller =
            RunController::with_array(start.clone(), config.clone(), CountingSink::default());
        let outcome = controller.start(algorithm);
        let counters = controller.counters();
        let sorted = outcome == RunOutcome::Completed && controller.array().is_sorted();
        println!(
            "{:<16} {:>12} {:>10} {:>8} {:>7}",
            algorithm.name(),
            counters.comparisons,
            counters.swaps,
            sort_steps(controller.steps(), controller.array().len(), outcome),
            if sorted { "yes" } else { "NO" }
        );
        if !sorted {
            bail!("{} did not sort the permutation", algorithm);
        }
    }
    Ok(())
}
