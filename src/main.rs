//! CSV replay harness for the sweepline engine.
//!
//! Replays a bar feed through the engine and logs liquidity activity:
//! confirmed swings (optional), sweep events with their geometry, and
//! rejected bars.
//!
//! Usage: cargo run --release -- path/to/bars.csv

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use sweepline_config::Config;
use sweepline_data::load_bars_from_csv;
use sweepline_engine::SweepEngine;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load_default();
    let engine_config = config.engine.engine_config()?;

    let csv_path: PathBuf = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match &config.replay.csv_path {
            Some(path) => path.clone(),
            None => bail!("no CSV path given on the command line or in sweepline.toml"),
        },
    };

    let bars = load_bars_from_csv(&csv_path)
        .with_context(|| format!("loading bars from {}", csv_path.display()))?;
    if bars.is_empty() {
        bail!("{} contains no bars", csv_path.display());
    }

    let mut engine = SweepEngine::new(engine_config);
    let mut rejected = 0usize;
    let mut total_swings = 0usize;
    let mut total_sweeps = 0usize;

    for bar in &bars {
        let outcome = match engine.process_bar(bar) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("skipping bar: {err}");
                rejected += 1;
                continue;
            }
        };

        if config.replay.log_swings {
            for swing in &outcome.swings {
                log::info!(
                    "bar {}: confirmed {:?} swing at {} (origin bar {})",
                    outcome.index,
                    swing.kind,
                    swing.price,
                    swing.origin_index
                );
            }
        }

        for event in &outcome.sweeps {
            total_sweeps += 1;
            log::info!(
                "bar {}: swept {:?} level {} from bar {} (zone {}..{} at {}..{})",
                event.trigger_index,
                event.level.kind,
                event.level.price,
                event.level.origin_index,
                event.zone.start_index,
                event.zone.end_index,
                event.zone.min_price,
                event.zone.max_price
            );
        }

        total_swings += outcome.swings.len();
    }

    println!("=== Replay summary ===");
    println!("Bars processed:   {}", engine.bars_processed());
    println!("Bars rejected:    {}", rejected);
    println!("Swings confirmed: {}", total_swings);
    println!("Sweeps emitted:   {}", total_sweeps);
    println!(
        "Live levels:      {} resistance, {} support",
        engine.active_resistance().count(),
        engine.active_support().count()
    );

    Ok(())
}
