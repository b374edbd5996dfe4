//! Engine facade: one bar in, one typed outcome out.

use thiserror::Error;

use sweepline_core::{validate_bar, Bar};

use crate::evaluator::evaluate_bar;
use crate::pyramid::{ExtremaPyramid, PyramidMode};
use crate::types::{BarOutcome, CandidatePoint, EngineConfig, Level, LevelRegistry};

/// Caller contract violations. Rejected bars leave all state untouched,
/// so the caller may drop the bar and continue with the next one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarError {
    #[error("bar {index} has a timestamp not after the previous bar")]
    NonMonotonicTime { index: usize },
    #[error("bar {index} has non-finite or inverted OHLC values")]
    InvalidValues { index: usize },
}

impl BarError {
    /// Position in the accepted-bar sequence the offending bar would
    /// have taken.
    pub fn index(&self) -> usize {
        match *self {
            BarError::NonMonotonicTime { index } => index,
            BarError::InvalidValues { index } => index,
        }
    }
}

/// The streaming swing-extrema and level lifecycle engine.
///
/// Owns two pyramids (one over highs, one over lows), the level
/// registry, and the running bar index. Strictly sequential: bars are
/// processed one at a time, in arrival order, each to completion. Work
/// per bar is bounded by the pyramid depth plus the number of live
/// levels; no history is re-read.
///
/// One engine tracks one instrument. Parallelizing across instruments
/// means one engine per instrument; state is never shared.
#[derive(Debug)]
pub struct SweepEngine {
    config: EngineConfig,
    highs: ExtremaPyramid,
    lows: ExtremaPyramid,
    registry: LevelRegistry,
    /// Index the next accepted bar will be assigned.
    next_index: usize,
    /// Timestamp of the last accepted bar.
    last_timestamp: Option<f64>,
}

impl SweepEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            highs: ExtremaPyramid::new(PyramidMode::Bull, config.depth),
            lows: ExtremaPyramid::new(PyramidMode::Bear, config.depth),
            registry: LevelRegistry::new(),
            next_index: 0,
            last_timestamp: None,
        }
    }

    /// Process one bar to completion.
    ///
    /// Order within the bar: validate, update both pyramids, register
    /// any confirmed swings, evaluate every active level for mitigation
    /// and sweep, prune mitigated and over-age levels. A level mitigated
    /// by this bar is still evaluated against it and disappears from the
    /// live lists only afterwards.
    pub fn process_bar(&mut self, bar: &Bar) -> Result<BarOutcome, BarError> {
        let index = self.next_index;

        if !validate_bar(bar) {
            return Err(BarError::InvalidValues { index });
        }
        if let Some(last) = self.last_timestamp {
            if bar.timestamp <= last {
                return Err(BarError::NonMonotonicTime { index });
            }
        }

        self.last_timestamp = Some(bar.timestamp);
        self.next_index += 1;

        let mut outcome = BarOutcome {
            index,
            ..BarOutcome::default()
        };

        if let Some(swing) = self.highs.push(CandidatePoint::new(bar.high, index)) {
            outcome.swings.push(swing);
            if let Some(level) = self.registry.register(&swing) {
                outcome.new_levels.push(level);
            }
        }
        if let Some(swing) = self.lows.push(CandidatePoint::new(bar.low, index)) {
            outcome.swings.push(swing);
            if let Some(level) = self.registry.register(&swing) {
                outcome.new_levels.push(level);
            }
        }

        outcome.sweeps = evaluate_bar(&mut self.registry, bar, index);
        self.registry.prune(index, self.config.max_level_age);

        Ok(outcome)
    }

    /// Live resistance levels, newest first.
    pub fn active_resistance(&self) -> impl Iterator<Item = &Level> {
        self.registry.resistance.iter()
    }

    /// Live support levels, newest first.
    pub fn active_support(&self) -> impl Iterator<Item = &Level> {
        self.registry.support.iter()
    }

    /// The level registry.
    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Number of bars accepted so far.
    pub fn bars_processed(&self) -> usize {
        self.next_index
    }

    /// The configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reset all state, keeping the configuration.
    pub fn reset(&mut self) {
        self.highs.reset();
        self.lows.reset();
        self.registry.clear();
        self.next_index = 0;
        self.last_timestamp = None;
    }
}
