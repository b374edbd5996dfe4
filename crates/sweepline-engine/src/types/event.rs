//! Event and geometry output records.
//!
//! These are opaque drawing records for the rendering side; the engine
//! attaches no behavior to them beyond construction.

use super::level::Level;
use super::swing::Swing;

/// A horizontal line drawn at a level's price, from the level's origin
/// bar to the bar that triggered the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    /// Bar index of the level's origin extremum.
    pub start_index: usize,
    /// Bar index of the sweeping bar.
    pub end_index: usize,
    /// The level price.
    pub price: f32,
}

/// A rectangular highlight around a sweeping bar.
///
/// Spans one bar to either side of the trigger bar, bounded vertically
/// between the breaching wick extreme and the level price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBox {
    /// Left edge, one bar before the trigger.
    pub start_index: usize,
    /// Right edge, one bar after the trigger.
    pub end_index: usize,
    /// Lower price bound.
    pub min_price: f32,
    /// Upper price bound.
    pub max_price: f32,
}

/// A liquidity sweep: a wick breached the level but the close recovered
/// to the originating side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEvent {
    /// Snapshot of the swept level, flags as of this bar.
    pub level: Level,
    /// Index of the bar whose wick performed the sweep.
    pub trigger_index: usize,
    /// Line from the level origin to the trigger bar.
    pub line: ReferenceLine,
    /// Highlight around the trigger bar.
    pub zone: HighlightBox,
}

/// Everything that happened while processing one bar.
///
/// Aggregation across bars is left to the caller; the engine never
/// appends to shared output buffers.
#[derive(Debug, Default, Clone)]
pub struct BarOutcome {
    /// Index assigned to the processed bar.
    pub index: usize,
    /// Swings confirmed on this bar (at most one per kind).
    pub swings: Vec<Swing>,
    /// Levels registered on this bar.
    pub new_levels: Vec<Level>,
    /// Sweep events emitted on this bar.
    pub sweeps: Vec<SweepEvent>,
}

impl BarOutcome {
    /// Returns true if nothing happened on this bar.
    pub fn is_quiet(&self) -> bool {
        self.swings.is_empty() && self.new_levels.is_empty() && self.sweeps.is_empty()
    }
}
