//! Geometry projection for sweep events.
//!
//! Pure functions from (level, bar) to drawing records; no state. A
//! mitigation produces no geometry, so nothing here handles it.

use sweepline_core::Bar;

use crate::types::{HighlightBox, Level, LevelKind, ReferenceLine, SweepEvent};

/// Line at the level price from its origin bar to the sweeping bar.
pub fn reference_line(level: &Level, trigger_index: usize) -> ReferenceLine {
    ReferenceLine {
        start_index: level.origin_index,
        end_index: trigger_index,
        price: level.price,
    }
}

/// Highlight spanning one bar to either side of the sweeping bar,
/// bounded between the breaching wick extreme and the level price.
pub fn highlight_box(level: &Level, bar: &Bar, trigger_index: usize) -> HighlightBox {
    let (min_price, max_price) = match level.kind {
        LevelKind::Resistance => (level.price, bar.high),
        LevelKind::Support => (bar.low, level.price),
    };
    HighlightBox {
        start_index: trigger_index.saturating_sub(1),
        end_index: trigger_index + 1,
        min_price,
        max_price,
    }
}

/// Assemble the full sweep event for a level swept by `bar`.
///
/// `level` is the post-sweep snapshot (`swept` already true).
pub fn sweep_event(level: Level, bar: &Bar, trigger_index: usize) -> SweepEvent {
    SweepEvent {
        level,
        trigger_index,
        line: reference_line(&level, trigger_index),
        zone: highlight_box(&level, bar, trigger_index),
    }
}
