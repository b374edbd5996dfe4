//! Per-bar sweep and mitigation evaluation.
//!
//! Every active level is tested exactly once per bar. Mitigation is
//! always tested before sweep for the same (level, bar) pair; the two
//! outcomes are independent functions of the bar's OHLC and do not
//! exclude each other.

use sweepline_core::Bar;

use crate::emit;
use crate::types::{Level, LevelKind, LevelRegistry, SweepEvent};

/// Evaluate all active levels of both kinds against one bar.
///
/// Resistance levels are scanned before support levels, each list
/// newest-first, so the event order for a given bar is deterministic.
/// Flags are updated in place; the caller prunes afterwards.
pub fn evaluate_bar(registry: &mut LevelRegistry, bar: &Bar, bar_index: usize) -> Vec<SweepEvent> {
    let mut events = Vec::new();

    for level in registry.resistance.iter_mut() {
        if let Some(event) = check_level(level, bar, bar_index) {
            events.push(event);
        }
    }
    for level in registry.support.iter_mut() {
        if let Some(event) = check_level(level, bar, bar_index) {
            events.push(event);
        }
    }

    events
}

/// Test one level against one bar, updating its lifecycle flags.
///
/// Returns a sweep event if the bar's wick breached the level while the
/// close held on the originating side and the level had not been swept
/// before.
fn check_level(level: &mut Level, bar: &Bar, bar_index: usize) -> Option<SweepEvent> {
    // Upstream integrity violation; skip rather than propagate garbage.
    if !level.price.is_finite() {
        return None;
    }

    match level.kind {
        LevelKind::Resistance => {
            if bar.close > level.price {
                level.mitigated = true;
            }
            if !level.swept && bar.high > level.price && bar.close < level.price {
                level.swept = true;
                return Some(emit::sweep_event(*level, bar, bar_index));
            }
        }
        LevelKind::Support => {
            if bar.close < level.price {
                level.mitigated = true;
            }
            if !level.swept && bar.low < level.price && bar.close > level.price {
                level.swept = true;
                return Some(emit::sweep_event(*level, bar, bar_index));
            }
        }
    }

    None
}
