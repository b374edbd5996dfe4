//! Level types - price levels derived from swings with lifecycle tracking.

use std::collections::VecDeque;

use super::swing::{Swing, SwingKind};

/// The kind of a level, determined by the swing that sourced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelKind {
    /// Derived from a swing high; price is expected to stay below.
    Resistance,
    /// Derived from a swing low; price is expected to stay above.
    Support,
}

impl LevelKind {
    /// The level kind sourced by a swing of the given kind.
    pub fn from_swing(kind: SwingKind) -> Self {
        match kind {
            SwingKind::High => LevelKind::Resistance,
            SwingKind::Low => LevelKind::Support,
        }
    }
}

/// A price level derived from a confirmed swing.
///
/// `price` and `origin_index` never change after registration; only the
/// two lifecycle flags do, and both are monotone (false to true, never
/// back).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// The price of this level.
    pub price: f32,
    /// Index of the bar whose extremum defines this level.
    pub origin_index: usize,
    /// Resistance or support.
    pub kind: LevelKind,
    /// Price has closed conclusively through the level. A mitigated
    /// level is dead and is pruned before the next bar.
    pub mitigated: bool,
    /// A wick has breached the level with the close recovering inside
    /// it. Set at most once; further breaches emit nothing.
    pub swept: bool,
}

impl Level {
    /// Create a new armed level from a confirmed swing.
    pub fn from_swing(swing: &Swing) -> Self {
        Self {
            price: swing.price,
            origin_index: swing.origin_index,
            kind: LevelKind::from_swing(swing.kind),
            mitigated: false,
            swept: false,
        }
    }

    /// Returns true if this level is still alive (not mitigated).
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.mitigated
    }
}

/// Registry of live levels, split by kind.
///
/// Each list is ordered most-recent-first: new levels are pushed to the
/// front, stale levels fall off the back.
#[derive(Debug, Default)]
pub struct LevelRegistry {
    /// Resistance levels from swing highs, newest first.
    pub resistance: VecDeque<Level>,
    /// Support levels from swing lows, newest first.
    pub support: VecDeque<Level>,
}

impl LevelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new level from a confirmed swing.
    ///
    /// Guards against re-inserting an exact duplicate of the current
    /// front entry (same price and origin), which adjacent pyramid calls
    /// can otherwise produce.
    pub fn register(&mut self, swing: &Swing) -> Option<Level> {
        let level = Level::from_swing(swing);
        let list = self.list_mut(level.kind);

        if let Some(front) = list.front() {
            if front.price == level.price && front.origin_index == level.origin_index {
                return None;
            }
        }

        list.push_front(level);
        Some(level)
    }

    /// Remove mitigated levels and levels older than `max_age` bars.
    ///
    /// Runs once per bar, after evaluation, so the bar that mitigates a
    /// level is still the bar that tested it; the level is gone from the
    /// next bar onward.
    pub fn prune(&mut self, current_index: usize, max_age: usize) {
        let keep = |level: &Level| {
            level.is_active() && current_index.saturating_sub(level.origin_index) <= max_age
        };
        self.resistance.retain(keep);
        self.support.retain(keep);
    }

    /// The list holding levels of the given kind.
    pub fn list(&self, kind: LevelKind) -> &VecDeque<Level> {
        match kind {
            LevelKind::Resistance => &self.resistance,
            LevelKind::Support => &self.support,
        }
    }

    fn list_mut(&mut self, kind: LevelKind) -> &mut VecDeque<Level> {
        match kind {
            LevelKind::Resistance => &mut self.resistance,
            LevelKind::Support => &mut self.support,
        }
    }

    /// Total number of live levels across both kinds.
    pub fn len(&self) -> usize {
        self.resistance.len() + self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resistance.is_empty() && self.support.is_empty()
    }

    /// Clear all levels.
    pub fn clear(&mut self) {
        self.resistance.clear();
        self.support.clear();
    }
}
