//! Cascading extrema pyramid for multi-scale swing confirmation.
//!
//! The pyramid turns a raw per-bar high/low stream into confirmed,
//! delayed-but-correctly-dated swing events. Each depth holds the 3 most
//! recent candidate points; a point that proves to be the strict extremum
//! of its 3-window is promoted one depth up, and a point that survives
//! promotion through the final depth is emitted as a confirmed `Swing`.
//! Minor fluctuations die at shallow depths and never confirm.

use std::collections::VecDeque;

use crate::types::{CandidatePoint, Swing, SwingDepth, SwingKind};

/// Capacity of each depth buffer.
const WINDOW: usize = 3;

/// Whether a pyramid instance looks for maxima or minima.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyramidMode {
    /// Track highs; a confirmed point is a swing high.
    Bull,
    /// Track lows; a confirmed point is a swing low.
    Bear,
}

impl PyramidMode {
    /// The swing kind this mode produces.
    pub fn swing_kind(self) -> SwingKind {
        match self {
            PyramidMode::Bull => SwingKind::High,
            PyramidMode::Bear => SwingKind::Low,
        }
    }
}

/// A fixed-depth cascade of 3-point sliding windows.
///
/// One instance tracks one side of the market (highs or lows); the
/// engine runs two per bar.
#[derive(Debug)]
pub struct ExtremaPyramid {
    mode: PyramidMode,
    /// One newest-first buffer per depth, each holding at most 3 points.
    depths: Vec<VecDeque<CandidatePoint>>,
}

impl ExtremaPyramid {
    pub fn new(mode: PyramidMode, depth: SwingDepth) -> Self {
        let count = depth.depth_count();
        Self {
            mode,
            depths: (0..count).map(|_| VecDeque::with_capacity(WINDOW)).collect(),
        }
    }

    /// Number of cascade depths.
    pub fn depth_count(&self) -> usize {
        self.depths.len()
    }

    /// Feed one candidate point and run the cascade.
    ///
    /// Returns the confirmed swing if the point's arrival completed a
    /// strict 3-point pivot at every depth up to and including the last.
    /// Ties never confirm: a flat run of equal values produces no swing.
    pub fn push(&mut self, point: CandidatePoint) -> Option<Swing> {
        let last = self.depths.len() - 1;
        let mut carry = point;

        for d in 0..self.depths.len() {
            let buffer = &mut self.depths[d];
            buffer.push_front(carry);
            if buffer.len() > WINDOW {
                buffer.pop_back();
            }
            if buffer.len() < WINDOW {
                return None;
            }

            let newest = buffer[0];
            let middle = buffer[1];
            let oldest = buffer[2];

            let confirmed = match self.mode {
                PyramidMode::Bull => middle.value > newest.value && middle.value > oldest.value,
                PyramidMode::Bear => middle.value < newest.value && middle.value < oldest.value,
            };
            if !confirmed {
                return None;
            }

            // The middle point is the pivot; the two older entries are
            // spent, only the newest seeds the next comparison.
            buffer.truncate(1);

            if d == last {
                return Some(Swing::new(
                    middle.value,
                    middle.origin_index,
                    self.mode.swing_kind(),
                ));
            }
            carry = middle;
        }
        None
    }

    /// Drop all buffered candidates.
    pub fn reset(&mut self) {
        for buffer in &mut self.depths {
            buffer.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_values(pyramid: &mut ExtremaPyramid, values: &[f32]) -> Vec<Swing> {
        values
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| pyramid.push(CandidatePoint::new(v, i)))
            .collect()
    }

    #[test]
    fn test_single_depth_confirms_middle_pivot() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Shallow);
        let swings = push_values(&mut pyramid, &[10.0, 12.0, 15.0, 12.0, 10.0]);

        assert_eq!(swings.len(), 1);
        assert_eq!(swings[0].price, 15.0);
        assert_eq!(swings[0].origin_index, 2);
        assert_eq!(swings[0].kind, SwingKind::High);
    }

    #[test]
    fn test_confirmation_waits_for_both_neighbors() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Shallow);

        assert!(pyramid.push(CandidatePoint::new(10.0, 0)).is_none());
        assert!(pyramid.push(CandidatePoint::new(12.0, 1)).is_none());
        // Peak arrives; right neighbor is still unknown.
        assert!(pyramid.push(CandidatePoint::new(15.0, 2)).is_none());
        // Right neighbor arrives and the pivot at index 2 confirms.
        let swing = pyramid.push(CandidatePoint::new(12.0, 3));
        assert_eq!(swing.unwrap().origin_index, 2);
    }

    #[test]
    fn test_flat_top_never_confirms() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Shallow);
        let swings = push_values(&mut pyramid, &[10.0, 12.0, 12.0, 12.0, 10.0]);
        assert!(swings.is_empty());
    }

    #[test]
    fn test_tie_with_one_neighbor_never_confirms() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Shallow);
        let swings = push_values(&mut pyramid, &[10.0, 15.0, 15.0, 10.0]);
        assert!(swings.is_empty());
    }

    #[test]
    fn test_bear_mode_confirms_minimum() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bear, SwingDepth::Shallow);
        let swings = push_values(&mut pyramid, &[15.0, 12.0, 9.0, 12.0, 15.0]);

        assert_eq!(swings.len(), 1);
        assert_eq!(swings[0].price, 9.0);
        assert_eq!(swings[0].origin_index, 2);
        assert_eq!(swings[0].kind, SwingKind::Low);
    }

    #[test]
    fn test_bear_mode_ignores_maxima() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bear, SwingDepth::Shallow);
        let swings = push_values(&mut pyramid, &[10.0, 12.0, 15.0, 12.0, 10.0]);
        assert!(swings.is_empty());
    }

    #[test]
    fn test_medium_depth_needs_three_pivots() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Medium);

        // Three successive local maxima: 12@1, 20@4, 14@7. The middle
        // one is the strict maximum of the promoted triple and confirms
        // at the second depth once 14@7 lands.
        let feed = [
            10.0, 12.0, 8.0, 9.0, 20.0, 11.0, 9.0, 14.0, 7.0, 6.0,
        ];
        let swings = push_values(&mut pyramid, &feed);

        assert_eq!(swings.len(), 1);
        assert_eq!(swings[0].price, 20.0);
        assert_eq!(swings[0].origin_index, 4);
    }

    #[test]
    fn test_medium_depth_filters_minor_pivot() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Shallow);
        let mut deep = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Medium);

        let feed = [10.0, 12.0, 8.0, 7.0, 6.0];
        let shallow_swings = push_values(&mut pyramid, &feed);
        let deep_swings = push_values(&mut deep, &feed);

        // The 12@1 pivot confirms at depth 1 but has not yet survived a
        // promotion round, so the deeper pyramid stays silent.
        assert_eq!(shallow_swings.len(), 1);
        assert!(deep_swings.is_empty());
    }

    #[test]
    fn test_reset_clears_buffers() {
        let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, SwingDepth::Shallow);
        pyramid.push(CandidatePoint::new(10.0, 0));
        pyramid.push(CandidatePoint::new(12.0, 1));
        pyramid.reset();

        // After reset the window refills from scratch; the old 10/12
        // cannot combine with the new points into a pivot.
        assert!(pyramid.push(CandidatePoint::new(15.0, 2)).is_none());
        assert!(pyramid.push(CandidatePoint::new(11.0, 3)).is_none());
    }
}
