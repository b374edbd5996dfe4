//! Swing types - confirmed local price extrema.

/// Which side of price action a swing (or the level derived from it) sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwingKind {
    /// Local maximum of highs; sources a resistance level.
    High,
    /// Local minimum of lows; sources a support level.
    Low,
}

/// A raw high or low value plus the bar index it came from.
///
/// Candidate points are held transiently inside the pyramid's depth
/// buffers until they are either promoted or discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePoint {
    /// The high (bull mode) or low (bear mode) of the source bar.
    pub value: f32,
    /// Index of the bar this value came from.
    pub origin_index: usize,
}

impl CandidatePoint {
    pub fn new(value: f32, origin_index: usize) -> Self {
        Self {
            value,
            origin_index,
        }
    }
}

/// A confirmed local extremum emitted by the pyramid's deepest level.
///
/// Created once, immutable after emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing {
    /// The extremum price.
    pub price: f32,
    /// Index of the bar the extremum occurred on.
    pub origin_index: usize,
    /// Whether this is a swing high or a swing low.
    pub kind: SwingKind,
}

impl Swing {
    pub fn new(price: f32, origin_index: usize, kind: SwingKind) -> Self {
        Self {
            price,
            origin_index,
            kind,
        }
    }
}
