//! Bar source trait definition.

use sweepline_core::Bar;

/// Trait for types that can load bar data.
///
/// This trait uses `anyhow::Result` for flexible error handling.
pub trait BarSource {
    fn load(&self) -> anyhow::Result<Vec<Bar>>;
}
