//! Data loading utilities for sweepline replay.

pub mod csv;
pub mod source;

pub use self::csv::{load_bars_from_csv, CsvLoader};
pub use source::BarSource;
