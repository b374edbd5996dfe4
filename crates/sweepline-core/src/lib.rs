//! Core types for the sweepline engine.
//!
//! This crate provides fundamental data structures with no external dependencies:
//! - `Bar` - OHLCV bar data
//! - `Ohlcv` - trait for types exposing OHLCV fields
//! - bar validation helpers

pub mod bar;
pub mod validation;

pub use bar::{Bar, Ohlcv};
pub use validation::validate_bar;
