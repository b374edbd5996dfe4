//! Sweepline engine - streaming swing detection and level lifecycle tracking.
//!
//! The engine consumes a time-ordered bar feed one bar at a time and
//! maintains, fully online:
//!
//! - **Swings**: local extrema confirmed through a cascading pyramid of
//!   3-point windows; deeper pyramids confirm only more significant swings.
//! - **Levels**: resistance/support price lines derived from swings, each
//!   with a monotone lifecycle (armed, then swept and/or mitigated, then
//!   pruned).
//! - **Sweep events**: a wick breaches a level while the close recovers
//!   inside it; each carries ready-to-draw line and highlight geometry.
//!
//! # Quick Start
//!
//! ```rust
//! use sweepline_core::Bar;
//! use sweepline_engine::{EngineConfig, SweepEngine, SwingDepth};
//!
//! let mut engine = SweepEngine::new(EngineConfig::new(SwingDepth::Shallow, 2000));
//!
//! for (i, (high, low)) in [(98.0, 96.0), (100.0, 97.0), (97.0, 95.0)].iter().enumerate() {
//!     let bar = Bar::new(i as f64 * 60.0, *low + 1.0, *high, *low, *low + 1.5, 1.0);
//!     let outcome = engine.process_bar(&bar).expect("valid bar");
//!     for event in &outcome.sweeps {
//!         println!("sweep at {} on bar {}", event.level.price, event.trigger_index);
//!     }
//! }
//! ```
//!
//! Processing is strictly sequential and single-threaded; run one engine
//! per instrument.

pub mod emit;
pub mod engine;
pub mod evaluator;
pub mod pyramid;
pub mod types;

pub use engine::{BarError, SweepEngine};
pub use evaluator::evaluate_bar;
pub use pyramid::{ExtremaPyramid, PyramidMode};
pub use types::{
    BarOutcome, CandidatePoint, EngineConfig, HighlightBox, Level, LevelKind, LevelRegistry,
    ReferenceLine, Swing, SwingDepth, SwingKind, SweepEvent,
};
