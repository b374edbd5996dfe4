//! Type definitions for the sweepline engine.

pub mod config;
pub mod event;
pub mod level;
pub mod swing;

pub use config::{EngineConfig, SwingDepth};
pub use event::{BarOutcome, HighlightBox, ReferenceLine, SweepEvent};
pub use level::{Level, LevelKind, LevelRegistry};
pub use swing::{CandidatePoint, Swing, SwingKind};
