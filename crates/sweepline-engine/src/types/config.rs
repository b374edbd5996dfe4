//! Configuration types for the engine.

/// How many cascade depths the pyramid runs, i.e. how significant a
/// swing must be before it confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwingDepth {
    /// Single depth; confirms every 3-bar pivot.
    Shallow,
    /// Two depths; pivots must survive one promotion.
    Medium,
    /// Three depths; only major structure confirms.
    Deep,
}

impl SwingDepth {
    /// Number of cascade depths for this setting.
    pub fn depth_count(self) -> usize {
        match self {
            SwingDepth::Shallow => 1,
            SwingDepth::Medium => 2,
            SwingDepth::Deep => 3,
        }
    }

    /// Parse from a config string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "shallow" => Some(SwingDepth::Shallow),
            "medium" => Some(SwingDepth::Medium),
            "deep" => Some(SwingDepth::Deep),
            _ => None,
        }
    }
}

impl Default for SwingDepth {
    fn default() -> Self {
        SwingDepth::Medium
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Pyramid depth setting.
    pub depth: SwingDepth,
    /// Maximum level age in bars; older levels are pruned.
    pub max_level_age: usize,
}

impl EngineConfig {
    pub fn new(depth: SwingDepth, max_level_age: usize) -> Self {
        Self {
            depth,
            max_level_age,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: SwingDepth::Medium,
            max_level_age: 2000,
        }
    }
}
