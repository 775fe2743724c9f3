use thiserror::Error;

/// Configuration rejected before the clock starts.
///
/// Every variant is raised at construction time; a running clock never
/// produces one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick count must be a positive multiple of 12, got {0}")]
    TickCount(u32),

    #[error("tick radius must be finite and non-negative, got {0}")]
    TickRadius(f32),

    #[error("{which} offset must lie in -23..=23 hours, got {hours}")]
    ZoneOffset { which: &'static str, hours: i32 },

    #[error("{hand} hand depth must be finite, got {depth}")]
    HandDepth { hand: &'static str, depth: f32 },
}
