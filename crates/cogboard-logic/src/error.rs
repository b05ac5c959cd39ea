//! Errors surfaced by board construction and layout loading.

/// Errors from board configuration.
///
/// Placing a cog on a locked or out-of-range cell is not an error; it is a
/// defined no-op so callers can sweep coordinate ranges without bounds checks.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Mask shape {found:?} does not match board shape {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Multipliers must be >= 1, got ({build}, {flaggy}, {exp})")]
    InvalidMultiplier { build: f64, flaggy: f64, exp: f64 },

    #[error("Layout places a cog at ({x}, {y}), outside the board")]
    PlacementOutOfBounds { x: i32, y: i32 },

    #[error("Layout parse error: {0}")]
    Json(#[from] serde_json::Error),
}
