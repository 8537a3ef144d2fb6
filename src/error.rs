//! Error taxonomy for board construction, move application, and search.

/// Errors raised by the engine.
///
/// Every variant is a deterministic precondition failure: the same inputs
/// always produce the same error, so nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {dim_x}x{dim_y} (both must be at least 2)")]
    InvalidDimensions { dim_x: i32, dim_y: i32 },

    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("illegal move at ({x}, {y})")]
    IllegalMove { x: i32, y: i32 },

    #[error("invalid search depth {0} (must be non-negative)")]
    InvalidDepth(i32),

    #[error("failed to start search workers: {0}")]
    WorkerPool(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
