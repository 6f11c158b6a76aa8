//! Error types for polyset operations.

use crate::polygon::ClipOp;
use thiserror::Error;

/// Errors that can occur while running polygon-set operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolysetError {
    /// A coordinate cannot be represented in the clip engine's integer domain.
    #[error("coordinate ({x}, {y}) is not representable as an integer clip point")]
    CoordinateOutOfRange {
        /// Offending x value.
        x: f64,
        /// Offending y value.
        y: f64,
    },

    /// The clip engine itself failed.
    #[error("clip engine failed during {op:?}: {reason}")]
    EngineFailure {
        /// Operation that was running.
        op: ClipOp,
        /// Engine-supplied description.
        reason: String,
    },

    /// A merge step produced an empty region and the policy says to stop.
    #[error("merge step {step} produced an empty region")]
    DegenerateMerge {
        /// Index of the input group whose union came back empty.
        step: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolysetError>;
