use std::path::PathBuf;
use thiserror::Error;

use crate::boundary::Side;

/// Everything that can stop a run.
///
/// Grouped the way runs fail: case-file and configuration problems surface
/// before the time loop starts, numerical degeneracy inside it, and nothing
/// is recoverable mid-step.
#[derive(Debug, Error)]
pub enum Heat1dError {
    /// The case file could not be opened.
    #[error("could not open case file {}: {source}", .path.display())]
    CaseFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The case file is not valid JSON or misses a required key.
    #[error("case file {} is not a valid case description: {source}", .path.display())]
    MalformedCaseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Boundary-condition tag outside the known set (1, 2, 3).
    #[error("unknown boundary condition type {kind} on the {side} end (expected 1, 2 or 3)")]
    UnknownBoundaryKind { side: Side, kind: i64 },

    /// A boundary-condition kind was given without one of its parameters.
    #[error("boundary condition type {kind} on the {side} end is missing parameter '{param}'")]
    MissingBoundaryParam {
        side: Side,
        kind: i64,
        param: &'static str,
    },

    /// A run parameter that must be strictly positive is not.
    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    /// A run parameter that may take any sign is NaN or infinite.
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    /// A material property that must be strictly positive is not.
    #[error("material property {name} must be positive and finite (got {value})")]
    InvalidProperty { name: &'static str, value: f64 },

    /// Fewer cells than the two boundary rows require.
    #[error("at least 2 cells are required (got {n_cells})")]
    TooFewCells { n_cells: usize },

    /// A per-cell array does not match the grid it is used with.
    #[error("{what} must have one entry per cell: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Snapshot decimation interval of zero would emit nothing.
    #[error("snapshot interval must be at least 1 (got {every})")]
    InvalidWriteInterval { every: u64 },

    /// The forward sweep of the tridiagonal solve hit a zero or non-finite
    /// pivot; the system is not diagonally dominant, which points at
    /// non-physical inputs rather than a transient condition.
    #[error("degenerate tridiagonal system: zero or non-finite pivot in row {row}")]
    DegeneratePivot { row: usize },
}

impl Heat1dError {
    /// Process exit code used by the CLI.
    ///
    /// Each failure family keeps a stable number so scripts can tell them
    /// apart: 2 = case file missing, 3 = invalid input, 4 = boundary
    /// condition, 5 = material property, 6 = numerical degeneracy.
    pub fn exit_code(&self) -> u8 {
        match self {
            Heat1dError::CaseFileNotFound { .. } => 2,
            Heat1dError::MalformedCaseFile { .. }
            | Heat1dError::NonPositive { .. }
            | Heat1dError::NonFinite { .. }
            | Heat1dError::TooFewCells { .. }
            | Heat1dError::ShapeMismatch { .. }
            | Heat1dError::InvalidWriteInterval { .. } => 3,
            Heat1dError::UnknownBoundaryKind { .. }
            | Heat1dError::MissingBoundaryParam { .. } => 4,
            Heat1dError::InvalidProperty { .. } => 5,
            Heat1dError::DegeneratePivot { .. } => 6,
        }
    }
}
