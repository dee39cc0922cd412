//! Error types for the wireframe core.

use thiserror::Error;

/// Errors produced by the projection pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A direction or up vector collapsed to zero length.
    #[error("degenerate geometry: cannot normalize a zero-length vector")]
    DegenerateGeometry,

    /// Camera clip planes must satisfy `far < near < 0`.
    #[error("invalid clip planes: near {near}, far {far} (expected far < near < 0)")]
    InvalidClipPlanes { near: f64, far: f64 },

    /// Matrix multiplication with incompatible shapes.
    #[error("dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Homogeneous divide against a w component of (near-)zero.
    #[error("projection singularity: vertex lies on the camera plane")]
    ProjectionSingularity,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
