//! Error types for polydata-rs.

use thiserror::Error;

use crate::index::IndexWidth;

/// The kind of cell whose connectivity referenced a bad index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Single-point vertex cell.
    Vertex,
    /// Two-point line segment.
    Line,
    /// Triangle, quad or n-gon.
    Polygon,
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellKind::Vertex => "vertex",
            CellKind::Line => "line",
            CellKind::Polygon => "face",
        };
        f.write_str(name)
    }
}

/// The main error type for polydata-rs operations.
#[derive(Error, Debug)]
pub enum PolydataError {
    /// A point has no coordinates or more than three.
    #[error("point {point} has {components} coordinate components, expected 1 to 3")]
    InvalidDimension { point: usize, components: usize },

    /// A face or line index does not address an existing point.
    #[error("{kind} {row} references index {index}, but the mesh has {point_count} points")]
    IndexOutOfRange {
        kind: CellKind,
        row: usize,
        index: i64,
        point_count: usize,
    },

    /// A point index does not fit in the configured index word.
    #[error("index {index} does not fit in {width} index words")]
    IndexOverflow { index: usize, width: IndexWidth },

    /// A flat cell buffer is not a well-formed sequence of counted cells.
    #[error("malformed cell buffer: {0}")]
    MalformedCells(String),

    /// Camera state is missing a field or has the wrong shape.
    #[error("invalid camera state: {0}")]
    InvalidCameraState(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for polydata-rs operations.
pub type Result<T> = std::result::Result<T, PolydataError>;
