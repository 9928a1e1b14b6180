// error.rs - Error types for maze geometry processing

use std::fmt;

use thiserror::Error;

/// Which side of the maze a resolution failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Bottom row
    Entrance,
    /// Top row
    Exit,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Entrance => write!(f, "entrance"),
            Side::Exit => write!(f, "exit"),
        }
    }
}

/// Pixel axis an alignment failure was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Malformed barrier input: {reason}")]
    MalformedBarrierInput { reason: String },

    #[error("More than one {side} candidate found ({count} remaining)")]
    AmbiguousEntranceOrExit { side: Side, count: usize },

    #[error("No {side} candidate found: every cell on that row is walled off")]
    NoEntranceOrExitFound { side: Side },

    #[error("Invalid maze dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Segment endpoint {axis}={value} is not aligned to the grid")]
    MisalignedSegment { value: i32, axis: Axis },

    #[error("Invalid grid scale: block size {block_size} must be positive")]
    InvalidScale { block_size: i32 },
}

impl MazeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        MazeError::MalformedBarrierInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
