// barrier.rs - Classifies raw drawing segments into grid-aligned barriers
//
// Pixel space has its origin at the top-left of the drawing and y grows
// downward. Grid space has its origin at the bottom-left block and y grows
// upward, so row indices are flipped against the maze height.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, MazeError, Result};
use crate::grid::GridDims;

/// Pixel size of one maze block in the drawings we read
pub const DEFAULT_BLOCK_SIZE: i32 = 16;
/// Pixel offset of the top-left grid corner from the drawing origin
pub const DEFAULT_OFFSET: i32 = 2;

/// A straight line segment as read from the drawing, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RawSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Pixel-to-grid conversion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridScale {
    block_size: i32,
    offset: i32,
    strict_alignment: bool,
}

impl Default for GridScale {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            offset: DEFAULT_OFFSET,
            strict_alignment: false,
        }
    }
}

impl GridScale {
    pub fn new(block_size: i32, offset: i32) -> Result<Self> {
        if block_size <= 0 {
            return Err(MazeError::InvalidScale { block_size });
        }
        Ok(Self {
            block_size,
            offset,
            strict_alignment: false,
        })
    }

    /// Reject endpoints that fall between block boundaries instead of truncating them
    pub fn with_strict_alignment(mut self, strict: bool) -> Self {
        self.strict_alignment = strict;
        self
    }

    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn strict_alignment(&self) -> bool {
        self.strict_alignment
    }

    /// Pixel coordinate to block index, truncating toward zero
    #[inline]
    pub fn scale(&self, pixel: i32) -> Result<i32> {
        pixel
            .checked_sub(self.offset)
            .and_then(|shifted| shifted.checked_div(self.block_size))
            .ok_or_else(|| {
                MazeError::malformed(format!(
                    "pixel coordinate {pixel} is out of range for offset {}",
                    self.offset
                ))
            })
    }

    /// False also when the coordinate cannot be shifted by the offset
    #[inline]
    pub fn is_aligned(&self, pixel: i32) -> bool {
        pixel
            .checked_sub(self.offset)
            .and_then(|shifted| shifted.checked_rem(self.block_size))
            == Some(0)
    }
}

/// Pixel-space row to grid-space row
#[inline]
pub fn flip_row(scaled_pixel_row: i32, height: i32) -> Result<i32> {
    height.checked_sub(scaled_pixel_row).ok_or_else(|| {
        MazeError::malformed(format!(
            "row {scaled_pixel_row} cannot be flipped against height {height}"
        ))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A wall segment mapped onto grid lines.
///
/// Bounds are grid-line indices: a vertical barrier sits on column line
/// `start_x` and covers rows `start_y..end_y`; a horizontal barrier sits on
/// row line `start_y` and covers columns `start_x..end_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Barrier {
    orientation: Orientation,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
}

impl Barrier {
    pub fn classify(segment: RawSegment, dims: GridDims, scale: &GridScale) -> Result<Self> {
        let RawSegment { x1, y1, x2, y2 } = segment;

        let orientation = match (x1 == x2, y1 == y2) {
            (true, true) => {
                return Err(MazeError::malformed(format!(
                    "segment ({x1},{y1})-({x2},{y2}) is a single point"
                )))
            }
            (true, false) => Orientation::Vertical,
            (false, true) => Orientation::Horizontal,
            (false, false) => {
                return Err(MazeError::malformed(format!(
                    "segment ({x1},{y1})-({x2},{y2}) is neither horizontal nor vertical"
                )))
            }
        };

        if scale.strict_alignment() {
            for (value, axis) in [(x1, Axis::X), (y1, Axis::Y), (x2, Axis::X), (y2, Axis::Y)] {
                if !scale.is_aligned(value) {
                    return Err(MazeError::MisalignedSegment { value, axis });
                }
            }
        }

        let barrier = Self {
            orientation,
            start_x: scale.scale(x1)?,
            start_y: flip_row(scale.scale(y2)?, dims.height())?,
            end_x: scale.scale(x2)?,
            end_y: flip_row(scale.scale(y1)?, dims.height())?,
        };

        let columns = 0..=dims.width();
        let rows = 0..=dims.height();
        if ![barrier.start_x, barrier.end_x].iter().all(|x| columns.contains(x))
            || ![barrier.start_y, barrier.end_y].iter().all(|y| rows.contains(y))
        {
            return Err(MazeError::malformed(format!(
                "segment ({x1},{y1})-({x2},{y2}) lies outside the {}x{} grid",
                dims.width(),
                dims.height()
            )));
        }

        if barrier.start_x > barrier.end_x || barrier.start_y > barrier.end_y {
            log::warn!("Segment {segment:?} has reversed endpoints and blocks nothing");
        }

        log::trace!("Classified {segment:?} as {barrier:?}");
        Ok(barrier)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    pub fn end_x(&self) -> i32 {
        self.end_x
    }

    pub fn end_y(&self) -> i32 {
        self.end_y
    }

    /// Columns this barrier runs along (horizontal barriers)
    pub fn column_span(&self) -> Range<i32> {
        self.start_x..self.end_x
    }

    /// Rows this barrier runs along (vertical barriers)
    pub fn row_span(&self) -> Range<i32> {
        self.start_y..self.end_y
    }

    pub fn is_bottom_edge(&self) -> bool {
        self.orientation == Orientation::Horizontal && self.start_y == 0
    }

    pub fn is_top_edge(&self, height: i32) -> bool {
        self.orientation == Orientation::Horizontal && self.start_y == height
    }

    /// True when the barrier lies on the maze perimeter, with no block on its far side
    pub fn is_outer_boundary(&self, dims: GridDims) -> bool {
        match self.orientation {
            Orientation::Vertical => self.start_x == 0 || self.start_x == dims.width(),
            Orientation::Horizontal => self.start_y == 0 || self.start_y == dims.height(),
        }
    }
}
