// lib.rs - Grid geometry for maze line drawings
//
// Turns the wall segments of a maze drawing into, for every grid block, the
// set of neighbors it cannot step to directly, plus the single entrance on
// the bottom row and the single exit on the top row. No file access and no
// solving happens here.

pub mod adjacency;
pub mod barrier;
pub mod entrance;
pub mod error;
pub mod grid;
pub mod maze_info;

pub use adjacency::{derive_blocked_neighbors, severed_pairs, BlockedNeighborMap, CellPair};
pub use barrier::{
    flip_row, Barrier, GridScale, Orientation, RawSegment, DEFAULT_BLOCK_SIZE, DEFAULT_OFFSET,
};
pub use entrance::{resolve_entrance_and_exit, Candidates};
pub use error::{Axis, MazeError, Result, Side};
pub use grid::{Cell, GridDims};
pub use maze_info::MazeInfo;

/// Build the maze description for a `width` x `height` drawing
pub fn load_maze_info<I>(segments: I, width: i32, height: i32, scale: &GridScale) -> Result<MazeInfo>
where
    I: IntoIterator<Item = RawSegment>,
{
    let dims = GridDims::new(width, height)?;
    MazeInfo::from_segments(segments, dims, scale)
}
