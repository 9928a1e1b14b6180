// maze_info.rs - Final aggregate handed to serializers and solvers

use crate::adjacency::{derive_blocked_neighbors, BlockedNeighborMap};
use crate::barrier::{Barrier, GridScale, RawSegment};
use crate::entrance::resolve_entrance_and_exit;
use crate::error::Result;
use crate::grid::{Cell, GridDims};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeInfo {
    dims: GridDims,
    cells: Vec<Cell>,
    blocked: BlockedNeighborMap,
    entrance: Cell,
    exit: Cell,
}

impl MazeInfo {
    /// Run the whole pipeline over the segments of one drawing
    pub fn from_segments<I>(segments: I, dims: GridDims, scale: &GridScale) -> Result<Self>
    where
        I: IntoIterator<Item = RawSegment>,
    {
        let barriers = segments
            .into_iter()
            .map(|segment| Barrier::classify(segment, dims, scale))
            .collect::<Result<Vec<_>>>()?;
        Self::from_barriers(&barriers, dims)
    }

    pub fn from_barriers(barriers: &[Barrier], dims: GridDims) -> Result<Self> {
        let blocked = derive_blocked_neighbors(dims, barriers);
        let (entrance, exit) = resolve_entrance_and_exit(dims, barriers)?;

        Ok(Self {
            dims,
            cells: dims.cells(),
            blocked,
            entrance,
            exit,
        })
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Grid cells in column-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn blocked_neighbors(&self) -> &BlockedNeighborMap {
        &self.blocked
    }

    pub fn entrance(&self) -> Cell {
        self.entrance
    }

    pub fn exit(&self) -> Cell {
        self.exit
    }
}
