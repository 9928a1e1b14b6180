// entrance.rs - Picks the single open cell on the bottom (entrance) and top (exit) rows

use std::collections::BTreeSet;

use crate::barrier::Barrier;
use crate::error::{MazeError, Result, Side};
use crate::grid::{Cell, GridDims};

/// Cells on one outer row that are still open to the outside.
///
/// Pruning returns a new set; the original is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    side: Side,
    row: i32,
    cells: BTreeSet<Cell>,
}

impl Candidates {
    /// Every cell of the bottom row
    pub fn entrance(dims: GridDims) -> Self {
        Self {
            side: Side::Entrance,
            row: 0,
            cells: dims.row(0).collect(),
        }
    }

    /// Every cell of the top row
    pub fn exit(dims: GridDims) -> Self {
        let row = dims.top_row();
        Self {
            side: Side::Exit,
            row,
            cells: dims.row(row).collect(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Drop the cells this barrier walls off from the outside, if it lies on our edge
    pub fn prune(&self, barrier: &Barrier, dims: GridDims) -> Self {
        let on_edge = match self.side {
            Side::Entrance => barrier.is_bottom_edge(),
            Side::Exit => barrier.is_top_edge(dims.height()),
        };
        if !on_edge {
            return self.clone();
        }

        let walled = barrier.column_span();
        let row = self.row;
        Self {
            side: self.side,
            row,
            cells: self
                .cells
                .iter()
                .filter(|cell| !(cell.y == row && walled.contains(&cell.x)))
                .copied()
                .collect(),
        }
    }

    /// The one surviving cell
    pub fn resolve(&self) -> Result<Cell> {
        let mut remaining = self.cells.iter();
        match (remaining.next(), remaining.next()) {
            (Some(cell), None) => Ok(*cell),
            (None, _) => Err(MazeError::NoEntranceOrExitFound { side: self.side }),
            (Some(_), Some(_)) => Err(MazeError::AmbiguousEntranceOrExit {
                side: self.side,
                count: self.cells.len(),
            }),
        }
    }
}

/// Prune both rows with every barrier and return `(entrance, exit)`
pub fn resolve_entrance_and_exit<'a, I>(dims: GridDims, barriers: I) -> Result<(Cell, Cell)>
where
    I: IntoIterator<Item = &'a Barrier>,
{
    let (entrances, exits) = barriers.into_iter().fold(
        (Candidates::entrance(dims), Candidates::exit(dims)),
        |(entrances, exits), barrier| (entrances.prune(barrier, dims), exits.prune(barrier, dims)),
    );

    // ambiguity on either side outranks an empty side
    for candidates in [&entrances, &exits] {
        if candidates.len() > 1 {
            return Err(MazeError::AmbiguousEntranceOrExit {
                side: candidates.side(),
                count: candidates.len(),
            });
        }
    }
    let entrance = entrances.resolve()?;
    let exit = exits.resolve()?;
    log::debug!("Resolved entrance {entrance} and exit {exit}");
    Ok((entrance, exit))
}
