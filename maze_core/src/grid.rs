// grid.rs - Grid cells and the coordinate universe of a maze

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// One block of the maze grid. Origin is the bottom-left block, y grows upward.
///
/// Ordering is x first, then y, which matches the order cells are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a maze, in blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    width: i32,
    height: i32,
}

impl GridDims {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// y index of the top row
    #[inline]
    pub fn top_row(&self) -> i32 {
        self.height - 1
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Every cell of the grid, column by column
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push(Cell::new(x, y));
            }
        }
        cells
    }

    pub fn row(&self, y: i32) -> impl Iterator<Item = Cell> {
        (0..self.width).map(move |x| Cell::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_cells_are_column_major() {
        let dims = GridDims::new(2, 3).unwrap();
        let cells = dims.cells();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );

        // Ord agrees with generation order
        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(sorted, cells);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            GridDims::new(0, 4),
            Err(MazeError::InvalidDimensions { width: 0, height: 4 })
        );
        assert!(GridDims::new(3, -1).is_err());
    }

    #[test]
    fn test_rows_and_bounds() {
        let dims = GridDims::new(3, 2).unwrap();
        assert_eq!(dims.top_row(), 1);
        assert_eq!(
            dims.row(1).collect::<Vec<_>>(),
            vec![Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]
        );
        assert!(dims.contains(Cell::new(2, 1)));
        assert!(!dims.contains(Cell::new(3, 1)));
        assert!(!dims.contains(Cell::new(0, -1)));
    }

    proptest! {
        #[test]
        fn grid_has_exactly_w_times_h_distinct_cells(width in 1i32..40, height in 1i32..40) {
            let dims = GridDims::new(width, height).unwrap();
            let cells = dims.cells();
            let unique: HashSet<Cell> = cells.iter().copied().collect();

            prop_assert_eq!(cells.len(), (width * height) as usize);
            prop_assert_eq!(unique.len(), cells.len());
            for cell in cells {
                prop_assert!(dims.contains(cell));
            }
        }
    }
}
