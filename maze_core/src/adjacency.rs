// adjacency.rs - Derives which neighboring blocks each barrier separates

use std::collections::HashSet;

use linked_hash_map::LinkedHashMap;

use crate::barrier::{Barrier, Orientation};
use crate::grid::{Cell, GridDims};

/// Two adjacent cells a barrier keeps apart. Unordered: the smaller cell is stored first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPair {
    a: Cell,
    b: Cell,
}

impl CellPair {
    pub fn new(first: Cell, second: Cell) -> Self {
        debug_assert_ne!(first, second, "a cell cannot be separated from itself");
        if first <= second {
            Self { a: first, b: second }
        } else {
            Self { a: second, b: first }
        }
    }

    pub fn cells(&self) -> (Cell, Cell) {
        (self.a, self.b)
    }
}

/// Cell pairs whose direct connection this barrier cuts.
///
/// Barriers on the outer perimeter separate nothing, there is no block beyond them.
pub fn severed_pairs(barrier: &Barrier, dims: GridDims) -> Vec<CellPair> {
    if barrier.is_outer_boundary(dims) {
        return Vec::new();
    }

    match barrier.orientation() {
        Orientation::Vertical => {
            let right = barrier.start_x();
            let left = right - 1;
            barrier
                .row_span()
                .map(|y| CellPair::new(Cell::new(left, y), Cell::new(right, y)))
                .collect()
        }
        Orientation::Horizontal => {
            let above = barrier.start_y();
            let below = above - 1;
            barrier
                .column_span()
                .map(|x| CellPair::new(Cell::new(x, below), Cell::new(x, above)))
                .collect()
        }
    }
}

/// For every grid cell, the neighbors it cannot move to directly.
///
/// Iterates in grid order. Equality compares the sets per cell and ignores order.
#[derive(Debug, Clone, Default)]
pub struct BlockedNeighborMap {
    blocked: LinkedHashMap<Cell, HashSet<Cell>>,
}

impl BlockedNeighborMap {
    /// Every cell mapped to an empty set
    pub fn seeded<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut blocked = LinkedHashMap::new();
        for cell in cells {
            blocked.insert(cell, HashSet::new());
        }
        Self { blocked }
    }

    /// Record the pair in both directions
    pub fn insert_pair(&mut self, pair: CellPair) {
        let (a, b) = pair.cells();
        self.blocked.entry(a).or_insert_with(HashSet::new).insert(b);
        self.blocked.entry(b).or_insert_with(HashSet::new).insert(a);
    }

    pub fn blocked(&self, cell: &Cell) -> Option<&HashSet<Cell>> {
        self.blocked.get(cell)
    }

    pub fn is_blocked(&self, from: &Cell, to: &Cell) -> bool {
        self.blocked
            .get(from)
            .map(|set| set.contains(to))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Cell, &HashSet<Cell>)> {
        self.blocked.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.blocked.keys()
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Number of distinct blocked pairs
    pub fn pair_count(&self) -> usize {
        self.blocked.values().map(HashSet::len).sum::<usize>() / 2
    }
}

impl PartialEq for BlockedNeighborMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(cell, set)| other.blocked(cell) == Some(set))
    }
}

impl Eq for BlockedNeighborMap {}

/// Build the blocked-neighbor map for a grid from all of its barriers
pub fn derive_blocked_neighbors<'a, I>(dims: GridDims, barriers: I) -> BlockedNeighborMap
where
    I: IntoIterator<Item = &'a Barrier>,
{
    let mut map = BlockedNeighborMap::seeded(dims.cells());
    for barrier in barriers {
        for pair in severed_pairs(barrier, dims) {
            map.insert_pair(pair);
        }
    }
    log::debug!(
        "Derived {} blocked pairs over {} cells",
        map.pair_count(),
        map.len()
    );
    map
}
