// Occupancy set for lattice placement.
//
// Every generator claims cells through this set, so "one tile per cell" holds
// regardless of which strategy produced the positions.

use super::CellI;
use std::collections::HashSet;

/// Cells claimed during a single generation run.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashSet<CellI>,
}

impl Occupancy {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    pub fn contains(&self, cell: &CellI) -> bool {
        self.cells.contains(cell)
    }

    /// Claim a cell. Returns false if it was already taken.
    pub fn claim(&mut self, cell: CellI) -> bool {
        self.cells.insert(cell)
    }

    /// First free cell among `offsets` applied to `cell`, in the given order.
    pub fn first_free_neighbor(&self, cell: CellI, offsets: &[(i32, i32)]) -> Option<CellI> {
        offsets
            .iter()
            .map(|&(dx, dy)| cell.offset(dx, dy))
            .find(|n| !self.contains(n))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
