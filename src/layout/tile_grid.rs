// Dense tile grid built from generated cells.
//
// Cells are translated so the bounding box starts at (0,0), then written into
// a row-major grid. Cells no item lands on stay `None` and render as fillers.

use super::CellI;

/// Inclusive bounding box of a set of cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CellBounds {
    pub fn cols(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    pub fn rows(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }
}

/// Bounding box of `cells`, or `None` when empty.
pub fn bounds(cells: &[CellI]) -> Option<CellBounds> {
    let first = cells.first()?;
    let init = CellBounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    Some(cells.iter().fold(init, |b, c| CellBounds {
        min_x: b.min_x.min(c.x),
        min_y: b.min_y.min(c.y),
        max_x: b.max_x.max(c.x),
        max_y: b.max_y.max(c.y),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    pub cols: usize,
    pub rows: usize,
    /// Row-major; `Some(i)` is the index of the item placed there.
    cells: Vec<Option<usize>>,
}

impl TileGrid {
    pub fn from_positions(positions: &[CellI]) -> Self {
        let Some(b) = bounds(positions) else {
            return Self { cols: 0, rows: 0, cells: Vec::new() };
        };

        let (cols, rows) = (b.cols(), b.rows());
        let mut cells = vec![None; cols * rows];
        for (i, p) in positions.iter().enumerate() {
            let col = (p.x - b.min_x) as usize;
            let row = (p.y - b.min_y) as usize;
            cells[row * cols + col] = Some(i);
        }

        Self { cols, rows, cells }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// (col, row, item index) for every occupied cell, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(k, c)| c.map(|i| (k % self.cols, k / self.cols, i)))
    }

    /// (col, row) for every empty cell, in row-major order.
    pub fn fillers(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(k, _)| (k % self.cols, k / self.cols))
    }

    /// Zero-based (col, row) of each item, indexed by item.
    pub fn item_cells(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = Vec::new();
        for (col, row, i) in self.occupied() {
            if out.len() <= i {
                out.resize(i + 1, (0, 0));
            }
            out[i] = (col, row);
        }
        out
    }
}
