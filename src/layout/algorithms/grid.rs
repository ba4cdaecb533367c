//! Simple grid layout algorithm.
//!
//! Places tiles left-to-right, top-to-bottom in a near-square rectangle.
//! It ignores the seed table entirely and is useful as a plain fallback
//! view of the same items.

use crate::layout::occupancy::Occupancy;
use crate::layout::{CellI, LayoutStrategy};

/// Row-major grid layout.
pub struct GridLayout;

impl LayoutStrategy for GridLayout {
    fn positions(&self, count: usize) -> Vec<CellI> {
        layout_grid(count)
    }
}

/// Number of columns for `count` tiles: ceil(sqrt(count)), at least 1.
fn columns_for(count: usize) -> usize {
    let mut cols = 1;
    while cols * cols < count {
        cols += 1;
    }
    cols
}

/// Layout tiles in a simple grid pattern.
pub fn layout_grid(count: usize) -> Vec<CellI> {
    let cols = columns_for(count);
    let mut occupied = Occupancy::with_capacity(count);
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let cell = CellI::new((i % cols) as i32, (i / cols) as i32);
        occupied.claim(cell);
        out.push(cell);
    }

    debug_assert_eq!(occupied.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for(0), 1);
        assert_eq!(columns_for(1), 1);
        assert_eq!(columns_for(4), 2);
        assert_eq!(columns_for(5), 3);
        assert_eq!(columns_for(9), 3);
        assert_eq!(columns_for(10), 4);
    }

    #[test]
    fn test_grid_row_major() {
        let cells = layout_grid(5);
        assert_eq!(
            cells,
            vec![
                CellI::new(0, 0),
                CellI::new(1, 0),
                CellI::new(2, 0),
                CellI::new(0, 1),
                CellI::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_grid_empty() {
        assert!(layout_grid(0).is_empty());
    }
}
