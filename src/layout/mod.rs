// Tile layout for the explore page.
//
// Goals:
// - Deterministic: no randomness, same count => same positions
// - Total: every count >= 0 produces exactly that many cells
// - No overlap: at most one tile per lattice cell
// - Prefix-stable: adding an item never moves earlier tiles
//
// Submodules:
// - occupancy: claimed-cell set shared by all generators
// - algorithms: branching (default) and grid strategies
// - tile_grid: bounding box + dense grid the frontend renders
//
// Output:
// - Vec<CellI> in item order, or a TileGrid after materialisation.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

mod occupancy;
pub mod algorithms;
pub mod tile_grid;

pub use algorithms::{BranchingLayout, ExpansionOrder, GridLayout, generate_positions};
pub use tile_grid::{CellBounds, TileGrid, bounds};

/// A lattice cell, relative to the first tile at (0,0).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellI {
    pub x: i32,
    pub y: i32,
}

impl CellI {
    pub const ORIGIN: CellI = CellI { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> CellI {
        CellI { x: self.x + dx, y: self.y + dy }
    }

    /// True when the two cells share an edge.
    pub fn is_adjacent(&self, other: &CellI) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Edge length of a square tile in pixels.
    pub tile_size: i32,
    /// Spacing between neighbouring tiles.
    pub gap: i32,
    /// Fallback scan order once the seed table is used up.
    pub expansion: ExpansionOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_size: 96,
            gap: 8,
            expansion: ExpansionOrder::MostRecentFirst,
        }
    }
}

impl LayoutConfig {
    /// Pixel rectangle of a zero-based grid cell.
    pub fn cell_rect(&self, col: usize, row: usize) -> RectI {
        let pitch = self.tile_size + self.gap;
        RectI {
            x: col as i32 * pitch,
            y: row as i32 * pitch,
            w: self.tile_size,
            h: self.tile_size,
        }
    }

    /// Total pixel size of a `cols` x `rows` grid.
    pub fn grid_size(&self, cols: usize, rows: usize) -> SizeI {
        let span = |n: usize| {
            if n == 0 {
                0
            } else {
                n as i32 * self.tile_size + (n as i32 - 1) * self.gap
            }
        };
        SizeI { w: span(cols), h: span(rows) }
    }
}

/// A way of turning an item count into lattice cells.
pub trait LayoutStrategy {
    fn positions(&self, count: usize) -> Vec<CellI>;
}

/// Layout names accepted by [`layout_positions`].
pub const LAYOUT_NAMES: &[&str] = &["branching", "breadth", "grid"];

/// Resolve a layout by name. "branching" follows `cfg.expansion`.
pub fn strategy_for(
    name: &str,
    cfg: &LayoutConfig,
) -> Result<Box<dyn LayoutStrategy>, LayoutError> {
    let strategy: Box<dyn LayoutStrategy> = match name {
        "branching" => Box::new(BranchingLayout { expansion: cfg.expansion }),
        "breadth" => Box::new(BranchingLayout { expansion: ExpansionOrder::OldestFirst }),
        "grid" => Box::new(GridLayout),
        other => return Err(LayoutError::UnknownLayout(other.to_string())),
    };
    Ok(strategy)
}

/// Generate `count` cells with the named layout.
pub fn layout_positions(
    count: usize,
    name: &str,
    cfg: &LayoutConfig,
) -> Result<Vec<CellI>, LayoutError> {
    let strategy = strategy_for(name, cfg)?;
    Ok(strategy.positions(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_adjacency() {
        let c = CellI::new(2, -1);
        assert!(c.is_adjacent(&CellI::new(3, -1)));
        assert!(c.is_adjacent(&CellI::new(2, 0)));
        assert!(!c.is_adjacent(&CellI::new(3, 0)));
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn test_cell_rect_and_grid_size() {
        let cfg = LayoutConfig { tile_size: 10, gap: 2, ..LayoutConfig::default() };
        assert_eq!(cfg.cell_rect(0, 0), RectI { x: 0, y: 0, w: 10, h: 10 });
        assert_eq!(cfg.cell_rect(2, 1), RectI { x: 24, y: 12, w: 10, h: 10 });
        assert_eq!(cfg.grid_size(3, 1), SizeI { w: 34, h: 10 });
        assert_eq!(cfg.grid_size(0, 0), SizeI { w: 0, h: 0 });
    }

    #[test]
    fn test_layout_by_name() {
        let cfg = LayoutConfig::default();
        for name in LAYOUT_NAMES {
            let cells = layout_positions(7, name, &cfg).unwrap();
            assert_eq!(cells.len(), 7);
            assert_eq!(cells[0], CellI::ORIGIN);
        }
    }

    #[test]
    fn test_unknown_layout_name() {
        let err = layout_positions(3, "spiral", &LayoutConfig::default()).unwrap_err();
        assert_eq!(err, LayoutError::UnknownLayout("spiral".to_string()));
    }

    #[test]
    fn test_branching_follows_config_expansion() {
        let cfg = LayoutConfig { expansion: ExpansionOrder::OldestFirst, ..LayoutConfig::default() };
        let via_cfg = layout_positions(30, "branching", &cfg).unwrap();
        let breadth = layout_positions(30, "breadth", &LayoutConfig::default()).unwrap();
        assert_eq!(via_cfg, breadth);
    }
}
