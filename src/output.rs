//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the explore page
//! for rendering the tile grid.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::{LayoutConfig, RectI, SizeI, TileGrid, layout_positions};

/// A feature tile as listed by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExploreItem {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

/// An item placed on the grid
#[derive(Debug, Clone, Serialize)]
pub struct TileOutput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub col: usize,
    pub row: usize,
    pub bounds: RectI,
}

/// An empty decorative cell
#[derive(Debug, Clone, Serialize)]
pub struct FillerOutput {
    pub col: usize,
    pub row: usize,
    pub bounds: RectI,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined output sent to React
#[derive(Debug, Clone, Serialize)]
pub struct ExploreOutput {
    pub cols: usize,
    pub rows: usize,
    pub size: SizeI,
    /// One entry per input item, in input order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<TileOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fillers: Vec<FillerOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ExploreOutput {
    pub fn from_error(e: &LayoutError) -> Self {
        Self {
            cols: 0,
            rows: 0,
            size: SizeI { w: 0, h: 0 },
            tiles: vec![],
            fillers: vec![],
            error: Some(ErrorInfo { message: e.to_string() }),
        }
    }
}

/// Parse the frontend's item list.
pub fn parse_items(json: &str) -> Result<Vec<ExploreItem>, LayoutError> {
    Ok(serde_json::from_str(json)?)
}

/// Place `items` with the named layout and build the render description.
pub fn layout_explore(items: &[ExploreItem], layout: &str, cfg: &LayoutConfig) -> Result<ExploreOutput, LayoutError> {
    let positions = layout_positions(items.len(), layout, cfg)?;
    let grid = TileGrid::from_positions(&positions);

    let tiles: Vec<TileOutput> = items
        .iter()
        .zip(grid.item_cells())
        .map(|(item, (col, row))| TileOutput {
            id: item.id.clone(),
            label: item.label.clone(),
            href: item.href.clone(),
            col,
            row,
            bounds: cfg.cell_rect(col, row),
        })
        .collect();

    let fillers: Vec<FillerOutput> = grid
        .fillers()
        .map(|(col, row)| FillerOutput {
            col,
            row,
            bounds: cfg.cell_rect(col, row),
        })
        .collect();

    Ok(ExploreOutput {
        cols: grid.cols,
        rows: grid.rows,
        size: cfg.grid_size(grid.cols, grid.rows),
        tiles,
        fillers,
        error: None,
    })
}
