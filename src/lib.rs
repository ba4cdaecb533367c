//! Tile layout core for the explore page.
//!
//! Generates non-overlapping lattice positions for feature tiles, turns them
//! into a dense grid and serializes the result for the React frontend.

pub mod error;
pub mod layout;
pub mod output;
pub mod wasm;

pub use error::LayoutError;
pub use layout::{CellI, LayoutConfig, TileGrid, generate_positions};
pub use output::{ExploreItem, ExploreOutput, layout_explore};
