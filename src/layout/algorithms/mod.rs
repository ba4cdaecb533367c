//! Layout algorithms for the explore page.
//!
//! This module contains all available layout algorithms:
//! - `branching`: Default seeded layout that grows organic branches from the origin
//! - `grid`: Simple left-to-right, top-to-bottom grid layout

mod branching;
mod grid;

pub use branching::{BranchingLayout, ExpansionOrder, SEED_OFFSETS, generate_positions, generate_positions_with};
pub use grid::{GridLayout, layout_grid};
