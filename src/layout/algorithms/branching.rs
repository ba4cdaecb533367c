//! Branching tile layout.
//!
//! Places the first tile at the origin, then walks a hand-authored seed table
//! that gives the explore page its "word search" silhouette. Once the table is
//! used up, the shape keeps growing from existing tiles through axis-aligned
//! neighbours.
//!
//! The seed table is an aesthetic constant. It is copied literally, so the
//! same item count always renders the same shape.

use crate::layout::occupancy::Occupancy;
use crate::layout::{CellI, LayoutStrategy};

/// Seed offsets relative to the origin, in placement order.
pub const SEED_OFFSETS: [(i32, i32); 20] = [
    (1, 0),
    (2, 0),
    (0, 1),
    (0, 2),
    (-1, 0),
    (1, -1),
    (1, -2),
    (-1, 1),
    (-1, 2),
    (2, 1),
    (-2, 0),
    (0, -1),
    (2, -1),
    (-2, 1),
    (3, 0),
    (0, 3),
    (-1, -1),
    (1, 1),
    (-2, -1),
    (3, -1),
];

/// Neighbour priority for frontier expansion: +x, -x, +y, -y.
const NEIGHBOR_ORDER: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Which placed tiles the frontier expansion looks at first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExpansionOrder {
    /// Newest tile first. Grows long branches off the last placement.
    #[default]
    MostRecentFirst,
    /// Oldest tile first. Fills in around the origin like a BFS frontier.
    OldestFirst,
}

/// Seeded branching layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchingLayout {
    pub expansion: ExpansionOrder,
}

impl LayoutStrategy for BranchingLayout {
    fn positions(&self, count: usize) -> Vec<CellI> {
        generate_positions_with(count, self.expansion)
    }
}

/// Generate `count` distinct cells with the default newest-first expansion.
pub fn generate_positions(count: usize) -> Vec<CellI> {
    generate_positions_with(count, ExpansionOrder::MostRecentFirst)
}

/// Generate `count` distinct cells. The first is always the origin.
pub fn generate_positions_with(count: usize, expansion: ExpansionOrder) -> Vec<CellI> {
    let mut out: Vec<CellI> = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }

    let mut occupied = Occupancy::with_capacity(count);
    occupied.claim(CellI::ORIGIN);
    out.push(CellI::ORIGIN);

    // 1. Seed table, literal order
    for &(dx, dy) in SEED_OFFSETS.iter() {
        if out.len() >= count {
            break;
        }
        let cell = CellI::ORIGIN.offset(dx, dy);
        if occupied.claim(cell) {
            out.push(cell);
        }
    }

    // 2. Frontier expansion
    // Tiles before `saturated` have all four neighbours taken. Occupancy only
    // grows, so they never become useful again.
    let mut saturated = 0;
    while out.len() < count {
        let next = match expansion {
            ExpansionOrder::MostRecentFirst => out
                .iter()
                .rev()
                .find_map(|&c| occupied.first_free_neighbor(c, &NEIGHBOR_ORDER)),
            ExpansionOrder::OldestFirst => {
                while saturated < out.len()
                    && occupied.first_free_neighbor(out[saturated], &NEIGHBOR_ORDER).is_none()
                {
                    saturated += 1;
                }
                out[saturated..]
                    .iter()
                    .find_map(|&c| occupied.first_free_neighbor(c, &NEIGHBOR_ORDER))
            }
        };

        // The outermost tile of a finite set always has a free neighbour,
        // so this never stops short of `count`.
        debug_assert!(next.is_some(), "no free neighbour after {} tiles", out.len());
        let Some(cell) = next else { break };
        occupied.claim(cell);
        out.push(cell);
    }

    debug_assert_eq!(occupied.len(), out.len());
    out
}
