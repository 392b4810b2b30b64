use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid};
use crate::constants::WEIGHT_CEILING;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

// One edge per adjacent pair: each cell links only to its right and bottom
// neighbors, so no pair is produced twice. All weights come from the one
// shared source, which keeps generation reproducible under a fixed seed.
pub fn weighted_edges(grid: &Grid, rng: &mut impl Rng) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(2 * grid.len());

    for from in 0..grid.len() {
        for direction in [Direction::Right, Direction::Bottom] {
            if let Some(to) = grid.neighbor(from, direction) {
                edges.push(Edge {
                    from,
                    to,
                    weight: rng.random_range(0..WEIGHT_CEILING),
                });
            }
        }
    }

    edges
}

// Kruskal's algorithm over a union-find parent table. The table lives only
// as long as this call.
pub fn spanning_tree(cell_count: usize, mut edges: Vec<Edge>) -> Vec<Edge> {
    edges.sort_by_key(|edge| edge.weight); // Stable: equal weights keep generation order.

    let mut parents: Vec<usize> = (0..cell_count).collect();
    let mut tree = Vec::with_capacity(cell_count.saturating_sub(1));

    for edge in edges {
        let from_root = find(&parents, edge.from);
        let to_root = find(&parents, edge.to);

        if from_root != to_root {
            parents[to_root] = from_root;
            tree.push(edge);
        }
    }

    debug_assert!(
        cell_count == 0 || tree.len() == cell_count - 1,
        "spanning tree must touch every cell"
    );

    tree
}

// Chases parent pointers to the set representative. No path compression:
// the table is discarded right after carving, so there is nothing to
// amortize.
fn find(parents: &[usize], mut cell: usize) -> usize {
    while parents[cell] != cell {
        cell = parents[cell];
    }

    cell
}
