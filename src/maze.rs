pub mod carver;
pub mod grid;

use std::fmt;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use carver::{Edge, spanning_tree, weighted_edges};
use grid::{Cell, Grid, Marker, Walls};

#[derive(Clone, Serialize, Deserialize)]
pub struct Maze {
    pub grid: Grid,
    cells: Vec<Cell>,
    tree: Vec<Edge>,
}

impl Maze {
    pub fn carve(grid: Grid, rng: &mut impl Rng) -> Self {
        let edges = weighted_edges(&grid, rng);
        let tree = spanning_tree(grid.len(), edges);

        let mut maze = Maze {
            grid,
            cells: vec![Cell::sealed(); grid.len()],
            tree,
        };
        maze.open_tree_walls();

        debug!(
            "carved a {}x{} maze with {} passages",
            grid.rows,
            grid.cols,
            maze.tree.len()
        );

        maze
    }

    // The walls are a view of the spanning tree: each tree edge opens the
    // pair of flags facing each other across it. Everything else stays
    // sealed, so deriving twice from the same tree changes nothing.
    fn open_tree_walls(&mut self) {
        for i in 0..self.tree.len() {
            let Edge { from, to, .. } = self.tree[i];
            let direction = self
                .grid
                .direction_between(from, to)
                .expect("tree edges connect adjacent cells");

            self.cells[from].walls.clear(direction);
            self.cells[to].walls.clear(direction.opposite());
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> usize {
        0
    }

    pub fn goal(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn walls(&self, cell: usize) -> &Walls {
        &self.cells[cell].walls
    }

    pub fn marker(&self, cell: usize) -> Marker {
        self.cells[cell].marker
    }

    pub(crate) fn set_marker(&mut self, cell: usize, marker: Marker) {
        self.cells[cell].marker = marker;
    }

    pub fn tree(&self) -> &[Edge] {
        &self.tree
    }

    pub fn log(&self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows {
            for col in 0..self.grid.cols {
                let cell = &self.cells[self.grid.index(row, col)];
                f.write_str(if cell.walls.top { "+--" } else { "+  " })?;
            }
            f.write_str("+\n")?;

            for col in 0..self.grid.cols {
                let cell = &self.cells[self.grid.index(row, col)];
                f.write_str(if cell.walls.left { "|" } else { " " })?;
                f.write_str(match cell.marker {
                    Marker::Blank => "  ",
                    Marker::Visited => "..",
                    Marker::OnPath => "oo",
                })?;
            }

            let last = &self.cells[self.grid.index(row, self.grid.cols - 1)];
            f.write_str(if last.walls.right { "|" } else { " " })?;
            f.write_str("\n")?;
        }

        for col in 0..self.grid.cols {
            let cell = &self.cells[self.grid.index(self.grid.rows - 1, col)];
            f.write_str(if cell.walls.bottom { "+--" } else { "+  " })?;
        }
        f.write_str("+")
    }
}
