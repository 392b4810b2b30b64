use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::maze::Maze;
use crate::maze::grid::Grid;
use crate::solver::{Mode, Phase, Solver};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("maze dimensions must be positive, got {rows} rows and {cols} cols")]
pub struct InvalidDimensions {
    pub rows: usize,
    pub cols: usize,
}

// Owns one maze and one solve at a time, along with the random source the
// maze was carved from. The driver feeds it mode selections and ticks; it
// hands back walls, markers and tree edges to draw.
pub struct Session<R: Rng> {
    grid: Grid,
    rng: R,
    maze: Maze,
    solver: Solver,
}

impl Session<StdRng> {
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, InvalidDimensions> {
        Session::build(rows, cols, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn build(rows: usize, cols: usize, mut rng: R) -> Result<Self, InvalidDimensions> {
        if rows == 0 || cols == 0 {
            return Err(InvalidDimensions { rows, cols });
        }

        let grid = Grid::new(rows, cols);
        let maze = Maze::carve(grid, &mut rng);
        let solver = Solver::new(grid.len());

        Ok(Session {
            grid,
            rng,
            maze,
            solver,
        })
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.solver.select_mode(mode);
    }

    // One solver tick. Does nothing while idle or after the solve is done.
    pub fn advance(&mut self) {
        self.solver.step(&mut self.maze);
    }

    // Throws the maze and the whole solve away and carves again. The
    // random source keeps its state, so the next maze differs; a caller
    // who wants the same maze back builds a fresh session from the seed.
    pub fn reset(&mut self) {
        self.maze = Maze::carve(self.grid, &mut self.rng);
        self.solver = Solver::new(self.grid.len());

        debug!(
            "session reset, carved a fresh {}x{} maze",
            self.grid.rows, self.grid.cols
        );
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    pub fn mode(&self) -> Option<Mode> {
        self.solver.mode()
    }

    pub fn phase(&self) -> Phase {
        self.solver.phase()
    }
}
