use std::collections::{HashMap, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::maze::Maze;
use crate::maze::grid::{Direction, Marker};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    Bfs,
    Dfs,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Reconstructing,
    Solved,
}

// One search step per tick. The frontier is a deque so the same structure
// serves both disciplines: breadth-first pushes newcomers to the back,
// depth-first to the front, and both pop from the front.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Solver {
    frontier: VecDeque<usize>,
    visited: Vec<bool>,
    came_from: HashMap<usize, usize>,
    path: VecDeque<usize>,
    mode: Option<Mode>,
    phase: Phase,
}

impl Solver {
    pub fn new(cell_count: usize) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(0);

        Solver {
            frontier,
            visited: vec![false; cell_count],
            came_from: HashMap::new(),
            path: VecDeque::new(),
            mode: None,
            phase: Phase::Idle,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frontier(&self) -> &VecDeque<usize> {
        &self.frontier
    }

    // The remaining reconstruction list, goal-first. Shrinks by one cell
    // per tick while reconstructing.
    pub fn path(&self) -> &VecDeque<usize> {
        &self.path
    }

    // First selection wins; a second choice before reset is ignored.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.mode.is_none() {
            self.mode = Some(mode);
            self.phase = Phase::Running;
        }
    }

    pub fn step(&mut self, maze: &mut Maze) {
        match self.phase {
            Phase::Idle | Phase::Solved => {}
            Phase::Running => self.search_step(maze),
            Phase::Reconstructing => self.reconstruct_step(maze),
        }
    }

    fn search_step(&mut self, maze: &mut Maze) {
        let Some(cell) = self.frontier.pop_front() else {
            return;
        };

        if self.visited[cell] {
            return; // A stale duplicate entry burns the tick.
        }

        if cell == maze.goal() {
            self.frontier.clear();
            self.trace_path(maze.goal());
            self.phase = Phase::Reconstructing;
            debug!(
                "reached the goal after visiting {} cells; path is {} cells long",
                self.visited.iter().filter(|&&visited| visited).count(),
                self.path.len()
            );
            return;
        }

        self.visited[cell] = true;
        maze.set_marker(cell, Marker::Visited);

        let mode = self.mode.expect("a running solver always has a mode");

        for direction in Direction::iter() {
            if maze.walls(cell).has(direction) {
                continue;
            }

            let Some(neighbor) = maze.grid.neighbor(cell, direction) else {
                continue;
            };

            // Each cell is claimed by its first discoverer; later arrivals
            // neither requeue it nor rewrite its predecessor.
            if self.visited[neighbor] || self.came_from.contains_key(&neighbor) {
                continue;
            }

            self.came_from.insert(neighbor, cell);
            match mode {
                Mode::Bfs => self.frontier.push_back(neighbor),
                Mode::Dfs => self.frontier.push_front(neighbor),
            }
        }
    }

    // Walks the predecessor chain from the goal back to the start, which
    // has no predecessor and so terminates the loop.
    fn trace_path(&mut self, goal: usize) {
        let mut cell = goal;

        loop {
            self.path.push_back(cell);
            match self.came_from.get(&cell) {
                Some(&previous) => cell = previous,
                None => break,
            }
        }
    }

    fn reconstruct_step(&mut self, maze: &mut Maze) {
        if let Some(cell) = self.path.pop_front() {
            maze.set_marker(cell, Marker::OnPath);
        }

        if self.path.is_empty() {
            self.phase = Phase::Solved;
            debug!("reconstruction finished, maze solved");
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::maze::grid::Grid;

    use super::*;

    fn carved(rows: usize, cols: usize, seed: u64) -> Maze {
        Maze::carve(Grid::new(rows, cols), &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_new_solver_is_idle_with_only_the_start_queued() {
        let solver = Solver::new(12);

        assert_eq!(solver.phase(), Phase::Idle);
        assert_eq!(solver.mode(), None);
        assert_eq!(solver.frontier(), &VecDeque::from([0]));
        assert!(solver.path().is_empty());
    }

    #[test]
    fn test_first_mode_selection_wins() {
        let mut solver = Solver::new(4);

        solver.select_mode(Mode::Bfs);
        solver.select_mode(Mode::Dfs);

        assert_eq!(solver.mode(), Some(Mode::Bfs));
        assert_eq!(solver.phase(), Phase::Running);
    }

    #[test]
    fn test_stepping_while_idle_changes_nothing() {
        let mut maze = carved(3, 3, 2);
        let mut solver = Solver::new(maze.len());

        solver.step(&mut maze);

        assert_eq!(solver.phase(), Phase::Idle);
        assert_eq!(solver.frontier(), &VecDeque::from([0]));
        assert!((0..maze.len()).all(|cell| maze.marker(cell) == Marker::Blank));
    }

    #[test]
    fn test_a_visited_frontier_entry_is_discarded_without_effect() {
        let mut maze = carved(3, 3, 2);
        let mut solver = Solver::new(maze.len());
        solver.select_mode(Mode::Bfs);

        solver.visited[0] = true;
        solver.frontier = VecDeque::from([0, 1]);

        solver.step(&mut maze);

        // The entry is consumed but nothing else moves.
        assert_eq!(solver.frontier(), &VecDeque::from([1]));
        assert_eq!(solver.phase(), Phase::Running);
        assert!(solver.came_from.is_empty());
    }

    #[test]
    fn test_first_step_visits_the_start_and_queues_its_open_neighbors() {
        let mut maze = carved(4, 4, 7);
        let mut solver = Solver::new(maze.len());
        solver.select_mode(Mode::Bfs);

        solver.step(&mut maze);

        assert!(solver.visited[0]);
        assert_eq!(maze.marker(0), Marker::Visited);
        assert!(!solver.frontier().is_empty());

        for &queued in solver.frontier() {
            assert_eq!(solver.came_from[&queued], 0);
            let direction = maze
                .grid
                .direction_between(0, queued)
                .expect("queued cells neighbor the start");
            assert!(maze.walls(0).is_open(direction));
        }
    }

    #[test]
    fn test_bfs_runs_to_a_solved_maze() {
        run_to_completion(Mode::Bfs, 5);
    }

    #[test]
    fn test_dfs_runs_to_a_solved_maze() {
        run_to_completion(Mode::Dfs, 5);
    }

    fn run_to_completion(mode: Mode, seed: u64) {
        let mut maze = carved(8, 8, seed);
        let mut solver = Solver::new(maze.len());
        solver.select_mode(mode);

        let mut reconstruction: Option<Vec<usize>> = None;

        // Every tick either consumes a frontier entry or a path cell, so
        // this bound is generous.
        for _ in 0..8 * maze.len() {
            solver.step(&mut maze);

            if solver.phase() == Phase::Reconstructing && reconstruction.is_none() {
                reconstruction = Some(solver.path().iter().copied().collect());
            }
            if solver.phase() == Phase::Solved {
                break;
            }
        }

        assert_eq!(solver.phase(), Phase::Solved, "solver stalled:\n{maze}");
        assert!(solver.frontier().is_empty());

        let path = reconstruction.expect("the goal was reached");
        assert_eq!(path[0], maze.goal());
        assert_eq!(*path.last().expect("path is never empty"), maze.start());

        // Read start-to-goal, consecutive cells must share an open wall.
        for pair in path.windows(2) {
            let (later, earlier) = (pair[0], pair[1]);
            let direction = maze
                .grid
                .direction_between(earlier, later)
                .unwrap_or_else(|| panic!("{earlier} and {later} are not adjacent:\n{maze}"));
            assert!(
                maze.walls(earlier).is_open(direction),
                "path crosses a wall between {earlier} and {later}:\n{maze}"
            );
        }

        for &cell in &path {
            assert_eq!(maze.marker(cell), Marker::OnPath);
        }
    }

    #[test]
    fn test_one_by_one_maze_solves_in_two_ticks() {
        let mut maze = carved(1, 1, 0);
        let mut solver = Solver::new(maze.len());
        solver.select_mode(Mode::Dfs);

        solver.step(&mut maze);
        assert_eq!(solver.phase(), Phase::Reconstructing);

        solver.step(&mut maze);
        assert_eq!(solver.phase(), Phase::Solved);
        assert_eq!(maze.marker(0), Marker::OnPath);
    }

    #[test]
    fn test_stepping_a_solved_maze_is_a_no_op() {
        let mut maze = carved(2, 2, 3);
        let mut solver = Solver::new(maze.len());
        solver.select_mode(Mode::Bfs);

        for _ in 0..8 * maze.len() {
            solver.step(&mut maze);
        }
        assert_eq!(solver.phase(), Phase::Solved);

        let markers: Vec<Marker> = (0..maze.len()).map(|cell| maze.marker(cell)).collect();
        solver.step(&mut maze);

        assert_eq!(solver.phase(), Phase::Solved);
        assert_eq!(
            markers,
            (0..maze.len()).map(|cell| maze.marker(cell)).collect::<Vec<_>>()
        );
    }
}
