use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

// Variant order is the order neighbors are scanned in, so it is part of
// the solver's observable behavior.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "grid dimensions must be positive");

        Grid { rows, cols }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell coordinates are out of bounds"
        );

        row * self.cols + col
    }

    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    // Neighbor lookup is plain arithmetic on the flat index; `None` means
    // the grid boundary lies in that direction.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.row_col(index);

        match direction {
            Direction::Top => (row > 0).then(|| index - self.cols),
            Direction::Right => (col + 1 < self.cols).then(|| index + 1),
            Direction::Bottom => (row + 1 < self.rows).then(|| index + self.cols),
            Direction::Left => (col > 0).then(|| index - 1),
        }
    }

    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        Direction::iter().find(|&direction| self.neighbor(from, direction) == Some(to))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    Blank,
    Visited,
    OnPath,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub fn solid() -> Self {
        Walls {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        !self.has(direction)
    }

    pub fn clear(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.top = false,
            Direction::Right => self.right = false,
            Direction::Bottom => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub walls: Walls,
    pub marker: Marker,
}

impl Cell {
    // A cell starts fully walled in; carving opens it up.
    pub fn sealed() -> Self {
        Cell {
            walls: Walls::solid(),
            marker: Marker::Blank,
        }
    }
}
