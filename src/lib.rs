pub mod constants;
pub mod maze;
pub mod session;
pub mod solver;

pub use maze::Maze;
pub use maze::carver::Edge;
pub use maze::grid::{Cell, Direction, Grid, Marker, Walls};
pub use session::{InvalidDimensions, Session};
pub use solver::{Mode, Phase, Solver};
