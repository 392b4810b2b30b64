pub const WEIGHT_CEILING: u32 = 10_000; // Edge weights are drawn from 0..WEIGHT_CEILING.

// A full-screen board at the cell size the drawing layer uses.
pub const DEFAULT_ROWS: usize = 60;
pub const DEFAULT_COLS: usize = 100;
