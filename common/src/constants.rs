// Canvas:
pub const DEFAULT_CANVAS_WIDTH: u32 = 600; // Pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600; // Pixels.
pub const DEFAULT_CELL_SIZE: u32 = 40; // Pixels per side, giving a 15x15 grid by default.

// Animation:
pub const DEFAULT_TICK_RATE: u32 = 5; // Carving steps per second.
pub const MAX_TICK_RATE: u32 = 100;
