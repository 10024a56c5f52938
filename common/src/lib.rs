pub mod config;
pub mod constants;
pub mod maze;
pub mod session;

pub use config::{Config, ConfigError};
pub use maze::{CarverState, Cell, CellIndex, Grid, MazeCarver, MazeError, Side, Step, Walls};
pub use session::MazeSession;
