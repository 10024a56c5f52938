use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::config::Config;
use crate::maze::{CellIndex, Grid, MazeCarver, MazeError, Step};

/// Everything one running maze needs: the grid and the carver working on
/// it. The driver holds one of these and calls `advance` once per tick.
pub struct MazeSession {
    grid: Grid,
    carver: MazeCarver,
    seed: u64,
}

impl MazeSession {
    /// Builds the grid from the canvas and cell sizes and starts carving from
    /// the top-left cell.
    pub fn new(config: &Config) -> Result<Self, MazeError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut session = Self::with_seed(
            config.rows(),
            config.cols(),
            config.cell_size as f32,
            seed,
        );

        info!(
            rows = session.grid.rows(),
            cols = session.grid.cols(),
            seed,
            "maze session created"
        );

        session.reset(None)?;
        Ok(session)
    }

    /// An idle session over a fresh grid.
    pub fn with_seed(rows: usize, cols: usize, cell_size: f32, seed: u64) -> Self {
        MazeSession {
            grid: Grid::new(rows, cols, cell_size),
            carver: MazeCarver::new(StdRng::seed_from_u64(seed)),
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn carver(&self) -> &MazeCarver {
        &self.carver
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_running(&self) -> bool {
        self.carver.is_running()
    }

    pub fn reset(&mut self, start: Option<CellIndex>) -> Result<(), MazeError> {
        self.carver.reset(&mut self.grid, start)?;
        if let Some(start) = self.carver.current() {
            info!(%start, "carving started");
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.carver.clear(&mut self.grid);
        debug!("maze cleared");
    }

    pub fn advance(&mut self) -> Result<Step, MazeError> {
        let step = self.carver.advance(&mut self.grid)?;

        if step == Step::Completed {
            info!(
                visited = self.grid.visited_count(),
                passages = self.grid.open_passages(),
                "maze complete"
            );
            debug!("\n{}", self.grid);
        }

        Ok(step)
    }

    /// Runs the carve to the end and returns how many steps that took,
    /// counting the final transition to idle.
    pub fn advance_until_idle(&mut self) -> Result<usize, MazeError> {
        let mut steps = 0;

        while self.is_running() {
            self.advance()?;
            steps += 1;
        }

        Ok(steps)
    }

    /// Restarts from whichever cell is under `point`. Misses change nothing.
    pub fn click(&mut self, point: Vec2) -> Result<Option<CellIndex>, MazeError> {
        let Some(hit) = self.grid.cell_at(point) else {
            return Ok(None);
        };

        self.reset(Some(hit))?;
        Ok(Some(hit))
    }
}
