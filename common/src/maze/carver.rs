use rand::{Rng, rngs::StdRng};
use tracing::debug;

use super::{CellIndex, Grid, MazeError};

pub const DEFAULT_START: CellIndex = CellIndex::new(0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarverState {
    Idle,
    Carving,
}

/// What a single call to `MazeCarver::advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Carved {
        from: CellIndex,
        to: CellIndex,
    },
    Backtracked {
        from: CellIndex,
        to: Option<CellIndex>,
    },
    Completed,
    Idle,
}

/// Randomized depth-first backtracker that moves one cell per `advance`.
///
/// The backtracking stack is kept in `path` instead of on the call stack, so
/// the carve can be suspended between any two steps and drawn.
pub struct MazeCarver<R: Rng = StdRng> {
    state: CarverState,
    current: Option<CellIndex>,
    path: Vec<CellIndex>,
    rng: R,
}

impl<R: Rng> MazeCarver<R> {
    pub fn new(rng: R) -> Self {
        MazeCarver {
            state: CarverState::Idle,
            current: None,
            path: Vec::new(),
            rng,
        }
    }

    pub fn state(&self) -> CarverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CarverState::Carving
    }

    pub fn current(&self) -> Option<CellIndex> {
        self.current
    }

    /// Cells waiting to be backtracked to, oldest first.
    pub fn path(&self) -> &[CellIndex] {
        &self.path
    }

    /// Regenerates the grid and starts a fresh carve from `start`, or from
    /// the top-left cell. Nothing changes if `start` is not in the grid.
    pub fn reset(&mut self, grid: &mut Grid, start: Option<CellIndex>) -> Result<(), MazeError> {
        let start = start.unwrap_or(DEFAULT_START);
        grid.check_bounds(start)?;

        self.clear(grid);
        self.current = Some(start);
        self.state = CarverState::Carving;

        debug!(%start, "carver reset");
        Ok(())
    }

    /// Regenerates the grid and goes idle without choosing a start.
    pub fn clear(&mut self, grid: &mut Grid) {
        self.path.clear();
        self.current = None;
        self.state = CarverState::Idle;
        grid.fill();
    }

    pub fn advance(&mut self, grid: &mut Grid) -> Result<Step, MazeError> {
        if self.state == CarverState::Idle {
            return Ok(Step::Idle);
        }

        let Some(current) = self.current else {
            self.state = CarverState::Idle;
            return Ok(Step::Completed);
        };

        grid.visit(current)?;

        match grid.pick_unvisited_neighbor(current, &mut self.rng) {
            None => {
                self.current = self.path.pop();
                Ok(Step::Backtracked {
                    from: current,
                    to: self.current,
                })
            }
            Some(next) => {
                self.path.push(current);
                grid.remove_wall_between(current, next)?;
                self.current = Some(next);
                Ok(Step::Carved {
                    from: current,
                    to: next,
                })
            }
        }
    }
}
