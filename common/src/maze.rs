pub mod carver;
pub mod grid;

use std::fmt;

use glam::Vec2;
use strum::EnumIter;
use thiserror::Error;

pub use carver::{CarverState, MazeCarver, Step};
pub use grid::Grid;

/// Stable handle to a cell: its row `i` and column `j`. The grid owns the
/// cells; everything else refers to them through one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub const fn new(row: usize, col: usize) -> Self {
        CellIndex { row, col }
    }

    pub fn distance(&self, other: &CellIndex) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: &CellIndex) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

impl Walls {
    pub const fn all() -> Self {
        Walls {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn has(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn remove(&mut self, side: Side) {
        match side {
            Side::Top => self.top = false,
            Side::Right => self.right = false,
            Side::Bottom => self.bottom = false,
            Side::Left => self.left = false,
        }
    }

    pub fn is_closed(&self) -> bool {
        *self == Self::all()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub index: CellIndex,
    pub origin: Vec2, // Top-left corner in pixels, for drawing and hit tests.
    pub size: f32,
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    pub fn new(index: CellIndex, size: f32) -> Self {
        let origin = Vec2::new(index.col as f32 * size, index.row as f32 * size);

        Cell {
            index,
            origin,
            size,
            walls: Walls::all(),
            visited: false,
        }
    }

    /// Inclusive on all four edges, so a point on a shared edge is inside both
    /// cells. `Grid::cell_at` settles that by taking the first in row-major order.
    pub fn contains(&self, point: Vec2) -> bool {
        if point.x < self.origin.x || point.x > self.origin.x + self.size {
            return false;
        }

        if point.y < self.origin.y || point.y > self.origin.y + self.size {
            return false;
        }

        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("cells {a} and {b} are not adjacent, so there is no wall between them")]
    InvalidAdjacency { a: CellIndex, b: CellIndex },
    #[error("cell {index} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        index: CellIndex,
        rows: usize,
        cols: usize,
    },
}
