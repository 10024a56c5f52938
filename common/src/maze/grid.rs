use std::fmt;

use glam::Vec2;
use rand::prelude::{IndexedRandom, Rng};

use super::{Cell, CellIndex, MazeError, Side};

/// Fixed-size rectangle of cells stored in row-major order. The dimensions
/// never change after construction; `fill` only resets what is inside.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Self {
        let mut grid = Grid {
            rows,
            cols,
            cell_size,
            cells: Vec::with_capacity(rows * cols),
        };
        grid.fill();
        grid
    }

    /// Recreates every cell with all four walls up and `visited` cleared.
    pub fn fill(&mut self) {
        self.cells.clear();

        for i in 0..self.rows {
            for j in 0..self.cols {
                self.cells
                    .push(Cell::new(CellIndex::new(i, j), self.cell_size));
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.position(index).map(|p| &self.cells[p])
    }

    pub fn cell_mut(&mut self, index: CellIndex) -> Option<&mut Cell> {
        self.position(index).map(move |p| &mut self.cells[p])
    }

    pub fn contains_index(&self, index: CellIndex) -> bool {
        self.position(index).is_some()
    }

    pub fn check_bounds(&self, index: CellIndex) -> Result<(), MazeError> {
        self.checked_position(index).map(|_| ())
    }

    fn position(&self, index: CellIndex) -> Option<usize> {
        if index.row < self.rows && index.col < self.cols {
            Some(index.row * self.cols + index.col)
        } else {
            None
        }
    }

    fn checked_position(&self, index: CellIndex) -> Result<usize, MazeError> {
        self.position(index).ok_or(MazeError::OutOfBounds {
            index,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn is_visited(&self, index: CellIndex) -> bool {
        self.cell(index).is_some_and(|cell| cell.visited)
    }

    pub fn visit(&mut self, index: CellIndex) -> Result<(), MazeError> {
        let p = self.checked_position(index)?;
        self.cells[p].visited = true;
        Ok(())
    }

    /// Every cell at Manhattan distance one, in row-major order. A plain scan
    /// over the whole grid; it is only ever asked for one cell per tick.
    pub fn neighbors_of(&self, index: CellIndex) -> Vec<CellIndex> {
        self.cells
            .iter()
            .filter(|other| other.index.is_adjacent(&index))
            .map(|other| other.index)
            .collect()
    }

    pub fn pick_unvisited_neighbor<R: Rng + ?Sized>(
        &self,
        index: CellIndex,
        rng: &mut R,
    ) -> Option<CellIndex> {
        let unvisited: Vec<CellIndex> = self
            .neighbors_of(index)
            .into_iter()
            .filter(|&neighbor| !self.is_visited(neighbor))
            .collect();

        unvisited.choose(rng).copied()
    }

    /// Opens the passage between two adjacent cells by clearing the facing
    /// wall on each of them.
    pub fn remove_wall_between(&mut self, a: CellIndex, b: CellIndex) -> Result<(), MazeError> {
        let pa = self.checked_position(a)?;
        let pb = self.checked_position(b)?;

        let side = side_facing(a, b).ok_or(MazeError::InvalidAdjacency { a, b })?;

        self.cells[pa].walls.remove(side);
        self.cells[pb].walls.remove(side.opposite());

        Ok(())
    }

    /// First cell, in row-major order, whose box contains `point`.
    pub fn cell_at(&self, point: Vec2) -> Option<CellIndex> {
        self.cells
            .iter()
            .find(|cell| cell.contains(point))
            .map(|cell| cell.index)
    }

    /// Number of open passages between neighboring cells. Each one is counted
    /// once, from the cell above or to the left of it.
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let CellIndex { row, col } = cell.index;
                let right = col + 1 < self.cols && !cell.walls.right;
                let below = row + 1 < self.rows && !cell.walls.bottom;
                usize::from(right) + usize::from(below)
            })
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }
}

/// The side of `from` that faces `to`, if they are adjacent.
fn side_facing(from: CellIndex, to: CellIndex) -> Option<Side> {
    if !from.is_adjacent(&to) {
        return None;
    }

    let di = from.row as isize - to.row as isize;
    let dj = from.col as isize - to.col as isize;

    match (di, dj) {
        (0, 1) => Some(Side::Left),
        (0, -1) => Some(Side::Right),
        (1, 0) => Some(Side::Top),
        (-1, 0) => Some(Side::Bottom),
        _ => None,
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let mut top = String::from("+");
            let mut middle = String::new();

            for cell in row {
                top.push_str(if cell.walls.top { "---+" } else { "   +" });
                middle.push(if cell.walls.left { '|' } else { ' ' });
                middle.push_str(if cell.visited { "   " } else { " . " });
            }

            if let Some(last) = row.last() {
                middle.push(if last.walls.right { '|' } else { ' ' });
            }

            writeln!(f, "{}", top)?;
            writeln!(f, "{}", middle)?;
        }

        let mut bottom = String::from("+");
        if let Some(last_row) = self.cells.chunks(self.cols.max(1)).last() {
            for cell in last_row {
                bottom.push_str(if cell.walls.bottom { "---+" } else { "   +" });
            }
        }
        write!(f, "{}", bottom)
    }
}
