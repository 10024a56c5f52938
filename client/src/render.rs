use common::{Cell, MazeSession, Side};
use macroquad::prelude::*;
use strum::IntoEnumIterator;

pub const BACKGROUND_COLOR: Color = Color::new(80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 1.0);
pub const VISITED_COLOR: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 200.0 / 255.0, 1.0);
pub const CURRENT_COLOR: Color = Color::new(0.0, 200.0 / 255.0, 100.0 / 255.0, 1.0);
pub const PATH_COLOR: Color = Color::new(0.0, 200.0 / 255.0, 10.0 / 255.0, 50.0 / 255.0);
pub const WALL_COLOR: Color = Color::new(250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0, 1.0);
pub const WALL_THICKNESS: f32 = 2.0;

pub fn draw_session(session: &MazeSession) {
    clear_background(BACKGROUND_COLOR);

    let grid = session.grid();
    for cell in grid.cells() {
        draw_cell(cell);
    }

    let carver = session.carver();
    for cell in carver.path().iter().filter_map(|&index| grid.cell(index)) {
        highlight(cell, PATH_COLOR);
    }

    if let Some(cell) = carver.current().and_then(|index| grid.cell(index)) {
        highlight(cell, CURRENT_COLOR);
    }
}

fn draw_cell(cell: &Cell) {
    if cell.visited {
        highlight(cell, VISITED_COLOR);
    }

    for side in Side::iter().filter(|&side| cell.walls.has(side)) {
        let (start, end) = wall_segment(cell, side);
        draw_line(start.0, start.1, end.0, end.1, WALL_THICKNESS, WALL_COLOR);
    }
}

fn highlight(cell: &Cell, color: Color) {
    draw_rectangle(cell.origin.x, cell.origin.y, cell.size, cell.size, color);
}

/// Pixel endpoints of one wall, running clockwise around the cell.
pub fn wall_segment(cell: &Cell, side: Side) -> ((f32, f32), (f32, f32)) {
    let (x, y, w) = (cell.origin.x, cell.origin.y, cell.size);

    match side {
        Side::Top => ((x, y), (x + w, y)),
        Side::Right => ((x + w, y), (x + w, y + w)),
        Side::Bottom => ((x + w, y + w), (x, y + w)),
        Side::Left => ((x, y + w), (x, y)),
    }
}
