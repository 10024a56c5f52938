use disjoint::DisjointSetVec;

use common::{CellIndex, Grid, MazeSession, Step};

fn carve(rows: usize, cols: usize, seed: u64, start: Option<CellIndex>) -> (MazeSession, Vec<Step>) {
    let mut session = MazeSession::with_seed(rows, cols, 10.0, seed);
    session
        .reset(start)
        .expect("start should be inside the grid");

    let mut steps = Vec::new();
    while session.is_running() {
        steps.push(session.advance().expect("carving should never fail"));
    }

    (session, steps)
}

fn flat(grid: &Grid, index: CellIndex) -> usize {
    index.row * grid.cols() + index.col
}

/// Passages read back from the walls, each as an (above-or-left, other) pair.
fn passages(grid: &Grid) -> Vec<(CellIndex, CellIndex)> {
    let mut passages = Vec::new();

    for cell in grid.cells() {
        let CellIndex { row, col } = cell.index;
        if col + 1 < grid.cols() && !cell.walls.right {
            passages.push((cell.index, CellIndex::new(row, col + 1)));
        }
        if row + 1 < grid.rows() && !cell.walls.bottom {
            passages.push((cell.index, CellIndex::new(row + 1, col)));
        }
    }

    passages
}

fn assert_spanning_tree(grid: &Grid) {
    let passages = passages(grid);
    assert_eq!(
        passages.len(),
        grid.len() - 1,
        "a perfect maze has one passage fewer than cells:\n{}",
        grid
    );

    let mut components = DisjointSetVec::from(grid.cells().to_vec());
    for (a, b) in passages {
        let (i, j) = (flat(grid, a), flat(grid, b));
        assert_ne!(
            components.root_of(i),
            components.root_of(j),
            "passage {} - {} closes a loop:\n{}",
            a,
            b,
            grid
        );
        components.join(i, j);
    }

    let root = components.root_of(0);
    for i in 0..grid.len() {
        assert_eq!(components.root_of(i), root, "maze is not connected:\n{}", grid);
    }
}

fn assert_walls_agree(grid: &Grid) {
    for cell in grid.cells() {
        let CellIndex { row, col } = cell.index;
        if let Some(right) = grid.cell(CellIndex::new(row, col + 1)) {
            assert_eq!(cell.walls.right, right.walls.left);
        } else {
            assert!(cell.walls.right, "outer wall removed at {}", cell.index);
        }
        if let Some(below) = grid.cell(CellIndex::new(row + 1, col)) {
            assert_eq!(cell.walls.bottom, below.walls.top);
        } else {
            assert!(cell.walls.bottom, "outer wall removed at {}", cell.index);
        }
        if row == 0 {
            assert!(cell.walls.top, "outer wall removed at {}", cell.index);
        }
        if col == 0 {
            assert!(cell.walls.left, "outer wall removed at {}", cell.index);
        }
    }
}

#[test]
fn every_grid_size_carves_a_perfect_maze() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            for seed in 0..4 {
                let (session, steps) = carve(rows, cols, seed, None);
                let grid = session.grid();

                assert_eq!(grid.visited_count(), rows * cols);
                assert_eq!(steps.last(), Some(&Step::Completed));
                assert_walls_agree(grid);
                assert_spanning_tree(grid);
            }
        }
    }
}

#[test]
fn each_carve_joins_two_separate_regions() {
    let (session, steps) = carve(12, 9, 2024, Some(CellIndex::new(5, 4)));
    let grid = session.grid();
    let mut components = DisjointSetVec::from(grid.cells().to_vec());
    let mut carves = 0;

    for step in steps {
        if let Step::Carved { from, to } = step {
            let (i, j) = (flat(grid, from), flat(grid, to));
            assert_ne!(components.root_of(i), components.root_of(j));
            components.join(i, j);
            carves += 1;
        }
    }

    assert_eq!(carves, grid.len() - 1);
    assert_eq!(grid.open_passages(), carves);
}

#[test]
fn each_cell_is_entered_exactly_once() {
    let (session, steps) = carve(7, 8, 31, Some(CellIndex::new(6, 0)));
    let mut entered = vec![CellIndex::new(6, 0)];

    for step in &steps {
        if let Step::Carved { to, .. } = step {
            entered.push(*to);
        }
    }

    let total = entered.len();
    entered.sort();
    entered.dedup();
    assert_eq!(entered.len(), total);
    assert_eq!(total, session.grid().len());
}

#[test]
fn two_by_two_opens_three_of_four_inner_walls() {
    for seed in 0..16 {
        let (session, _) = carve(2, 2, seed, Some(CellIndex::new(0, 0)));

        assert_eq!(session.grid().visited_count(), 4);
        assert_eq!(session.grid().open_passages(), 3);
        assert_eq!(passages(session.grid()).len(), 3);
    }
}

#[test]
fn single_cell_keeps_all_walls() {
    let (session, steps) = carve(1, 1, 0, None);

    assert_eq!(
        steps,
        vec![
            Step::Backtracked {
                from: CellIndex::new(0, 0),
                to: None
            },
            Step::Completed
        ]
    );
    assert!(session.grid().cells()[0].walls.is_closed());
    assert!(session.grid().cells()[0].visited);
}

#[test]
fn same_seed_reproduces_the_same_maze() {
    let start = Some(CellIndex::new(3, 3));
    let (first, first_steps) = carve(10, 10, 77, start);
    let (second, second_steps) = carve(10, 10, 77, start);

    assert_eq!(first_steps, second_steps);
    assert_eq!(first.grid().cells(), second.grid().cells());
    assert_eq!(first.grid().to_string(), second.grid().to_string());
}

#[test]
fn different_seeds_produce_different_mazes() {
    let (first, _) = carve(10, 10, 1, None);
    let (second, _) = carve(10, 10, 2, None);

    assert_ne!(first.grid().to_string(), second.grid().to_string());
}

#[test]
fn reset_mid_carve_discards_all_progress() {
    let mut session = MazeSession::with_seed(8, 8, 10.0, 5);
    session.reset(None).unwrap();
    for _ in 0..40 {
        session.advance().unwrap();
    }

    let restart = CellIndex::new(7, 7);
    session.reset(Some(restart)).unwrap();

    assert_eq!(session.carver().current(), Some(restart));
    assert!(session.carver().path().is_empty());
    assert_eq!(session.grid().visited_count(), 0);
    assert!(session.grid().cells().iter().all(|cell| cell.walls.is_closed()));

    session.advance_until_idle().unwrap();
    assert_spanning_tree(session.grid());
}
