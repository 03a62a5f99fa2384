use crate::prelude::*;

/// Smoothness penalty: 0 for a perfectly smooth board, more negative the
/// more adjacent tiles differ.
///
/// For every occupied cell and each of the two positive axis directions,
/// the nearest occupied neighbor is found by scanning past empty cells;
/// the absolute difference of the two values' log2 is subtracted. A cell
/// with no occupied neighbor in a direction contributes nothing there.
pub fn smoothness(board: &Board) -> f64 {
    let mut total = 0.0;
    for cell in board.occupied_cells() {
        let own = f64::from(cell.value).log2();
        for (dx, dy) in [(1, 0), (0, 1)] {
            if let Some(neighbor) = nearest_occupied(board, cell.coord, dx, dy) {
                total -= (own - f64::from(neighbor).log2()).abs();
            }
        }
    }
    total
}

fn nearest_occupied(board: &Board, from: Coord, dx: usize, dy: usize) -> Option<u32> {
    let mut x = from.x;
    let mut y = from.y;
    loop {
        x += dx;
        y += dy;
        if !board.is_inside(x, y) {
            return None;
        }
        let value = board.value_at(Coord::new(x, y));
        if value != 0 {
            return Some(value);
        }
    }
}
