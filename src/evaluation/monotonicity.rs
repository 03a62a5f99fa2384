use crate::prelude::*;

/// Monotonicity score: 0 when every row and column is already sorted in
/// one direction, more negative the more the values zig-zag.
///
/// Each axis keeps two penalty accumulators, one charged on falling steps
/// and one on rising steps; skipping over empty cells, every successive
/// pair of tiles charges `-|Δlog2|` to the matching accumulator. A lane's
/// probe that runs off the far edge is clamped to the last cell, and cell
/// values enter as `log2(max(1, v))` so empties score zero. The axis
/// contributes the better (less penalized) of its two accumulators.
pub fn monotonicity(board: &Board) -> f64 {
    let columns = lane_scores(board, |lane, slot| Coord::new(lane, slot));
    let rows = lane_scores(board, |lane, slot| Coord::new(slot, lane));
    columns.0.max(columns.1) + rows.0.max(rows.1)
}

fn lane_scores(board: &Board, at: impl Fn(usize, usize) -> Coord) -> (f64, f64) {
    let size = board.size();
    let tile_score = |coord: Coord| f64::from(board.value_at(coord).max(1)).log2();

    let mut falling = 0.0f64;
    let mut rising = 0.0f64;
    for lane in 0..size {
        let mut current = 0;
        let mut next = 1;
        while next < size {
            while next < size && board.value_at(at(lane, next)) == 0 {
                next += 1;
            }
            if next >= size {
                next = size - 1;
            }

            let current_score = tile_score(at(lane, current));
            let next_score = tile_score(at(lane, next));
            if current_score > next_score {
                falling -= current_score - next_score;
            } else {
                rising -= next_score - current_score;
            }

            current = next;
            next += 1;
        }
    }
    (falling, rising)
}
