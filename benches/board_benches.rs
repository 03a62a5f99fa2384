use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tesserae::board::Board;
use tesserae::board::components::{Coord, Direction};
use tesserae::evaluation::{self, Weights, evaluate};

/// Mid-game position with a mix of merges, gaps and a dominant corner.
fn midgame_board() -> Board {
    let rows = [
        [128, 64, 32, 16],
        [8, 16, 8, 2],
        [2, 0, 4, 2],
        [0, 2, 0, 0],
    ];
    let mut board = Board::new(4, 2);
    for (y, row) in rows.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            board.set_value(Coord::new(x, y), value);
        }
    }
    board
}

fn bench_merge_and_slide(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("merge_and_slide", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            black_box(scratch.merge(black_box(Direction::Left)));
            black_box(scratch.slide(black_box(Direction::Left)));
        });
    });
}

fn bench_can_move(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("can_move_all_directions", |b| {
        b.iter(|| {
            for &dir in &Direction::ALL {
                black_box(board.can_move(black_box(dir)));
            }
        });
    });
}

fn bench_features(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("smoothness", |b| {
        b.iter(|| black_box(evaluation::smoothness(black_box(&board))));
    });
    c.bench_function("monotonicity", |b| {
        b.iter(|| black_box(evaluation::monotonicity(black_box(&board))));
    });
    c.bench_function("islands", |b| {
        b.iter(|| black_box(evaluation::islands(black_box(&board))));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    let weights = Weights::default();

    c.bench_function("evaluate_board", |b| {
        b.iter(|| black_box(evaluate(black_box(&board), black_box(&weights))));
    });
}

criterion_group!(
    benches,
    bench_merge_and_slide,
    bench_can_move,
    bench_features,
    bench_evaluate
);
criterion_main!(benches);
