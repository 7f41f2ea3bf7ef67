use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, PieceController, Shape, UniformPieces};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let board = Board::new();
    let mut ctl = PieceController::new(UniformPieces::new(12345));

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(ctl.spawn(&board));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::new();
    let mut ctl = PieceController::new(UniformPieces::new(12345));
    ctl.spawn(&board);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let right = ctl.try_move(&board, 1, 0);
            black_box(right || ctl.try_move(&board, -4, 0));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let shape = Shape::spawn(PieceKind::T);

    c.bench_function("rotate_and_fit", |b| {
        b.iter(|| {
            let rotated = black_box(shape).rotated();
            black_box(board.fits(&rotated, 4, 5));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_rotate
);
criterion_main!(benches);
