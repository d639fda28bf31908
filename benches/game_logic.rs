use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blocktris::core::{ActivePiece, Board, GameSession, ModeController};
use blocktris::types::{GameAction, PieceKind, Rotation, Turn};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.game_over() {
                session.reset();
            }
            black_box(session.update());
        })
    });
}

fn bench_attract_tick(c: &mut Criterion) {
    let mut ctl = ModeController::new(12345);

    c.bench_function("attract_tick", |b| {
        b.iter(|| {
            ctl.tick();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, 1);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            session.spawn_kind(black_box(PieceKind::T));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = ActivePiece::placed(PieceKind::J, Rotation::North, 8, 4);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            black_box(piece.rotate(Turn::Cw, &board));
        })
    });
}

fn bench_key_down(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("button_down_rotate", |b| {
        b.iter(|| {
            black_box(session.button_down(GameAction::RotateCcw));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_attract_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_rotate,
    bench_key_down
);
criterion_main!(benches);
