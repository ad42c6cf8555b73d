use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_lines, Board, GameState, ScriptedSource};
use blockfall::types::{Direction, Intent, PieceKind};

fn bench_gravity_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("move_down_or_lock", |b| {
        b.iter(|| {
            if !state.is_playing() {
                state.start_game();
            }
            black_box(state.move_piece(Direction::Down));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    // Fill bottom 4 rows
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(clear_lines(black_box(&board))))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::with_source(ScriptedSource::new(&[]));
    state.start_game();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !state.is_playing() {
                state.start_game();
            }
            black_box(state.drop_piece());
        })
    });
}

fn bench_move_sideways(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("move_sideways", |b| {
        b.iter(|| {
            state.move_piece(Direction::Right);
            state.move_piece(Direction::Left);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate_piece());
        })
    });
}

fn bench_pure_transition(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();

    c.bench_function("transition_clone", |b| {
        b.iter(|| black_box(state.transition(Intent::Move(Direction::Left))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start_game();
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_line_clear,
    bench_hard_drop,
    bench_move_sideways,
    bench_rotate,
    bench_pure_transition,
    bench_snapshot
);
criterion_main!(benches);
