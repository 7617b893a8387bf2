use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pieceflow::core::Session;
use tui_pieceflow::types::SessionAction;

fn bench_play_cycle(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("play_and_replenish", |b| {
        b.iter(|| session.apply(black_box(SessionAction::Play)))
    });
}

fn bench_reserve_use_cycle(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            session.apply(black_box(SessionAction::Reserve)).ok();
            session.apply(black_box(SessionAction::UseReserved)).ok();
        })
    });
}

fn bench_swap_run(c: &mut Criterion) {
    let mut session = Session::new(12345);
    for _ in 0..3 {
        session.apply(SessionAction::Reserve).ok();
    }

    c.bench_function("swap_run_of_three", |b| {
        b.iter(|| session.apply(black_box(SessionAction::SwapRun)))
    });
}

criterion_group!(benches, bench_play_cycle, bench_reserve_use_cycle, bench_swap_run);
criterion_main!(benches);
