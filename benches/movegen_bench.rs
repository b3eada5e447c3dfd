use chessboard_engine::{Position, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_starting_position_sweep(c: &mut Criterion) {
    let pos = Position::default();
    let squares: Vec<Square> = (0..8)
        .flat_map(|r| (0..8).map(move |c| Square::new(r, c).unwrap()))
        .collect();

    c.bench_function("legal destinations, full board sweep", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &sq in &squares {
                total += pos.legal_destinations(black_box(sq)).len();
            }
            black_box(total)
        })
    });
}

fn bench_open_queen(c: &mut Criterion) {
    let pos = Position::from_fen("8/8/8/8/3Q4/8/8/8");
    let from = Square::new(4, 3).unwrap();

    c.bench_function("legal destinations, open queen", |b| {
        b.iter(|| black_box(pos.legal_destinations(black_box(from))))
    });
}

criterion_group!(benches, bench_starting_position_sweep, bench_open_queen);
criterion_main!(benches);
