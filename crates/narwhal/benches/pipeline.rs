use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::graph::{Point, Segment};
use narwhal::{LayoutOptions, layout};
use std::hint::black_box;

fn scene(seed: u64, points: usize, obstacles: usize) -> (Vec<Point>, Vec<Segment>) {
    let mut state = seed;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 80_000) as f64 / 100.0
    };
    let pts = (0..points).map(|_| Point::new(next(), next())).collect();
    let obs = (0..obstacles)
        .map(|_| Segment::new(Point::new(next(), next()), Point::new(next(), next())))
        .collect();
    (pts, obs)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let opts = LayoutOptions::default();
    for &(points, obstacles) in &[(20usize, 5usize), (50, 10), (120, 20)] {
        let (pts, obs) = scene(0x5eed ^ points as u64, points, obstacles);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{points}p_{obstacles}o")),
            &(pts, obs),
            |b, (pts, obs)| {
                b.iter(|| {
                    let result = layout(black_box(pts), black_box(obs), None, 600.0, &opts);
                    black_box(result.map(|r| r.positions.len()).unwrap_or(0))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
