use beluga::{BubbleSpec, LayoutEngine, SimConfig};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn seeded_engine(count: usize) -> LayoutEngine {
    let mut engine = LayoutEngine::new(SimConfig {
        random_seed: 1,
        ..SimConfig::default()
    });
    let entries: Vec<BubbleSpec> = (0..count)
        .map(|i| BubbleSpec {
            id: format!("m{i}"),
            magnitude: (i % 101) as f64,
            color: String::new(),
            display_name: String::new(),
        })
        .collect();
    engine.seed(&entries, 800.0, 600.0).unwrap();
    engine
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for count in [8usize, 32, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || seeded_engine(count),
                |mut engine| {
                    for _ in 0..60 {
                        engine.step(1.0 / 60.0);
                    }
                    black_box(engine.snapshot())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
