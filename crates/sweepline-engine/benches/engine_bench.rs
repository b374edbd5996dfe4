//! Benchmarks for the sweepline engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sweepline_core::Bar;
use sweepline_engine::{CandidatePoint, EngineConfig, ExtremaPyramid, PyramidMode, SweepEngine, SwingDepth};

fn generate_bars(count: usize) -> Vec<Bar> {
    let mut bars = Vec::with_capacity(count);
    let mut price = 100.0_f32;

    for i in 0..count {
        let wave = (i as f32 * 0.37).sin() * 4.0 + (i as f32 * 0.05).sin() * 10.0;
        let open = price;
        let close = (100.0 + wave).max(1.0);
        let spike = (i as f32 * 0.73).sin().abs() * 1.5;
        let high = open.max(close) + spike;
        let low = (open.min(close) - spike).max(0.5);

        bars.push(Bar::new(i as f64 * 60.0, open, high, low, close, 100.0));
        price = close;
    }

    bars
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    for size in [1_000, 10_000, 100_000].iter() {
        let bars = generate_bars(*size);

        group.throughput(Throughput::Elements(*size as u64));
        for depth in [SwingDepth::Shallow, SwingDepth::Medium, SwingDepth::Deep] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", depth), size),
                &bars,
                |b, bars| {
                    b.iter(|| {
                        let mut engine =
                            SweepEngine::new(EngineConfig::new(depth, 500));
                        for bar in bars {
                            let _ = engine.process_bar(black_box(bar));
                        }
                        engine.bars_processed()
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_pyramid_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("pyramid_push");

    let bars = generate_bars(10_000);
    let highs: Vec<f32> = bars.iter().map(|b| b.high).collect();

    for depth in [SwingDepth::Shallow, SwingDepth::Medium, SwingDepth::Deep] {
        group.throughput(Throughput::Elements(highs.len() as u64));
        group.bench_function(format!("{:?}", depth), |b| {
            b.iter(|| {
                let mut pyramid = ExtremaPyramid::new(PyramidMode::Bull, depth);
                let mut confirmed = 0usize;
                for (i, &high) in highs.iter().enumerate() {
                    if pyramid.push(CandidatePoint::new(black_box(high), i)).is_some() {
                        confirmed += 1;
                    }
                }
                confirmed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_replay, bench_pyramid_push);
criterion_main!(benches);
