use criterion::{black_box, BatchSize, BenchmarkId, Criterion};
use criterion::{criterion_group, criterion_main};
use tempfile::tempdir;

use splitsink::RotatingSink;

const WRITES_PER_ITER: usize = 10_000;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for &size in &[64_usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let dir = tempdir().expect("tempdir");
                    let sink = RotatingSink::lines(1_000, dir.path(), "bench-");
                    let payload = vec![0u8; size];
                    (dir, sink, payload)
                },
                |(_dir, mut sink, payload)| {
                    for _ in 0..WRITES_PER_ITER {
                        sink.write(black_box(&payload)).expect("write");
                    }
                    sink.close().expect("close");
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append);
criterion_main!(benches);
