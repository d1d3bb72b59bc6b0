//! Benchmarks for bufpool.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bufpool::BufPool;

fn bench_get_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_release");

    // One size per tier band, stepping four octaves at a time.
    for shift in (0..24).step_by(4) {
        let size = 1usize << shift;
        let pool = BufPool::new();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| {
                let buf = pool.get(black_box(size));
                let len = buf.len();
                pool.release(buf).unwrap();
                black_box(len)
            });
        });
    }

    group.finish();
}

fn bench_fabricate_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("fabricate_only");
    let size = 16 * 1024;

    // Fresh pool per iteration: every get is a miss. The gap between this
    // and get_release at the same size is the win reuse buys.
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("size_16384", |b| {
        b.iter(|| {
            let pool = BufPool::new();
            let buf = pool.get(black_box(size));
            black_box(buf.len())
        });
    });

    group.finish();
}

fn bench_lease(c: &mut Criterion) {
    let mut group = c.benchmark_group("lease");
    let size = 4096;
    let pool = BufPool::new();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("size_4096", |b| {
        b.iter(|| {
            let lease = pool.lease(black_box(size));
            black_box(lease.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_release, bench_fabricate_only, bench_lease);
criterion_main!(benches);
