//! Basic benchmarks for the `recycle_pool` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recycle_pool::{RawRecyclePool, RecyclePool};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const POOL_CAPACITY: usize = 64;

fn entrypoint(c: &mut Criterion) {
    let mut build_group = c.benchmark_group("rp_build");

    build_group.bench_function("empty", |b| {
        b.iter(|| {
            drop(black_box(RawRecyclePool::<Vec<u8>>::with_capacity(0)));
        });
    });

    build_group.bench_function("prepopulated", |b| {
        b.iter(|| {
            drop(black_box(RawRecyclePool::<Vec<u8>>::with_capacity(
                POOL_CAPACITY,
            )));
        });
    });

    build_group.finish();

    let mut cycle_group = c.benchmark_group("rp_cycle");

    cycle_group.bench_function("raw_acquire_release", |b| {
        let mut pool = RawRecyclePool::<Vec<u8>>::with_capacity(POOL_CAPACITY);

        b.iter(|| {
            let instance = pool.acquire().unwrap();
            pool.release(black_box(instance)).unwrap();
        });
    });

    cycle_group.bench_function("raw_grow_on_empty", |b| {
        let mut pool = RawRecyclePool::<Vec<u8>>::with_capacity(0);

        b.iter(|| {
            let instance = pool.acquire().unwrap();
            drop(black_box(instance));
            // Close the loan without recirculating so the next iteration grows again.
            pool.detach().unwrap();
        });
    });

    cycle_group.bench_function("guarded_acquire_release", |b| {
        let pool = RecyclePool::<Vec<u8>>::with_capacity(POOL_CAPACITY);

        b.iter(|| {
            drop(black_box(pool.acquire().unwrap()));
        });
    });

    cycle_group.finish();
}
