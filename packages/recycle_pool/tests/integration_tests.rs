//! Integration tests for the `recycle_pool` package.
//!
//! These tests verify the correctness of `RecyclePool` and `Reusable<T>` under
//! realistic usage, including sharing across threads and the capacity ceiling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use recycle_pool::{Error, ExhaustionPolicy, RawRecyclePool, RecyclePool};

#[test]
fn checkout_cycle_through_shared_handle() {
    let pool = RecyclePool::<Vec<u8>>::with_capacity(3);

    let first = pool.acquire().unwrap();
    let second = pool.acquire().unwrap();

    assert_eq!(pool.len(), 1);
    assert_eq!(pool.on_loan(), 2);

    drop(first);
    drop(second);

    assert_eq!(pool.len(), 3);
    assert_eq!(pool.on_loan(), 0);
}

#[test]
fn capacity_three_scenario() {
    // Three distinct pre-populated instances, a fourth from growth, then the
    // first released instance comes back on the next acquire.
    let mut pool = RawRecyclePool::<Box<u32>>::with_capacity(3);

    let r1 = pool.acquire().unwrap();
    let r2 = pool.acquire().unwrap();
    let r3 = pool.acquire().unwrap();
    let p1: *const u32 = &*r1;

    let r4 = pool.acquire().unwrap();
    let p4: *const u32 = &*r4;
    assert_ne!(p4, p1);

    pool.release(r1).unwrap();

    let back = pool.acquire().unwrap();
    let p_back: *const u32 = &*back;
    assert_eq!(p_back, p1);

    drop((r2, r3, r4, back));
}

#[test]
fn instances_recirculate_across_threads() {
    let pool = RecyclePool::builder()
        .capacity(4)
        .factory(Vec::<u8>::new)
        .build();

    let workers = 8;
    let iterations = 100;
    let barrier = Barrier::new(workers);

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                barrier.wait();

                for _ in 0..iterations {
                    let mut scratch = pool.acquire().unwrap();
                    scratch.push(1);
                }
            });
        }
    });

    // Every loan was returned; growth may have happened but nothing leaked.
    assert_eq!(pool.on_loan(), 0);
    assert!(pool.len() >= 4);
}

#[test]
fn ceiling_holds_under_contention() {
    let pool = RecyclePool::<String>::builder()
        .capacity(2)
        .factory_default()
        .exhaustion_policy(ExhaustionPolicy::EnforceCeiling)
        .build();

    let rejections = AtomicUsize::new(0);
    let successes = AtomicUsize::new(0);
    let barrier = Barrier::new(4);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                barrier.wait();

                for _ in 0..50 {
                    match pool.acquire() {
                        Ok(guard) => {
                            successes.fetch_add(1, Ordering::Relaxed);
                            drop(guard);
                        }
                        Err(Error::Exhausted { capacity }) => {
                            assert_eq!(capacity, 2);
                            rejections.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
            });
        }
    });

    // The ceiling never produced more than two live instances, so the pool
    // holds at most its original population afterwards.
    assert_eq!(pool.on_loan(), 0);
    assert!(pool.len() <= 2);
    assert!(successes.load(Ordering::Relaxed) > 0);
}

#[test]
fn factory_observes_growth() {
    let constructed = Arc::new(AtomicUsize::new(0));

    let pool = RecyclePool::builder()
        .capacity(1)
        .factory({
            let constructed = Arc::clone(&constructed);
            move || {
                constructed.fetch_add(1, Ordering::Relaxed);
                Vec::<u8>::new()
            }
        })
        .build();

    assert_eq!(constructed.load(Ordering::Relaxed), 1);

    let first = pool.acquire().unwrap();
    let second = pool.acquire().unwrap();

    // The second acquire had to construct.
    assert_eq!(constructed.load(Ordering::Relaxed), 2);

    drop((first, second));
}

#[test]
fn detached_instances_leave_the_pool_for_good() {
    let pool = RecyclePool::<String>::with_capacity(2);

    let guard = pool.acquire().unwrap();
    let owned = guard.into_inner();

    assert_eq!(pool.len(), 1);
    assert_eq!(pool.on_loan(), 0);

    // Releasing the detached instance again is not possible: only a guard can
    // release, and its loan is closed. The owned value is just a value now.
    drop(owned);
    assert_eq!(pool.len(), 1);
}
