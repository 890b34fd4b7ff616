//! Example demonstrating `RecyclePool` shared across threads.
//!
//! Each worker repeatedly borrows a scratch buffer, uses it, and lets the
//! guard return it. The pool never hands the same buffer to two workers at
//! once.

use std::thread;

use recycle_pool::RecyclePool;

fn main() {
    println!("=== RecyclePool: Scratch buffers across threads ===");

    let pool = RecyclePool::builder()
        .capacity(4)
        .factory(|| Vec::<u8>::with_capacity(1024))
        .build();

    thread::scope(|s| {
        for worker in 0..8 {
            let pool = &pool;
            s.spawn(move || {
                for round in 0..5 {
                    let mut scratch = pool.acquire().unwrap();
                    scratch.clear();
                    scratch.extend_from_slice(b"some intermediate bytes");

                    println!("worker {worker} round {round}: {} bytes", scratch.len());
                } // buffer returns to the pool after every round
            });
        }
    });

    println!("All loans returned: {} on loan", pool.on_loan());
    println!("Buffers recirculating: {}", pool.len());
}
