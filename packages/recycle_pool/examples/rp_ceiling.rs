//! Example demonstrating the `EnforceCeiling` exhaustion policy.
//!
//! With the ceiling enforced, the pool refuses to hand out more instances
//! than its capacity instead of constructing extras.

use recycle_pool::{Error, ExhaustionPolicy, RecyclePool};

fn main() {
    println!("=== RecyclePool: Enforced ceiling ===");

    let pool = RecyclePool::<String>::builder()
        .capacity(2)
        .factory_default()
        .exhaustion_policy(ExhaustionPolicy::EnforceCeiling)
        .build();

    let first = pool.acquire().unwrap();
    let second = pool.acquire().unwrap();
    println!("Both instances checked out");

    match pool.acquire() {
        Err(Error::Exhausted { capacity }) => {
            println!("Third acquire rejected: all {capacity} instances are in use");
        }
        Err(other) => println!("Unexpected error: {other}"),
        Ok(_) => println!("Unexpectedly acquired past the ceiling"),
    }

    drop(first);
    println!("One instance returned");

    let third = pool.acquire().unwrap();
    println!("Acquire succeeds again: {} on loan", pool.on_loan());

    drop((second, third));
}
