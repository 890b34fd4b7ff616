//! Example demonstrating two threads racing to initialize a `SharedSlot`.
//!
//! Exactly one thread's value is stored; both threads, and the main thread,
//! observe the same winner. Run it a few times and the winner may change.

use std::thread;

use once_slot::SharedSlot;

fn main() {
    println!("=== OnceSlot: Two threads race to initialize ===");

    let slot = SharedSlot::new();

    let handles: Vec<_> = ["Foo", "Bar"]
        .into_iter()
        .map(|candidate| {
            let slot = slot.clone();
            thread::spawn(move || {
                let stored = slot.get_or_publish(String::from(candidate));
                println!("thread proposing {candidate:?} observed {stored:?}");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("final value: {:?}", slot.get().unwrap());
}
