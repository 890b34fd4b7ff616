//! Integration tests for the `once_slot` package.
//!
//! These tests verify the first-writer-wins contract under real thread races:
//! exactly one publish succeeds, every caller observes the same value at the
//! same address, and later arguments never displace the winner.

use std::ptr;
use std::sync::Barrier;
use std::thread;

use once_slot::{OnceSlot, SharedSlot};

#[test]
fn racing_threads_agree_on_one_value() {
    // Run the race many times; which thread wins is unspecified, but the
    // outcome must always be coherent.
    for _ in 0..100 {
        let slot = OnceSlot::new();
        let barrier = Barrier::new(2);

        let (foo_view, bar_view) = thread::scope(|s| {
            let foo = s.spawn(|| {
                barrier.wait();
                slot.get_or_publish(String::from("Foo")).clone()
            });
            let bar = s.spawn(|| {
                barrier.wait();
                slot.get_or_publish(String::from("Bar")).clone()
            });

            (foo.join().unwrap(), bar.join().unwrap())
        });

        // Both callers observed the winner, whoever that was - never a mix,
        // never a corrupted value.
        assert_eq!(foo_view, bar_view);
        assert!(foo_view == "Foo" || foo_view == "Bar");
        assert_eq!(slot.get().unwrap(), &foo_view);
    }
}

#[test]
fn many_racing_threads_one_initialization() {
    let threads = 16;
    let slot = OnceSlot::new();
    let barrier = Barrier::new(threads);

    let addresses = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|index| {
                let slot = &slot;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    let value = slot.get_or_publish(format!("caller {index}"));
                    ptr::from_ref(value) as usize
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    // Identity equality across every caller.
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));

    // The stored value came from exactly one caller's argument.
    let value = slot.get().unwrap();
    assert!(value.starts_with("caller "));
}

#[test]
fn later_publishes_never_replace_the_value() {
    let slot = OnceSlot::new();
    slot.get_or_publish(String::from("Foo"));

    for round in 0..10 {
        let observed = slot.get_or_publish(format!("round {round}"));
        assert_eq!(observed, "Foo");
    }
}

#[test]
fn shared_handles_race_to_the_same_slot() {
    let slot = SharedSlot::new();
    let barrier = Barrier::new(2);

    thread::scope(|s| {
        for name in ["Foo", "Bar"] {
            let slot = slot.clone();
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                slot.get_or_publish(String::from(name));
            });
        }
    });

    let value = slot.get().unwrap();
    assert!(value == "Foo" || value == "Bar");
}

#[test]
fn reads_during_and_after_initialization_are_coherent() {
    let slot: OnceSlot<String> = OnceSlot::new();

    thread::scope(|s| {
        let reader = s.spawn(|| {
            // Spin until the writer's value becomes visible.
            loop {
                if let Some(value) = slot.get() {
                    break value.clone();
                }
                thread::yield_now();
            }
        });

        s.spawn(|| {
            slot.get_or_publish(String::from("published"));
        });

        assert_eq!(reader.join().unwrap(), "published");
    });
}
