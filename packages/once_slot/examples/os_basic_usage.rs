//! Example demonstrating basic usage of `OnceSlot`.
//!
//! A configuration value is published once; every later caller observes the
//! original, and their own arguments are discarded.

use once_slot::OnceSlot;

/// A value established once and consulted everywhere.
#[derive(Debug)]
struct Greeting {
    text: String,
}

impl Greeting {
    fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
        }
    }

    fn greet(&self, name: &str) {
        println!("{}, {name}!", self.text);
    }
}

fn main() {
    println!("=== OnceSlot: First writer wins ===");

    let slot = OnceSlot::new();

    // The first caller establishes the greeting.
    let greeting = slot.get_or_publish(Greeting::new("Hello"));
    greeting.greet("first caller");

    // A later caller's argument is discarded; the established value is used.
    let greeting = slot.get_or_publish(Greeting::new("Goodbye"));
    greeting.greet("second caller");

    println!("Stored greeting is still: {:?}", slot.get().unwrap().text);
}
