//! This package provides [`OnceSlot`], a slot that is initialized at most once,
//! by whichever caller gets there first, and read from any number of threads
//! thereafter.
//!
//! The slot answers a narrow question well: many places in a program want a
//! shared value that is expensive or meaningful to create exactly once, where
//! any of several racing callers could be the one to create it. The first
//! writer wins; every other caller, past, racing or future, observes the
//! winner's value and nothing else.
//!
//! # Features
//!
//! - **At most one initialization**: Exactly one publish succeeds per slot, no
//!   matter how many threads race for it.
//! - **First-writer-wins**: Losing callers' values are discarded, not queued,
//!   not merged.
//! - **Lock-free reads**: Once initialized, reads never block and never
//!   synchronize beyond an atomic load.
//! - **Explicit handle, no globals**: A slot is a value you create and pass
//!   around, or share through [`SharedSlot`]; nothing lives in process-wide
//!   statics.
//! - **Stable Rust**: No unstable Rust features required.
//!
//! # Example
//!
//! ```rust
//! use once_slot::OnceSlot;
//!
//! let slot = OnceSlot::new();
//!
//! // The first publish wins...
//! let value = slot.get_or_publish(String::from("Foo"));
//! assert_eq!(value, "Foo");
//!
//! // ...and later arguments are discarded by design.
//! let value = slot.get_or_publish(String::from("Bar"));
//! assert_eq!(value, "Foo");
//! ```
//!
//! For sharing across threads without borrowing:
//!
//! ```rust
//! use std::thread;
//!
//! use once_slot::SharedSlot;
//!
//! let slot = SharedSlot::new();
//! let slot_clone = slot.clone();
//!
//! thread::spawn(move || {
//!     slot_clone.get_or_publish(String::from("from a thread"));
//! })
//! .join()
//! .unwrap();
//!
//! assert!(slot.is_initialized());
//! ```

mod shared;
mod slot;

pub use shared::*;
pub use slot::*;
