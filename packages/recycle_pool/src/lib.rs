//! This package provides [`RecyclePool`], a bounded pool of reusable instances that
//! recirculates expensive-to-create resources between callers.
//!
//! Instead of constructing a fresh resource for every caller (a database connection,
//! a parser scratch buffer, a handle to anything costly), the pool is pre-populated
//! with a fixed number of instances which callers check out, use, and return. Returned
//! instances are handed out again in FIFO order, so the oldest returned instance is
//! always the next one out.
//!
//! # Features
//!
//! - **FIFO recirculation**: Instances come back out in the order they went in.
//! - **Explicit factory**: The pool constructs instances through a caller-supplied
//!   factory function, or through [`Default`] for types that have one.
//! - **Loan tracking**: The pool counts outstanding loans and rejects releases that
//!   have no matching acquire, so recirculation can never grow the pool.
//! - **Configurable exhaustion behavior**: By default an exhausted pool constructs
//!   fresh instances on demand; [`ExhaustionPolicy::EnforceCeiling`] makes it reject
//!   instead. Neither variant ever blocks.
//! - **Thread-safe and single-threaded variants**: [`RecyclePool`] for sharing across
//!   threads, [`RawRecyclePool`] for manual single-threaded use.
//! - **Stable Rust**: No unstable Rust features required.
//!
//! # Example
//!
//! ```rust
//! use recycle_pool::RecyclePool;
//!
//! // Three pre-populated instances, constructed via `Default`.
//! let pool = RecyclePool::<String>::with_capacity(3);
//!
//! let mut buffer = pool.acquire().unwrap();
//! buffer.push_str("hello");
//!
//! // Dropping the guard returns the instance to the pool.
//! drop(buffer);
//! assert_eq!(pool.len(), 3);
//! ```
//!
//! For manual checkout bookkeeping:
//!
//! ```rust
//! use recycle_pool::RawRecyclePool;
//!
//! let mut pool = RawRecyclePool::<String>::with_capacity(2);
//!
//! let buffer = pool.acquire().unwrap();
//! assert_eq!(pool.len(), 1);
//! assert_eq!(pool.on_loan(), 1);
//!
//! // Manual return required.
//! pool.release(buffer).unwrap();
//! assert_eq!(pool.len(), 2);
//! ```

mod builder;
mod constants;
mod errors;
mod exhaustion_policy;
mod pool;
mod raw;
mod raw_builder;
mod reusable;

pub use builder::*;
pub use errors::*;
pub use exhaustion_policy::*;
pub use pool::*;
pub use raw::*;
pub use raw_builder::*;
pub use reusable::*;
