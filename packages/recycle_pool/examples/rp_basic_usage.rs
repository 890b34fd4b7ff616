//! Example demonstrating basic usage of `RecyclePool` with automatic return.
//!
//! This models the classic use case: a small set of expensive connections
//! recirculated between callers instead of reconnecting every time.

use std::thread::sleep;
use std::time::Duration;

use recycle_pool::RecyclePool;

/// A stand-in for an expensive-to-establish connection.
struct Connection {
    established: bool,
}

impl Connection {
    fn connect() -> Self {
        // Imagine a handshake here.
        sleep(Duration::from_millis(10));
        Self { established: true }
    }

    fn execute(&self, query: &str) {
        assert!(self.established);
        println!("Executing query: {query}");
    }
}

fn main() {
    println!("=== RecyclePool: Connection recycling ===");

    // Pay the connection cost three times, up front.
    let pool = RecyclePool::builder()
        .capacity(3)
        .factory(Connection::connect)
        .build();

    println!("Pool ready with {} connections", pool.len());

    {
        let connection = pool.acquire().unwrap();
        connection.execute("SELECT * FROM users");

        // The pool lock is not held here - other callers acquire freely
        // while we use the connection.
        println!("Connections still available: {}", pool.len());
    } // connection returns to the pool here

    println!("Connections available again: {}", pool.len());

    // Exhausting the pool does not fail: a fourth caller gets a fresh
    // connection, constructed on demand.
    let c1 = pool.acquire().unwrap();
    let c2 = pool.acquire().unwrap();
    let c3 = pool.acquire().unwrap();
    let c4 = pool.acquire().unwrap();
    println!("Four connections in use from a pool of three");

    drop((c1, c2, c3, c4));
    println!("Pool now recirculates {} connections", pool.len());
}
