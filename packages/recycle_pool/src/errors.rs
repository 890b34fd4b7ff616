use thiserror::Error;

/// Errors that can occur when acquiring from or releasing into a pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pool is exhausted and its exhaustion policy forbids constructing
    /// more instances.
    ///
    /// This is only returned under
    /// [`ExhaustionPolicy::EnforceCeiling`][crate::ExhaustionPolicy::EnforceCeiling];
    /// the default policy constructs a fresh instance instead of failing.
    #[error("pool exhausted: all {capacity} instances are checked out")]
    Exhausted {
        /// The capacity the pool was created with.
        capacity: usize,
    },

    /// An instance was released when the pool had no outstanding loans.
    ///
    /// Accepting such a release would grow the pool past its capacity, so it is
    /// rejected and the pool is left unchanged.
    #[error("released an instance into a pool that has no outstanding loans")]
    NotCheckedOut,
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
