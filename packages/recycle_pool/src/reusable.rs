use std::any;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::RecyclePool;
use crate::constants::ERR_LOAN_CLOSED;

/// A checked-out instance from a [`RecyclePool`], returned to the pool when
/// dropped.
///
/// The guard dereferences to the instance, so most code can use it as if it
/// were a `T` directly. Because the guard is move-only and remembers which
/// pool it came from, an instance cannot be returned twice or into the wrong
/// pool.
///
/// To keep the instance permanently and end its pool membership, use
/// [`into_inner()`][Self::into_inner].
///
/// # Example
///
/// ```rust
/// use recycle_pool::RecyclePool;
///
/// let pool = RecyclePool::<Vec<u8>>::with_capacity(1);
///
/// let mut scratch = pool.acquire().unwrap();
/// scratch.push(7);
/// assert_eq!(scratch.len(), 1);
///
/// // Dropping the guard performs the release.
/// drop(scratch);
/// assert_eq!(pool.len(), 1);
/// ```
pub struct Reusable<T> {
    /// Present from acquisition until the guard is dropped or consumed by
    /// `into_inner()`.
    instance: Option<T>,

    /// The pool the instance goes back to on drop.
    pool: RecyclePool<T>,
}

impl<T> Reusable<T> {
    /// Creates a new loan guard.
    ///
    /// This method is intended for internal use by [`RecyclePool`].
    pub(crate) fn new(instance: T, pool: RecyclePool<T>) -> Self {
        Self {
            instance: Some(instance),
            pool,
        }
    }

    /// Consumes the guard and keeps the instance, closing the loan without
    /// returning anything to the pool.
    ///
    /// The pool stops expecting the instance back; under
    /// [`ExhaustionPolicy::EnforceCeiling`][crate::ExhaustionPolicy::EnforceCeiling]
    /// a later acquire may construct a replacement.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool = RecyclePool::<String>::with_capacity(1);
    ///
    /// let guard = pool.acquire().unwrap();
    /// let owned: String = guard.into_inner();
    ///
    /// // The instance never comes back.
    /// assert_eq!(pool.len(), 0);
    /// assert_eq!(pool.on_loan(), 0);
    /// # drop(owned);
    /// ```
    #[must_use]
    pub fn into_inner(mut self) -> T {
        let instance = self.instance.take().expect(ERR_LOAN_CLOSED);
        self.pool.close_loan();
        instance
    }
}

impl<T> Deref for Reusable<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.instance.as_ref().expect(ERR_LOAN_CLOSED)
    }
}

impl<T> DerefMut for Reusable<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.instance.as_mut().expect(ERR_LOAN_CLOSED)
    }
}

impl<T> Drop for Reusable<T> {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.pool.return_instance(instance);
        }
    }
}

impl<T> fmt::Debug for Reusable<T> {
    #[cfg_attr(test, mutants::skip)] // Debug output is cosmetic, no test asserts on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reusable")
            .field(
                "item_type",
                &std::format_args!("{}", any::type_name::<T>()),
            )
            .finish()
    }
}
