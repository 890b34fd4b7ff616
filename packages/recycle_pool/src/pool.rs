use std::sync::{Arc, Mutex};

use crate::constants::ERR_POISONED_LOCK;
use crate::errors::Result;
use crate::{RawRecyclePool, RecyclePoolBuilder, Reusable};

/// A thread-safe wrapper around [`RawRecyclePool`] whose checked-out instances
/// return themselves to the pool automatically.
///
/// This type acts as a cloneable handle to a shared pool instance. Multiple
/// handles can exist simultaneously, and the underlying pool remains alive as
/// long as at least one handle or outstanding [`Reusable`] guard exists.
///
/// [`acquire()`][Self::acquire] returns a [`Reusable<T>`] guard that
/// dereferences to the instance and releases it back to this pool when
/// dropped, so a loan can be neither forgotten nor returned twice.
///
/// The internal lock is held only while the available list is mutated, never
/// while a caller uses an instance, so holding an instance across slow work
/// does not block other callers.
///
/// # Thread Safety
///
/// This type is thread-safe and can be safely shared across multiple threads.
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use recycle_pool::RecyclePool;
///
/// let pool = RecyclePool::<Vec<u8>>::with_capacity(2);
///
/// // Clone the pool handle to share across threads.
/// let pool_clone = pool.clone();
///
/// let handle = thread::spawn(move || {
///     let mut scratch = pool_clone.acquire().unwrap();
///     scratch.extend_from_slice(b"written on another thread");
///     scratch.len()
/// });
///
/// let written = handle.join().unwrap();
/// assert_eq!(written, 25);
///
/// // The instance went back to the pool when the guard dropped.
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Debug)]
pub struct RecyclePool<T> {
    /// The shared pool instance protected by a mutex for thread safety.
    inner: Arc<Mutex<RawRecyclePool<T>>>,
}

impl<T> Clone for RecyclePool<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<RawRecyclePool<T>> for RecyclePool<T> {
    /// Creates a new [`RecyclePool`] from an existing raw pool.
    ///
    /// The provided pool is consumed and wrapped in thread-safe reference
    /// counting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{ExhaustionPolicy, RawRecyclePool, RecyclePool};
    ///
    /// // Create a configured raw pool.
    /// let raw_pool = RawRecyclePool::<String>::builder()
    ///     .capacity(2)
    ///     .factory_default()
    ///     .exhaustion_policy(ExhaustionPolicy::EnforceCeiling)
    ///     .build();
    ///
    /// // Convert to a shareable pool.
    /// let pool = RecyclePool::from(raw_pool);
    /// ```
    fn from(pool: RawRecyclePool<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }
}

impl<T> RecyclePool<T>
where
    T: Send,
{
    /// Creates a pool pre-populated with `capacity` default-constructed
    /// instances.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool = RecyclePool::<String>::with_capacity(3);
    /// assert_eq!(pool.len(), 3);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default + 'static,
    {
        Self::from(RawRecyclePool::with_capacity(capacity))
    }

    /// Returns a builder for creating a [`RecyclePool`] with a custom factory
    /// or exhaustion policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool = RecyclePool::builder()
    ///     .capacity(2)
    ///     .factory(|| Vec::<u8>::with_capacity(4096))
    ///     .build();
    /// ```
    pub fn builder() -> RecyclePoolBuilder<T> {
        RecyclePoolBuilder::new()
    }

    /// Checks out the instance that has been waiting longest, constructing a
    /// fresh one if none is available.
    ///
    /// The returned [`Reusable`] guard dereferences to the instance and
    /// returns it to this pool when dropped.
    ///
    /// This operation may block briefly if another thread is currently
    /// accessing the pool's bookkeeping, but never waits for another caller
    /// to return an instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`][crate::Error::Exhausted] when the pool is
    /// empty, all instances are on loan, and the exhaustion policy is
    /// [`ExhaustionPolicy::EnforceCeiling`][crate::ExhaustionPolicy::EnforceCeiling].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool = RecyclePool::<String>::with_capacity(1);
    ///
    /// let mut message = pool.acquire().unwrap();
    /// message.push_str("reporting for duty");
    ///
    /// drop(message);
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn acquire(&self) -> Result<Reusable<T>> {
        let instance = {
            let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
            pool.acquire()?
        };

        Ok(Reusable::new(instance, self.clone()))
    }

    /// Returns the number of instances currently available for acquiring.
    ///
    /// This operation may block if another thread is currently accessing the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.len()
    }

    /// Returns whether the pool has no available instances.
    ///
    /// This operation may block if another thread is currently accessing the pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.is_empty()
    }

    /// Returns the capacity the pool was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.capacity()
    }

    /// Returns the number of instances currently checked out.
    #[must_use]
    pub fn on_loan(&self) -> usize {
        let pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.on_loan()
    }
}

impl<T> RecyclePool<T> {
    /// Returns an instance to the pool.
    ///
    /// This is an internal method used by [`Reusable`] when it is dropped.
    /// It should not be called directly by user code.
    pub(crate) fn return_instance(&self, instance: T) {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.release(instance)
            .expect("a loan guard returned an instance but the pool has no outstanding loans");
    }

    /// Closes one outstanding loan without returning its instance.
    ///
    /// This is an internal method used by [`Reusable::into_inner()`].
    pub(crate) fn close_loan(&self) {
        let mut pool = self.inner.lock().expect(ERR_POISONED_LOCK);
        pool.detach()
            .expect("a loan guard detached an instance but the pool has no outstanding loans");
    }
}

impl<T> Default for RecyclePool<T>
where
    T: Default + Send + 'static,
{
    /// Creates an empty pool that constructs every instance on demand.
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
