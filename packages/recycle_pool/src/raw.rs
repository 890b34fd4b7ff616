use std::any;
use std::collections::VecDeque;
use std::fmt;

use crate::errors::Result;
use crate::{Error, ExhaustionPolicy, RawRecyclePoolBuilder};

/// A single-threaded pool of reusable instances with manual checkout bookkeeping.
///
/// This is the core pool type. It hands out instances by value from
/// [`acquire()`][Self::acquire] and expects each one back through
/// [`release()`][Self::release]. For automatic return-on-drop and sharing across
/// threads, use [`RecyclePool`][crate::RecyclePool] instead.
///
/// The pool is created with a fixed `capacity` and pre-populated with that many
/// instances from its factory. Instances recirculate in FIFO order: a released
/// instance goes to the back of the line and the front of the line is handed out
/// next, so the instance that has been idle longest is always the next one out.
///
/// # Loan accounting
///
/// The pool counts instances currently checked out. A release with no matching
/// acquire is rejected with [`Error::NotCheckedOut`] instead of growing the
/// available list past capacity. The pool does not record the identity of
/// checked-out instances, only their number, so releasing a *different* instance
/// than the one acquired is accepted as long as loans and returns stay balanced.
///
/// # Thread Safety
///
/// This type is thread-mobile ([`Send`] when `T` is) but not thread-safe
/// ([`Sync`]). Wrap it in [`RecyclePool`][crate::RecyclePool] to share it.
///
/// # Example
///
/// ```rust
/// use recycle_pool::RawRecyclePool;
///
/// let mut pool = RawRecyclePool::<Vec<u8>>::with_capacity(2);
///
/// let scratch = pool.acquire().unwrap();
/// assert_eq!(pool.len(), 1);
///
/// pool.release(scratch).unwrap();
/// assert_eq!(pool.len(), 2);
/// ```
pub struct RawRecyclePool<T> {
    /// Intended upper bound on concurrently tracked instances, fixed at creation.
    capacity: usize,

    /// Instances not currently checked out, oldest at the front.
    available: VecDeque<T>,

    /// Number of instances currently checked out. Together with `available.len()`
    /// this describes the whole population the pool knows about.
    on_loan: usize,

    /// Constructs instances for pre-population and for growth on exhaustion.
    make_instance: Box<dyn Fn() -> T + Send>,

    exhaustion_policy: ExhaustionPolicy,
}

impl<T> fmt::Debug for RawRecyclePool<T> {
    #[cfg_attr(test, mutants::skip)] // Debug output is cosmetic, no test asserts on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRecyclePool")
            .field(
                "item_type",
                &std::format_args!("{}", any::type_name::<T>()),
            )
            .field("capacity", &self.capacity)
            .field("available", &self.available.len())
            .field("on_loan", &self.on_loan)
            .field("exhaustion_policy", &self.exhaustion_policy)
            .finish()
    }
}

impl<T> RawRecyclePool<T> {
    /// Creates a pool pre-populated with `capacity` default-constructed instances.
    ///
    /// A capacity of zero is valid: the pool starts empty and every acquire
    /// constructs a fresh instance (under the default exhaustion policy).
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RawRecyclePool;
    ///
    /// let pool = RawRecyclePool::<String>::with_capacity(3);
    /// assert_eq!(pool.len(), 3);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default + 'static,
    {
        Self::new_inner(
            capacity,
            Box::new(T::default),
            ExhaustionPolicy::default(),
        )
    }

    /// Returns a builder for creating a [`RawRecyclePool`] with a custom factory
    /// or exhaustion policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RawRecyclePool;
    ///
    /// let pool = RawRecyclePool::builder()
    ///     .capacity(2)
    ///     .factory(|| Vec::<u8>::with_capacity(4096))
    ///     .build();
    ///
    /// assert_eq!(pool.len(), 2);
    /// ```
    pub fn builder() -> RawRecyclePoolBuilder<T> {
        RawRecyclePoolBuilder::new()
    }

    pub(crate) fn new_inner(
        capacity: usize,
        make_instance: Box<dyn Fn() -> T + Send>,
        exhaustion_policy: ExhaustionPolicy,
    ) -> Self {
        let available = (0..capacity).map(|_| make_instance()).collect();

        Self {
            capacity,
            available,
            on_loan: 0,
            make_instance,
            exhaustion_policy,
        }
    }

    /// Checks out the instance that has been waiting longest, constructing a
    /// fresh one if none is available.
    ///
    /// Under the default [`ExhaustionPolicy::GrowOnDemand`] this never fails and
    /// never blocks; an exhausted pool simply runs its factory again, without
    /// notifying the caller that the capacity bound was exceeded. Under
    /// [`ExhaustionPolicy::EnforceCeiling`] an exhausted pool returns
    /// [`Error::Exhausted`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] when the pool is empty, all `capacity`
    /// instances are on loan, and the exhaustion policy is
    /// [`ExhaustionPolicy::EnforceCeiling`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RawRecyclePool;
    ///
    /// let mut pool = RawRecyclePool::<String>::with_capacity(1);
    ///
    /// let first = pool.acquire().unwrap();
    ///
    /// // The pool is empty but grows on demand by default.
    /// let second = pool.acquire().unwrap();
    /// # drop((first, second));
    /// ```
    pub fn acquire(&mut self) -> Result<T> {
        let instance = if let Some(instance) = self.available.pop_front() {
            instance
        } else {
            match self.exhaustion_policy {
                ExhaustionPolicy::GrowOnDemand => (self.make_instance)(),
                ExhaustionPolicy::EnforceCeiling => {
                    if self.on_loan >= self.capacity {
                        return Err(Error::Exhausted {
                            capacity: self.capacity,
                        });
                    }

                    // The population is below capacity because an instance was
                    // detached earlier, so constructing a replacement stays
                    // within the ceiling.
                    (self.make_instance)()
                }
            }
        };

        // Cannot overflow: that would require more instances concurrently on
        // loan than virtual memory can hold.
        self.on_loan = self.on_loan.wrapping_add(1);

        Ok(instance)
    }

    /// Returns an instance to the pool, making it the last in line for reuse.
    ///
    /// The pool only tracks how many instances are on loan, not which ones, so
    /// any instance of the right type is accepted while a loan is outstanding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotCheckedOut`] when the pool has no outstanding loans.
    /// The pool is left unchanged and the rejected instance is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{Error, RawRecyclePool};
    ///
    /// let mut pool = RawRecyclePool::<String>::with_capacity(1);
    ///
    /// let instance = pool.acquire().unwrap();
    /// pool.release(instance).unwrap();
    ///
    /// // A second release has no matching acquire.
    /// let err = pool.release(String::new()).unwrap_err();
    /// assert!(matches!(err, Error::NotCheckedOut));
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn release(&mut self, instance: T) -> Result<()> {
        if self.on_loan == 0 {
            return Err(Error::NotCheckedOut);
        }

        // Cannot underflow: we just verified at least one loan is outstanding.
        self.on_loan = self.on_loan.wrapping_sub(1);

        self.available.push_back(instance);

        Ok(())
    }

    /// Closes one outstanding loan without returning its instance.
    ///
    /// The caller keeps the instance; the pool stops expecting it back. Under
    /// [`ExhaustionPolicy::EnforceCeiling`] a later acquire may construct a
    /// replacement to bring the population back up to capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotCheckedOut`] when the pool has no outstanding loans.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RawRecyclePool;
    ///
    /// let mut pool = RawRecyclePool::<String>::with_capacity(1);
    ///
    /// let instance = pool.acquire().unwrap();
    /// pool.detach().unwrap();
    ///
    /// // The instance now lives outside the pool entirely.
    /// assert_eq!(pool.on_loan(), 0);
    /// assert_eq!(pool.len(), 0);
    /// # drop(instance);
    /// ```
    pub fn detach(&mut self) -> Result<()> {
        if self.on_loan == 0 {
            return Err(Error::NotCheckedOut);
        }

        // Cannot underflow: we just verified at least one loan is outstanding.
        self.on_loan = self.on_loan.wrapping_sub(1);

        Ok(())
    }

    /// Returns the number of instances currently available for acquiring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Returns whether the pool has no available instances.
    ///
    /// An empty pool is not necessarily exhausted: under the default exhaustion
    /// policy the next acquire constructs a fresh instance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Returns the capacity the pool was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of instances currently checked out.
    #[must_use]
    pub fn on_loan(&self) -> usize {
        self.on_loan
    }

    /// Returns the exhaustion policy the pool was created with.
    #[must_use]
    pub fn exhaustion_policy(&self) -> ExhaustionPolicy {
        self.exhaustion_policy
    }
}

impl<T> Default for RawRecyclePool<T>
where
    T: Default + 'static,
{
    /// Creates an empty pool that constructs every instance on demand.
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
