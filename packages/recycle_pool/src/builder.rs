use std::any;
use std::fmt;

use crate::{ExhaustionPolicy, RawRecyclePool, RecyclePool};

/// Builder for creating an instance of [`RecyclePool`].
///
/// This is the thread-safe counterpart of
/// [`RawRecyclePoolBuilder`][crate::RawRecyclePoolBuilder] and takes the same
/// settings; `T` must additionally be [`Send`] because the built pool hands
/// instances across threads.
///
/// # Examples
///
/// ```
/// use recycle_pool::{ExhaustionPolicy, RecyclePool};
///
/// let pool = RecyclePool::builder()
///     .capacity(8)
///     .factory(|| Vec::<u8>::with_capacity(4096))
///     .exhaustion_policy(ExhaustionPolicy::EnforceCeiling)
///     .build();
/// ```
#[must_use]
pub struct RecyclePoolBuilder<T> {
    capacity: usize,
    exhaustion_policy: ExhaustionPolicy,
    make_instance: Option<Box<dyn Fn() -> T + Send>>,
}

impl<T> fmt::Debug for RecyclePoolBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclePoolBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", any::type_name::<T>()),
            )
            .field("capacity", &self.capacity)
            .field("exhaustion_policy", &self.exhaustion_policy)
            .field("has_factory", &self.make_instance.is_some())
            .finish()
    }
}

impl<T> RecyclePoolBuilder<T>
where
    T: Send,
{
    pub(crate) fn new() -> Self {
        Self {
            capacity: 0,
            exhaustion_policy: ExhaustionPolicy::default(),
            make_instance: None,
        }
    }

    /// Sets the number of instances the pool is pre-populated with, which is
    /// also the ceiling enforced under [`ExhaustionPolicy::EnforceCeiling`].
    ///
    /// Defaults to zero: a pool that starts empty and constructs every
    /// instance on demand.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the factory the pool uses to construct instances, both for
    /// pre-population and for growth on exhaustion.
    pub fn factory<F>(mut self, make_instance: F) -> Self
    where
        F: Fn() -> T + Send + 'static,
    {
        self.make_instance = Some(Box::new(make_instance));
        self
    }

    /// Uses [`Default`] as the factory.
    pub fn factory_default(mut self) -> Self
    where
        T: Default + 'static,
    {
        self.make_instance = Some(Box::new(T::default));
        self
    }

    /// Sets the [exhaustion policy][ExhaustionPolicy] for the pool. This
    /// governs what `acquire` does when no instance is available.
    pub fn exhaustion_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration, running the factory
    /// once per unit of capacity to pre-populate it.
    ///
    /// # Panics
    ///
    /// Panics if no factory has been set using either
    /// [`factory`](Self::factory) or [`factory_default`](Self::factory_default).
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool = RecyclePool::builder()
    ///     .capacity(4)
    ///     .factory(|| 0_u64)
    ///     .build();
    ///
    /// assert_eq!(pool.len(), 4);
    /// ```
    #[must_use]
    pub fn build(self) -> RecyclePool<T> {
        let make_instance = self.make_instance.expect(
            "a factory must be set using .factory() or .factory_default() before calling .build()",
        );

        RecyclePool::from(RawRecyclePool::new_inner(
            self.capacity,
            make_instance,
            self.exhaustion_policy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    // Test trait implementations.
    assert_impl_all!(RecyclePoolBuilder<String>: Send, std::fmt::Debug);
    assert_not_impl_any!(RecyclePoolBuilder<String>: Sync);

    #[test]
    fn built_pool_reflects_settings() {
        let pool = RecyclePoolBuilder::<String>::new()
            .capacity(3)
            .factory_default()
            .build();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    #[should_panic]
    fn build_without_factory_panics() {
        let _pool = RecyclePoolBuilder::<String>::new().build();
    }
}
