/// Determines what [`acquire`][crate::RawRecyclePool::acquire] does when no
/// instance is available.
///
/// By default the pool constructs a fresh instance through its factory, so
/// acquiring never fails and never blocks, at the cost of letting the live
/// instance count exceed the configured capacity under load.
///
/// # Examples
///
/// ```
/// use recycle_pool::{ExhaustionPolicy, RawRecyclePool};
///
/// // The exhaustion policy is set at pool creation time.
/// let pool = RawRecyclePool::<String>::builder()
///     .capacity(4)
///     .factory_default()
///     .exhaustion_policy(ExhaustionPolicy::EnforceCeiling)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ExhaustionPolicy {
    /// The pool constructs a fresh instance when none is available. This is the default.
    ///
    /// Instances constructed this way are indistinguishable from pre-populated ones;
    /// once released they recirculate like any other. The number of instances alive
    /// at once is then bounded only by demand, not by the configured capacity.
    #[default]
    GrowOnDemand,

    /// The pool rejects the acquire with
    /// [`Error::Exhausted`][crate::Error::Exhausted] when all `capacity`
    /// instances are checked out.
    ///
    /// The rejection is immediate. Callers that want to wait for an instance to
    /// come back must retry on their own schedule; the pool never parks a thread.
    EnforceCeiling,
}
