use std::any;
use std::fmt;
use std::sync::OnceLock;

/// A slot that is initialized at most once and read from any number of threads.
///
/// The slot starts vacant. The first call to
/// [`get_or_publish()`][Self::get_or_publish] (or
/// [`get_or_publish_with()`][Self::get_or_publish_with]) stores its value and
/// every call thereafter, on any thread, returns a reference to that same
/// value. A slot never becomes vacant again short of consuming it by value
/// with [`into_inner()`][Self::into_inner].
///
/// A slot moves through three states: vacant, initializing (one thread is
/// storing its value while any racers wait), and occupied. Occupied is
/// terminal. When several threads race to initialize, exactly one of them
/// performs the store; which one wins is unspecified and can differ from run
/// to run.
///
/// Built on [`std::sync::OnceLock`], which provides the unsynchronized
/// fast-path read and the lock-guarded re-check during initialization, so
/// reads after initialization cost an atomic load and nothing more.
///
/// # Thread Safety
///
/// The slot can be shared across threads whenever `T` can
/// (`T: Send + Sync`). For sharing without borrowing, wrap it in
/// [`SharedSlot`][crate::SharedSlot].
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use once_slot::OnceSlot;
///
/// let slot = OnceSlot::new();
///
/// thread::scope(|s| {
///     // Two threads race; exactly one value is stored.
///     s.spawn(|| slot.get_or_publish(String::from("Foo")));
///     s.spawn(|| slot.get_or_publish(String::from("Bar")));
/// });
///
/// let winner = slot.get().unwrap();
/// assert!(winner == "Foo" || winner == "Bar");
/// ```
pub struct OnceSlot<T> {
    inner: OnceLock<T>,
}

impl<T> fmt::Debug for OnceSlot<T> {
    #[cfg_attr(test, mutants::skip)] // Debug output is cosmetic, no test asserts on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceSlot")
            .field(
                "value_type",
                &std::format_args!("{}", any::type_name::<T>()),
            )
            .field("is_initialized", &self.is_initialized())
            .finish()
    }
}

impl<T> OnceSlot<T> {
    /// Creates a vacant slot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::OnceSlot;
    ///
    /// let slot = OnceSlot::<String>::new();
    /// assert!(!slot.is_initialized());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Creates a slot that is already occupied by `value`.
    ///
    /// There is no initialization race to win: every caller observes `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::OnceSlot;
    ///
    /// let slot = OnceSlot::with_value(42_u32);
    ///
    /// // Publishing cannot displace the existing value.
    /// assert_eq!(*slot.get_or_publish(99), 42);
    /// ```
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            inner: OnceLock::from(value),
        }
    }

    /// Returns the stored value, publishing `value` first if the slot is
    /// vacant.
    ///
    /// If the slot is occupied, including when another thread wins a
    /// concurrent race for a vacant slot, the caller's `value` is discarded
    /// and the existing value is returned. The discard is the contract, not a
    /// failure mode: the slot exists to make every caller agree on one value,
    /// so later arguments intentionally have no effect.
    ///
    /// This call never fails. It only blocks when it arrives while another
    /// thread is mid-initialization; once the slot is occupied it is an
    /// atomic load.
    ///
    /// If constructing the value is itself costly, prefer
    /// [`get_or_publish_with()`][Self::get_or_publish_with], which does not
    /// run the factory of a caller that has already lost.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::OnceSlot;
    ///
    /// let slot = OnceSlot::new();
    ///
    /// assert_eq!(slot.get_or_publish(String::from("Foo")), "Foo");
    ///
    /// // The slot is occupied now; "Bar" is discarded.
    /// assert_eq!(slot.get_or_publish(String::from("Bar")), "Foo");
    /// ```
    pub fn get_or_publish(&self, value: T) -> &T {
        self.inner.get_or_init(|| value)
    }

    /// Returns the stored value, publishing the factory's output first if the
    /// slot is vacant.
    ///
    /// The factory only runs when this call performs the initialization;
    /// callers that find the slot occupied, or lose the race for it, never
    /// run theirs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::OnceSlot;
    ///
    /// let slot = OnceSlot::with_value(1_u32);
    ///
    /// // The factory is not run: the slot is already occupied.
    /// let value = slot.get_or_publish_with(|| unreachable!());
    /// assert_eq!(*value, 1);
    /// ```
    pub fn get_or_publish_with<F>(&self, make_value: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.inner.get_or_init(make_value)
    }

    /// Returns the stored value, or `None` while the slot is vacant or still
    /// being initialized.
    ///
    /// This call never blocks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::OnceSlot;
    ///
    /// let slot = OnceSlot::new();
    /// assert_eq!(slot.get(), None);
    ///
    /// slot.get_or_publish(7_u32);
    /// assert_eq!(slot.get(), Some(&7));
    /// ```
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.inner.get()
    }

    /// Returns whether the slot is occupied.
    ///
    /// This call never blocks. In the presence of concurrent initializers the
    /// answer may be stale by the time the caller acts on it, but it never
    /// moves from `true` back to `false`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Consumes the slot and returns the stored value, or `None` if it was
    /// never initialized.
    ///
    /// Taking the slot by value proves no other thread can be touching it, so
    /// this needs no synchronization.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::OnceSlot;
    ///
    /// let slot = OnceSlot::new();
    /// slot.get_or_publish(String::from("kept"));
    ///
    /// assert_eq!(slot.into_inner(), Some(String::from("kept")));
    /// ```
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for OnceSlot<T> {
    /// Creates a vacant slot.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn first_publish_wins_sequentially() {
        let slot = OnceSlot::new();

        assert_eq!(slot.get_or_publish(String::from("Foo")), "Foo");
        assert_eq!(slot.get_or_publish(String::from("Bar")), "Foo");
        assert_eq!(slot.get(), Some(&String::from("Foo")));
    }

    #[test]
    fn all_callers_observe_the_same_address() {
        let slot = OnceSlot::new();

        let first = slot.get_or_publish(String::from("value"));
        let second = slot.get_or_publish(String::from("other"));

        assert!(ptr::eq(first, second));
    }

    #[test]
    fn vacant_slot_reads_none() {
        let slot = OnceSlot::<String>::new();

        assert_eq!(slot.get(), None);
        assert!(!slot.is_initialized());
    }

    #[test]
    fn with_value_is_occupied_from_the_start() {
        let slot = OnceSlot::with_value(42_u32);

        assert!(slot.is_initialized());
        assert_eq!(slot.get(), Some(&42));
        assert_eq!(*slot.get_or_publish(99), 42);
    }

    #[test]
    fn empty_payload_is_stored_like_any_other() {
        let slot = OnceSlot::new();

        assert_eq!(slot.get_or_publish(String::new()), "");
        assert_eq!(slot.get_or_publish(String::from("late")), "");
    }

    #[test]
    fn losing_factory_is_not_run() {
        let slot = OnceSlot::with_value(1_u32);

        let value = slot.get_or_publish_with(|| panic!("factory must not run"));

        assert_eq!(*value, 1);
    }

    #[test]
    fn into_inner_returns_the_stored_value() {
        let slot = OnceSlot::new();
        slot.get_or_publish(String::from("kept"));

        assert_eq!(slot.into_inner(), Some(String::from("kept")));
    }

    #[test]
    fn into_inner_of_vacant_slot_is_none() {
        let slot = OnceSlot::<String>::new();

        assert_eq!(slot.into_inner(), None);
    }

    #[test]
    fn default_is_vacant() {
        let slot = OnceSlot::<String>::default();

        assert!(!slot.is_initialized());
    }

    #[cfg(test)]
    mod static_assertions {
        use static_assertions::{assert_impl_all, assert_not_impl_any};

        use super::OnceSlot;

        #[test]
        fn thread_safety_assertions() {
            // The slot is as shareable as its payload.
            assert_impl_all!(OnceSlot<String>: Send, Sync);
            assert_not_impl_any!(OnceSlot<std::rc::Rc<String>>: Send, Sync);
        }
    }
}
