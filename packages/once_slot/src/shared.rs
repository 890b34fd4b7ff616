use std::sync::Arc;

use crate::OnceSlot;

/// A cloneable handle to a shared [`OnceSlot`].
///
/// Cloning the handle does not clone the slot: every clone resolves to the
/// same slot, so whichever handle publishes first decides the value for all
/// of them. This is the form to use when the slot must outlive a borrow, for
/// example when handing it to spawned threads; it makes the shared instance
/// an explicit argument rather than an ambient global.
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use once_slot::SharedSlot;
///
/// let slot = SharedSlot::new();
///
/// let handles: Vec<_> = ["Foo", "Bar"]
///     .into_iter()
///     .map(|name| {
///         let slot = slot.clone();
///         thread::spawn(move || slot.get_or_publish(String::from(name)).clone())
///     })
///     .collect();
///
/// let observed: Vec<String> = handles
///     .into_iter()
///     .map(|handle| handle.join().unwrap())
///     .collect();
///
/// // Both threads observed the same winning value.
/// assert_eq!(observed[0], observed[1]);
/// ```
#[derive(Debug)]
pub struct SharedSlot<T> {
    /// The shared slot instance kept alive by every clone of this handle.
    inner: Arc<OnceSlot<T>>,
}

impl<T> Clone for SharedSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<OnceSlot<T>> for SharedSlot<T> {
    /// Creates a new [`SharedSlot`] from an existing slot.
    ///
    /// The provided slot is consumed and wrapped in reference counting; any
    /// value it already holds is kept.
    fn from(slot: OnceSlot<T>) -> Self {
        Self {
            inner: Arc::new(slot),
        }
    }
}

impl<T> SharedSlot<T> {
    /// Creates a handle to a new vacant slot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use once_slot::SharedSlot;
    ///
    /// let slot = SharedSlot::<String>::new();
    /// assert!(!slot.is_initialized());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from(OnceSlot::new())
    }

    /// Creates a handle to a new slot that is already occupied by `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self::from(OnceSlot::with_value(value))
    }

    /// Returns the stored value, publishing `value` first if the slot is
    /// vacant.
    ///
    /// See [`OnceSlot::get_or_publish()`] for the full contract; the handle
    /// adds nothing but shared ownership.
    pub fn get_or_publish(&self, value: T) -> &T {
        self.inner.get_or_publish(value)
    }

    /// Returns the stored value, publishing the factory's output first if the
    /// slot is vacant.
    ///
    /// See [`OnceSlot::get_or_publish_with()`] for the full contract.
    pub fn get_or_publish_with<F>(&self, make_value: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.inner.get_or_publish_with(make_value)
    }

    /// Returns the stored value, or `None` while the slot is vacant or still
    /// being initialized.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.inner.get()
    }

    /// Returns whether the slot is occupied.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }
}

impl<T> Default for SharedSlot<T> {
    /// Creates a handle to a new vacant slot.
    fn default() -> Self {
        Self::new()
    }
}
