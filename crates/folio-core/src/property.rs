//! Values that know when they change.
//!
//! Owners write through [`Property::set`] and emit their notify signal only
//! when it returns `true`:
//!
//! ```
//! use folio_core::Property;
//!
//! let loading = Property::new(false);
//! assert!(loading.set(true));
//! assert!(!loading.set(true));
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A lock-guarded value with change detection on write.
pub struct Property<T> {
    cell: RwLock<T>,
}

impl<T> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: RwLock::new(value),
        }
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.read())
    }

    /// Overwrite the value without comparing.
    pub fn set_silent(&self, value: T) {
        *self.cell.write() = value;
    }
}

impl<T: Clone> Property<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T: PartialEq> Property<T> {
    /// Store `value`; `true` if it differs from the old one.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Store `value` and hand back the old one, or `None` if nothing changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut cell = self.cell.write();
        (*cell != value).then(|| std::mem::replace(&mut *cell, value))
    }
}

impl<T: Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Property").field(value).finish())
    }
}

/// Shared access to a property whose setter stays private to its owner.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T> ReadOnlyProperty<'a, T> {
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }
}

impl<T: Clone> ReadOnlyProperty<'_, T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_detects_change() {
        let page = Property::new(1usize);

        assert!(!page.set(1));
        assert!(page.set(4));
        assert_eq!(page.get(), 4);
    }

    #[test]
    fn test_replace_returns_previous() {
        let label = Property::new(String::from("Showing 1 to 12"));

        assert!(label.replace(String::from("Showing 1 to 12")).is_none());
        assert_eq!(
            label.replace(String::from("Showing 13 to 24")).as_deref(),
            Some("Showing 1 to 12")
        );
    }

    #[test]
    fn test_set_silent_and_with() {
        let ids = Property::new(vec![1u64, 2, 3]);
        ids.set_silent(vec![4, 5]);

        assert_eq!(ids.with(|v| v.iter().sum::<u64>()), 9);
        assert_eq!(format!("{ids:?}"), "Property([4, 5])");
    }

    #[test]
    fn test_read_only_view_tracks_writes() {
        let loading = Property::new(false);
        let view = ReadOnlyProperty::new(&loading);

        loading.set(true);
        assert!(view.get());
        assert!(view.with(|v| *v));
    }
}
