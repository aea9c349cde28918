//! Key-value pairs.
//!
//! This module provides [`Entry`], the immutable `(key, value)` pair used as
//! the result shape of searches such as [`maps::find_by`](crate::maps::find_by)
//! and as the input shape of [`maps::from_entries`](crate::maps::from_entries).
//!
//! # Examples
//!
//! ```rust
//! use mapops::entry::Entry;
//!
//! let entry = Entry::new("answer", 42);
//! assert_eq!(entry.key(), &"answer");
//! assert_eq!(entry.value(), &42);
//!
//! let (key, value) = entry.into_parts();
//! assert_eq!((key, value), ("answer", 42));
//! ```

use std::fmt;

/// An immutable key-value pair.
///
/// The fields can only be read. To change either half, take the entry apart
/// with [`Entry::into_parts`] and build a new one.
///
/// Lookups over a borrowed map return `Entry<&K, &V>`; use
/// [`Entry::cloned`] to detach such an entry from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapops::entry::Entry;
    ///
    /// let entry = Entry::new(1, "one");
    /// assert_eq!(entry.value(), &"one");
    /// ```
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry and returns its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Borrows both halves of the entry.
    #[inline]
    pub const fn as_borrowed(&self) -> Entry<&K, &V> {
        Entry::new(&self.key, &self.value)
    }
}

impl<K: Clone, V: Clone> Entry<&K, &V> {
    /// Clones the borrowed key and value into an owned entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use mapops::entry::Entry;
    /// use mapops::maps;
    ///
    /// let map: HashMap<String, i32> = maps::from_entries([("a".to_string(), 1)]);
    /// let found = maps::find(&map, &1).map(Entry::cloned);
    /// assert_eq!(found, Some(Entry::new("a".to_string(), 1)));
    /// ```
    pub fn cloned(self) -> Entry<K, V> {
        Entry::new(self.key.clone(), self.value.clone())
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.key, self.value)
    }
}

static_assertions::assert_impl_all!(Entry<String, i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Entry<std::rc::Rc<i32>, i32>: Send, Sync);
