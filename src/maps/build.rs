//! Building a map from a sequence of entries.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::entry::Entry;

/// Builds a new map from `entries`.
///
/// Items may be [`Entry`] values or plain `(key, value)` tuples. When a key
/// occurs more than once, the value from its last occurrence wins; this is
/// the one operation in the library whose result depends on input order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::entry::Entry;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("x", 1), ("y", 2), ("x", 5)]);
/// assert_eq!(map, HashMap::from([("x", 5), ("y", 2)]));
///
/// let map: HashMap<&str, i32> = maps::from_entries(vec![Entry::new("z", 0)]);
/// assert_eq!(map["z"], 0);
/// ```
pub fn from_entries<K, V, S, I>(entries: I) -> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
    I: IntoIterator,
    I::Item: Into<Entry<K, V>>,
{
    let entries = entries.into_iter();
    let (lower_bound, _) = entries.size_hint();
    let mut result = HashMap::with_capacity_and_hasher(lower_bound, S::default());
    let mut overwritten = 0_usize;

    for entry in entries {
        let entry: Entry<K, V> = entry.into();
        let (key, value) = entry.into_parts();
        if result.insert(key, value).is_some() {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        log::trace!(
            "from_entries: {overwritten} duplicate key(s) replaced, {} entries kept",
            result.len()
        );
    }
    result
}
