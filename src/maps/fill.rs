//! In-place mutation.
//!
//! These are the only operations that change their argument. The fill
//! family overwrites values without touching the key set; [`clear`]
//! removes every entry but keeps the map (and its allocation).

use std::collections::HashMap;

/// Sets every existing key's value to a copy of `value`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let mut map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// maps::fill(&mut map, 7);
/// assert_eq!(map, maps::from_entries([("a", 7), ("b", 7)]));
/// ```
pub fn fill<K, V: Clone, S>(target: &mut HashMap<K, V, S>, value: V) {
    for slot in target.values_mut() {
        slot.clone_from(&value);
    }
}

/// Sets every existing key's value to `V::default()`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let mut map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// maps::fill_zero(&mut map);
/// assert_eq!(map, maps::from_entries([("a", 0), ("b", 0)]));
/// ```
pub fn fill_zero<K, V: Default, S>(target: &mut HashMap<K, V, S>) {
    for slot in target.values_mut() {
        *slot = V::default();
    }
}

/// Sets every existing key's value to `function(key)`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let mut map: HashMap<&str, usize> = maps::from_entries([("a", 0), ("abc", 0)]);
/// maps::fill_by(&mut map, |key| key.len());
/// assert_eq!(map["abc"], 3);
/// ```
pub fn fill_by<K, V, S, F>(target: &mut HashMap<K, V, S>, mut function: F)
where
    F: FnMut(&K) -> V,
{
    for (key, slot) in target.iter_mut() {
        *slot = function(key);
    }
}

/// Removes every entry, leaving the same map empty.
pub fn clear<K, V, S>(target: &mut HashMap<K, V, S>) {
    target.clear();
}
