//! Hasher selection.
//!
//! Every operation in [`maps`](crate::maps) is generic over the map's
//! [`BuildHasher`](std::hash::BuildHasher), so any hashing strategy works.
//! This module only picks a default for callers who want one chosen by
//! feature flag:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher` (fast, not DoS-resistant)
//! - `ahash`: `ahash::RandomState`
//! - neither: `std::collections::hash_map::RandomState`
//!
//! When both flags are enabled, `fxhash` wins.
//!
//! # Examples
//!
//! ```rust
//! use mapops::hashing::Map;
//! use mapops::maps;
//!
//! let map: Map<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
//! assert_eq!(maps::sum(&map), 3);
//! ```

use std::collections::HashMap;

/// The hasher builder selected by the enabled feature flags.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher builder selected by the enabled feature flags.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher builder selected by the enabled feature flags.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// A [`HashMap`] using [`DefaultHashBuilder`].
pub type Map<K, V> = HashMap<K, V, DefaultHashBuilder>;

/// Creates an empty [`Map`] with room for at least `capacity` entries.
///
/// # Examples
///
/// ```rust
/// use mapops::hashing::with_capacity;
///
/// let map = with_capacity::<String, i32>(16);
/// assert!(map.is_empty());
/// assert!(map.capacity() >= 16);
/// ```
pub fn with_capacity<K, V>(capacity: usize) -> Map<K, V> {
    HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_with_capacity_is_empty() {
        let map: Map<i32, i32> = with_capacity(8);
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_same_key_hashes_consistently_within_one_map() {
        let mut map: Map<String, i32> = with_capacity(4);
        map.insert("key".to_string(), 1);
        map.insert("key".to_string(), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key"), Some(&2));
    }
}
