//! Lookups, snapshots and random sampling.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use rand::Rng;

use crate::entry::Entry;
use crate::error::MapOpsError;

/// Returns the value stored under `key`, or `None` if the key is absent.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<String, i32> = maps::from_entries([("a".to_string(), 1)]);
/// assert_eq!(maps::get(&map, "a"), Some(&1));
/// assert_eq!(maps::get(&map, "b"), None);
/// ```
#[inline]
pub fn get<'a, K, V, S, Q>(source: &'a HashMap<K, V, S>, key: &Q) -> Option<&'a V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    source.get(key)
}

/// Returns a copy of the value stored under `key`, or `default` if the key
/// is absent. The map is not modified.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1)]);
/// assert_eq!(maps::get_or_else(&map, "a", 0), 1);
/// assert_eq!(maps::get_or_else(&map, "b", 0), 0);
/// assert!(!map.contains_key("b"));
/// ```
pub fn get_or_else<K, V, S, Q>(source: &HashMap<K, V, S>, key: &Q, default: V) -> V
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    source.get(key).cloned().unwrap_or(default)
}

/// Returns a snapshot of the keys, in unspecified order.
pub fn keys<K: Clone, V, S>(source: &HashMap<K, V, S>) -> Vec<K> {
    source.keys().cloned().collect()
}

/// Returns a snapshot of the values, in unspecified order.
pub fn values<K, V: Clone, S>(source: &HashMap<K, V, S>) -> Vec<V> {
    source.values().cloned().collect()
}

/// Returns a snapshot of the entries, one per key, in unspecified order.
///
/// Feeding the result to [`from_entries`](super::from_entries) rebuilds an
/// equal map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// let rebuilt: HashMap<&str, i32> = maps::from_entries(maps::entries(&map));
/// assert_eq!(rebuilt, map);
/// ```
pub fn entries<K: Clone, V: Clone, S>(source: &HashMap<K, V, S>) -> Vec<Entry<K, V>> {
    source
        .iter()
        .map(|(key, value)| Entry::new(key.clone(), value.clone()))
        .collect()
}

/// Returns the value of one key chosen uniformly at random.
///
/// An index is drawn from `[0, len)` with `random` and the value at that
/// position of the map's current iteration order is returned. Given a
/// uniform source, every key is equally likely.
///
/// # Errors
///
/// Returns [`MapOpsError::EmptyContainer`] if the map is empty.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// let mut random = StdRng::seed_from_u64(7);
///
/// let value = maps::sample(&map, &mut random).unwrap();
/// assert!(*value == 1 || *value == 2);
///
/// let empty: HashMap<&str, i32> = HashMap::new();
/// assert!(maps::sample(&empty, &mut random).is_err());
/// ```
pub fn sample<'a, K, V, S, R>(
    source: &'a HashMap<K, V, S>,
    random: &mut R,
) -> Result<&'a V, MapOpsError>
where
    R: Rng + ?Sized,
{
    const OPERATION: &str = "sample";

    if source.is_empty() {
        log::debug!("{OPERATION}: refused on an empty map");
        return Err(MapOpsError::EmptyContainer {
            operation: OPERATION,
        });
    }

    let index = random.random_range(0..source.len());
    log::trace!("{OPERATION}: drew index {index} of {}", source.len());

    // `index < len` here, so `nth` always yields a value.
    source
        .values()
        .nth(index)
        .ok_or_else(|| MapOpsError::EmptyContainer {
            operation: OPERATION,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn fixture() -> HashMap<String, i32> {
        HashMap::from([
            ("a".to_string(), 1),
            ("b".to_string(), 0),
            ("c".to_string(), 3),
        ])
    }

    #[rstest]
    #[case("a", Some(1))]
    #[case("b", Some(0))]
    #[case("z", None)]
    fn test_get(#[case] key: &str, #[case] expected: Option<i32>) {
        let map = fixture();
        assert_eq!(get(&map, key).copied(), expected);
    }

    #[rstest]
    fn test_get_or_else_does_not_insert() {
        let map = fixture();
        assert_eq!(get_or_else(&map, "z", -1), -1);
        assert_eq!(map.len(), 3);
    }

    #[rstest]
    fn test_snapshots_have_one_item_per_key() {
        let map = fixture();

        let mut key_list = keys(&map);
        key_list.sort();
        assert_eq!(key_list, vec!["a", "b", "c"]);

        let mut value_list = values(&map);
        value_list.sort_unstable();
        assert_eq!(value_list, vec![0, 1, 3]);

        assert_eq!(entries(&map).len(), 3);
    }

    #[rstest]
    fn test_snapshots_are_independent_of_later_mutation() {
        let mut map = fixture();
        let before = keys(&map);
        map.insert("d".to_string(), 4);
        assert_eq!(before.len(), 3);
        assert_eq!(keys(&map).len(), 4);
    }

    #[rstest]
    fn test_sample_returns_a_stored_value() {
        let map = fixture();
        let mut random = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let value = sample(&map, &mut random).unwrap();
            assert!(map.values().any(|stored| stored == value));
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    fn test_sample_never_fails_on_non_empty_map(#[case] size: i32) {
        let map: HashMap<i32, i32> = (0..size).map(|key| (key, key * 10)).collect();
        for seed in 0..64 {
            let mut random = StdRng::seed_from_u64(seed);
            let value = sample(&map, &mut random);
            assert!(matches!(value, Ok(stored) if stored % 10 == 0 && *stored < size * 10));
        }
    }

    #[rstest]
    fn test_sample_on_empty_map_is_an_error() {
        let map: HashMap<String, i32> = HashMap::new();
        let mut random = StdRng::seed_from_u64(42);
        assert_eq!(
            sample(&map, &mut random),
            Err(MapOpsError::EmptyContainer { operation: "sample" })
        );
    }
}
