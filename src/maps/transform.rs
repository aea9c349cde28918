//! Operations deriving a new map from an existing one.
//!
//! The source is only borrowed. Every result is freshly allocated and uses
//! a clone of the source's hasher builder.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Allocates an empty map sharing the hashing strategy of `source`.
fn empty_like<K, V, W, S>(source: &HashMap<K, V, S>, capacity: usize) -> HashMap<K, W, S>
where
    S: BuildHasher + Clone,
{
    HashMap::with_capacity_and_hasher(capacity, source.hasher().clone())
}

/// Copies the entries of `source` selected by `keep` into a new map.
fn retain_copy<K, V, S, P>(source: &HashMap<K, V, S>, mut keep: P) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    P: FnMut(&K, &V) -> bool,
{
    let mut result = empty_like(source, source.len());
    for (key, value) in source {
        if keep(key, value) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Splits `source` into the entries selected by `matches` and the rest.
fn split<K, V, S, P>(
    source: &HashMap<K, V, S>,
    mut matches: P,
) -> (HashMap<K, V, S>, HashMap<K, V, S>)
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    P: FnMut(&K, &V) -> bool,
{
    let half = source.len() / 2;
    let mut matching = empty_like(source, half);
    let mut rest = empty_like(source, half);
    for (key, value) in source {
        let target = if matches(key, value) {
            &mut matching
        } else {
            &mut rest
        };
        target.insert(key.clone(), value.clone());
    }
    (matching, rest)
}

/// Returns an independent copy of `source`.
///
/// Values are copied with `V::clone`; whether that is a deep copy is up to
/// the value type (an `Rc<T>` value, for instance, still shares its `T`).
pub fn clone<K, V, S>(source: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    source.clone()
}

/// Returns the entries whose value is not the zero value `V::default()`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 0), ("c", 3)]);
/// let expected: HashMap<&str, i32> = maps::from_entries([("a", 1), ("c", 3)]);
/// assert_eq!(maps::clean(&map), expected);
/// ```
pub fn clean<K, V, S>(source: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + Default + PartialEq,
    S: BuildHasher + Clone,
{
    let zero = V::default();
    retain_copy(source, |_, value| *value != zero)
}

/// Transforms every value with `function`, keeping the key set unchanged.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// let labels = maps::map(&map, |key, value| format!("{key}={value}"));
/// assert_eq!(labels["b"], "b=2");
/// ```
pub fn map<K, V, W, S, F>(source: &HashMap<K, V, S>, mut function: F) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&K, &V) -> W,
{
    let mut result = empty_like(source, source.len());
    for (key, value) in source {
        result.insert(key.clone(), function(key, value));
    }
    result
}

/// Transforms and filters in one pass.
///
/// An entry is kept, with the transformed value, when `function` returns
/// `Some`; `None` drops it.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, &str> = maps::from_entries([("a", "1"), ("b", "x")]);
/// let parsed = maps::collect(&map, |_, text| text.parse::<i32>().ok());
/// assert_eq!(parsed.len(), 1);
/// assert_eq!(parsed["a"], 1);
/// ```
pub fn collect<K, V, W, S, F>(source: &HashMap<K, V, S>, mut function: F) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&K, &V) -> Option<W>,
{
    let mut result = empty_like(source, source.len());
    for (key, value) in source {
        if let Some(transformed) = function(key, value) {
            result.insert(key.clone(), transformed);
        }
    }
    result
}

/// Returns the entries whose value equals `value`.
pub fn filter<K, V, S>(source: &HashMap<K, V, S>, value: &V) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
    S: BuildHasher + Clone,
{
    retain_copy(source, |_, stored| stored == value)
}

/// Returns the entries satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 0), ("c", 3)]);
/// let positive = maps::filter_by(&map, |_, value| *value > 0);
/// assert_eq!(positive, maps::from_entries([("a", 1), ("c", 3)]));
/// ```
pub fn filter_by<K, V, S, P>(source: &HashMap<K, V, S>, predicate: P) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    P: FnMut(&K, &V) -> bool,
{
    retain_copy(source, predicate)
}

/// Returns the entries whose value differs from `value`.
pub fn filter_not<K, V, S>(source: &HashMap<K, V, S>, value: &V) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
    S: BuildHasher + Clone,
{
    retain_copy(source, |_, stored| stored != value)
}

/// Returns the entries not satisfying `predicate`.
pub fn filter_not_by<K, V, S, P>(source: &HashMap<K, V, S>, mut predicate: P) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    P: FnMut(&K, &V) -> bool,
{
    retain_copy(source, |key, value| !predicate(key, value))
}

/// Splits the map into the entries whose value equals `value` and the rest.
///
/// The two key sets are disjoint and together equal the source's key set.
pub fn partition<K, V, S>(
    source: &HashMap<K, V, S>,
    value: &V,
) -> (HashMap<K, V, S>, HashMap<K, V, S>)
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
    S: BuildHasher + Clone,
{
    split(source, |_, stored| stored == value)
}

/// Splits the map into the entries satisfying `predicate` and the rest.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", -2), ("c", 3)]);
/// let (positive, negative) = maps::partition_by(&map, |_, value| *value > 0);
/// assert_eq!(positive.len(), 2);
/// assert_eq!(negative["b"], -2);
/// ```
pub fn partition_by<K, V, S, P>(
    source: &HashMap<K, V, S>,
    predicate: P,
) -> (HashMap<K, V, S>, HashMap<K, V, S>)
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    P: FnMut(&K, &V) -> bool,
{
    split(source, predicate)
}
