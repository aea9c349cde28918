//! Reductions of a map to a single value.
//!
//! Traversal order is unspecified, so every combiner here has to be
//! order-independent for the result to be well defined. That is a contract
//! on the caller; it is not checked.
//!
//! Reductions over an empty map return the zero value (`Default::default()`)
//! of the result type, except [`fold`], which returns its seed.

use std::collections::HashMap;

use crate::typeclass::{Monoid, Numeric, Ordered};

/// Combines all values, seeding the accumulator with the first value in
/// iteration order.
///
/// `function` is called once for each of the remaining entries. An empty
/// map yields `V::default()`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 2), ("b", 3), ("c", 4)]);
/// assert_eq!(maps::reduce(&map, |product, _, value| product * value), 24);
///
/// let empty: HashMap<&str, i32> = HashMap::new();
/// assert_eq!(maps::reduce(&empty, |product, _, value| product * value), 0);
/// ```
pub fn reduce<K, V, S, F>(source: &HashMap<K, V, S>, mut function: F) -> V
where
    V: Clone + Default,
    F: FnMut(V, &K, &V) -> V,
{
    let mut iterator = source.iter();
    match iterator.next() {
        Some((_, first)) => iterator.fold(first.clone(), |accumulator, (key, value)| {
            function(accumulator, key, value)
        }),
        None => V::default(),
    }
}

/// Combines all entries into `seed`. An empty map yields `seed` unchanged.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("ab", 1), ("cde", 2)]);
/// let key_length = maps::fold(&map, 0, |total, key, _| total + key.len());
/// assert_eq!(key_length, 5);
/// ```
pub fn fold<K, V, S, B, F>(source: &HashMap<K, V, S>, seed: B, mut function: F) -> B
where
    F: FnMut(B, &K, &V) -> B,
{
    source
        .iter()
        .fold(seed, |accumulator, (key, value)| {
            function(accumulator, key, value)
        })
}

/// Maps every entry to a [`Monoid`] and combines the results, starting
/// from [`Monoid::empty`].
///
/// The monoid must be commutative for the result not to depend on
/// iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
/// use mapops::typeclass::{Max, Sum};
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 5), ("c", 3)]);
///
/// let total: Sum<i32> = maps::fold_map(&map, |_, value| Sum(*value));
/// assert_eq!(total, Sum(9));
///
/// let largest: Option<Max<i32>> = maps::fold_map(&map, |_, value| Some(Max(*value)));
/// assert_eq!(largest, Some(Max(5)));
/// ```
pub fn fold_map<K, V, S, M, F>(source: &HashMap<K, V, S>, mut function: F) -> M
where
    M: Monoid,
    F: FnMut(&K, &V) -> M,
{
    fold(source, M::empty(), |accumulator, key, value| {
        accumulator.combine(function(key, value))
    })
}

/// Returns the sum of all values; zero for an empty map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 0), ("c", 3)]);
/// assert_eq!(maps::sum(&map), 4);
/// ```
pub fn sum<K, V: Numeric, S>(source: &HashMap<K, V, S>) -> V {
    reduce(source, |total, _, value| total + value.clone())
}

/// Returns the sum of `function` over all entries; zero for an empty map.
pub fn sum_by<K, V, S, N, F>(source: &HashMap<K, V, S>, mut function: F) -> N
where
    N: Numeric,
    F: FnMut(&K, &V) -> N,
{
    fold(source, N::default(), |total, key, value| {
        total + function(key, value)
    })
}

fn keep_larger<N: Ordered>(best: N, candidate: N) -> N {
    if best < candidate { candidate } else { best }
}

fn keep_smaller<N: Ordered>(best: N, candidate: N) -> N {
    if best > candidate { candidate } else { best }
}

/// Returns the largest value; zero for an empty map.
///
/// When several values compare equal, the first one encountered is kept.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 0), ("c", 3)]);
/// assert_eq!(maps::max(&map), 3);
/// ```
pub fn max<K, V, S>(source: &HashMap<K, V, S>) -> V
where
    V: Ordered + Clone + Default,
{
    reduce(source, |best, _, value| keep_larger(best, value.clone()))
}

/// Returns the largest result of `function` over all entries; zero for an
/// empty map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("apple", 1), ("fig", 9)]);
/// assert_eq!(maps::max_by(&map, |key, _| key.len()), 5);
/// ```
pub fn max_by<K, V, S, N, F>(source: &HashMap<K, V, S>, mut function: F) -> N
where
    N: Ordered + Default,
    F: FnMut(&K, &V) -> N,
{
    source
        .iter()
        .map(|(key, value)| function(key, value))
        .reduce(keep_larger)
        .unwrap_or_default()
}

/// Returns the smallest value; zero for an empty map.
///
/// When several values compare equal, the first one encountered is kept.
pub fn min<K, V, S>(source: &HashMap<K, V, S>) -> V
where
    V: Ordered + Clone + Default,
{
    reduce(source, |best, _, value| keep_smaller(best, value.clone()))
}

/// Returns the smallest result of `function` over all entries; zero for an
/// empty map.
pub fn min_by<K, V, S, N, F>(source: &HashMap<K, V, S>, mut function: F) -> N
where
    N: Ordered + Default,
    F: FnMut(&K, &V) -> N,
{
    source
        .iter()
        .map(|(key, value)| function(key, value))
        .reduce(keep_smaller)
        .unwrap_or_default()
}
