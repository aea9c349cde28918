//! Membership tests, counting and searching.
//!
//! `contains*` and `find*` stop at the first match; `count*` always visit
//! every entry.

use std::collections::HashMap;

use crate::entry::Entry;

/// Returns `true` if any key maps to a value equal to `value`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// assert!(maps::contains(&map, &2));
/// assert!(!maps::contains(&map, &3));
/// ```
pub fn contains<K, V: PartialEq, S>(source: &HashMap<K, V, S>, value: &V) -> bool {
    source.values().any(|stored| stored == value)
}

/// Returns `true` if any entry satisfies `predicate`.
pub fn contains_by<K, V, S, P>(source: &HashMap<K, V, S>, mut predicate: P) -> bool
where
    P: FnMut(&K, &V) -> bool,
{
    source.iter().any(|(key, value)| predicate(key, value))
}

/// Returns the number of values equal to `value`.
pub fn count<K, V: PartialEq, S>(source: &HashMap<K, V, S>, value: &V) -> usize {
    source.values().filter(|stored| *stored == value).count()
}

/// Returns the number of entries satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2), ("c", 3)]);
/// assert_eq!(maps::count_by(&map, |_, value| value % 2 == 1), 2);
/// ```
pub fn count_by<K, V, S, P>(source: &HashMap<K, V, S>, mut predicate: P) -> usize
where
    P: FnMut(&K, &V) -> bool,
{
    source
        .iter()
        .filter(|(key, value)| predicate(key, value))
        .count()
}

/// Returns an entry whose value equals `value`, or `None`.
///
/// If several keys hold the value, which one is returned is unspecified.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapops::maps;
///
/// let map: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 2)]);
/// let entry = maps::find(&map, &2).unwrap();
/// assert_eq!(entry.key(), &&"b");
/// assert!(maps::find(&map, &3).is_none());
/// ```
pub fn find<'a, K, V: PartialEq, S>(
    source: &'a HashMap<K, V, S>,
    value: &V,
) -> Option<Entry<&'a K, &'a V>> {
    source
        .iter()
        .find(|(_, stored)| *stored == value)
        .map(Entry::from)
}

/// Returns an entry satisfying `predicate`, or `None`.
///
/// If several entries match, which one is returned is unspecified.
pub fn find_by<K, V, S, P>(
    source: &HashMap<K, V, S>,
    mut predicate: P,
) -> Option<Entry<&K, &V>>
where
    P: FnMut(&K, &V) -> bool,
{
    source
        .iter()
        .find(|(key, value)| predicate(key, value))
        .map(Entry::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fixture() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 0), ("c", 3), ("d", 3)])
    }

    #[rstest]
    #[case(3, true, 2)]
    #[case(0, true, 1)]
    #[case(9, false, 0)]
    fn test_contains_and_count(
        #[case] value: i32,
        #[case] expected_contains: bool,
        #[case] expected_count: usize,
    ) {
        let map = fixture();
        assert_eq!(contains(&map, &value), expected_contains);
        assert_eq!(count(&map, &value), expected_count);
    }

    #[rstest]
    fn test_contains_by_sees_keys() {
        let map = fixture();
        assert!(contains_by(&map, |key, _| *key == "d"));
        assert!(!contains_by(&map, |key, value| *key == "a" && *value == 3));
    }

    #[rstest]
    fn test_contains_by_short_circuits() {
        let map = fixture();
        let mut calls = 0;
        assert!(contains_by(&map, |_, _| {
            calls += 1;
            true
        }));
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_count_by_visits_every_entry() {
        let map = fixture();
        let mut calls = 0;
        let matched = count_by(&map, |_, value| {
            calls += 1;
            *value > 0
        });
        assert_eq!(matched, 3);
        assert_eq!(calls, map.len());
    }

    #[rstest]
    fn test_find_returns_matching_entry() {
        let map = fixture();
        let entry = find(&map, &3).unwrap();
        assert!(**entry.key() == "c" || **entry.key() == "d");
        assert_eq!(entry.value(), &&3);
    }

    #[rstest]
    fn test_find_by_on_key() {
        let map = fixture();
        let entry = find_by(&map, |key, _| *key == "b").map(Entry::cloned);
        assert_eq!(entry, Some(Entry::new("b", 0)));
        assert!(find_by(&map, |_, value| *value < 0).is_none());
    }
}
