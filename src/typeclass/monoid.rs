//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T` (in addition to the Semigroup laws):
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! The identity is what lets [`maps::fold_map`](crate::maps::fold_map)
//! return a value for an empty map.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::numeric::Numeric;
use super::semigroup::Semigroup;
use super::wrappers::Sum;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use mapops::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapops::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all([Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all([]), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<K, V, S> Monoid for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Semigroup,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::default()
    }
}

impl<A: Numeric> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

static_assertions::assert_not_impl_any!((): Semigroup, Monoid);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Max;
    use rstest::rstest;

    #[rstest]
    fn test_sum_identity() {
        assert_eq!(Sum::empty().combine(Sum(5)), Sum(5));
        assert_eq!(Sum(5).combine(Sum::empty()), Sum(5));
    }

    #[rstest]
    fn test_option_max_identity_is_none() {
        let empty: Option<Max<i32>> = Monoid::empty();
        assert_eq!(empty, None);
        assert_eq!(empty.combine(Some(Max(3))), Some(Max(3)));
    }

    #[rstest]
    fn test_hashmap_empty() {
        let map: HashMap<String, Vec<i32>> = Monoid::empty();
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_combine_all_strings() {
        let parts = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::combine_all(parts), "abc");
    }
}
