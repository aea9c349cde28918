//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity alone is not enough to make a reduction over a hash map
//! deterministic. [`maps::fold_map`](crate::maps::fold_map) also needs the
//! operation to be commutative, since entries arrive in unspecified order.
//! `Sum`, `Max`, `Min` and the `HashMap` instance (for commutative values)
//! are; `String` and `Vec` concatenation are not.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::numeric::{Numeric, Ordered};
use super::wrappers::{Max, Min, Sum};

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use mapops::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator, or returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapops::typeclass::{Max, Semigroup};
    ///
    /// assert_eq!(Max::reduce_all([Max(2), Max(9), Max(4)]), Some(Max(9)));
    /// assert_eq!(Max::<i32>::reduce_all([]), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is ignored; two `Some` values are combined.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// Key-wise union. Values present under the same key on both sides are
/// combined, left value first.
impl<K, V, S> Semigroup for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Semigroup,
    S: BuildHasher,
{
    fn combine(mut self, other: Self) -> Self {
        self.reserve(other.len());
        for (key, value) in other {
            let combined = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, combined);
        }
        self
    }
}

impl<A: Numeric> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Ordered> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ordered> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}
