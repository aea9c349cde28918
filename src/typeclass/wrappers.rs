//! Newtype wrappers selecting an algebraic operation.
//!
//! The same value type can be combined in more than one way. These wrappers
//! pick one, so the value can be used where a [`Semigroup`](super::Semigroup)
//! or [`Monoid`](super::Monoid) is expected:
//!
//! - [`Sum`]: addition, identity `0` (a monoid for every [`Numeric`](super::Numeric))
//! - [`Max`]: the larger value (a semigroup for every [`Ordered`](super::Ordered))
//! - [`Min`]: the smaller value (a semigroup for every [`Ordered`](super::Ordered))
//!
//! `Max` and `Min` have no identity element in general. Wrap them in
//! `Option` to get a monoid whose identity is `None`.

/// Addition as a monoid.
///
/// # Examples
///
/// ```rust
/// use mapops::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Maximum as a semigroup.
///
/// When both sides compare equal the left one is kept.
///
/// # Examples
///
/// ```rust
/// use mapops::typeclass::{Max, Semigroup};
///
/// assert_eq!(Max(3).combine(Max(5)), Max(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max<A>(pub A);

/// Minimum as a semigroup.
///
/// When both sides compare equal the left one is kept.
///
/// # Examples
///
/// ```rust
/// use mapops::typeclass::{Min, Semigroup};
///
/// assert_eq!(Min(3).combine(Min(5)), Min(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min<A>(pub A);

macro_rules! impl_wrapper {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            #[inline]
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

impl_wrapper!(Sum);
impl_wrapper!(Max);
impl_wrapper!(Min);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_and_into_inner() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(Max::new('z').into_inner(), 'z');
        assert_eq!(Min::new("a").into_inner(), "a");
    }

    #[rstest]
    fn test_from_value() {
        let sum: Sum<u8> = 9.into();
        assert_eq!(sum, Sum(9));
    }
}
