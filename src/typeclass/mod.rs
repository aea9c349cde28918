//! Type classes for map values.
//!
//! - [`Numeric`] and [`Ordered`]: capabilities required by the summation
//!   and comparison reductions in [`maps`](crate::maps)
//! - [`Semigroup`] and [`Monoid`]: associative combination, used by
//!   [`maps::fold_map`](crate::maps::fold_map)
//! - [`Sum`], [`Max`], [`Min`]: wrappers choosing how a value combines
//!
//! # Examples
//!
//! ```rust
//! use mapops::typeclass::{Monoid, Semigroup, Sum};
//!
//! let total = Sum(1).combine(Sum(2)).combine(Sum::empty());
//! assert_eq!(total, Sum(3));
//! ```

mod monoid;
mod numeric;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use numeric::{Numeric, Ordered};
pub use semigroup::Semigroup;
pub use wrappers::{Max, Min, Sum};
