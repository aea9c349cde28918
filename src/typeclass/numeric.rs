//! Value capabilities for summation and comparison.
//!
//! Reductions such as [`maps::sum`](crate::maps::sum) and
//! [`maps::max`](crate::maps::max) only make sense for some value types.
//! Rather than checking at runtime, they are bounded by the marker traits in
//! this module, so a call on an unsupported value type fails to compile.
//!
//! - [`Numeric`]: values that can be added and have a zero (`Default`)
//! - [`Ordered`]: values that can be compared with `<` and `>`
//!
//! With the `complex` feature, `num_complex::Complex<T>` is [`Numeric`] as
//! well; it is not [`Ordered`].
//!
//! # Implementing for custom types
//!
//! ```rust
//! use std::ops::Add;
//! use mapops::typeclass::Numeric;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Default)]
//! struct Meters(f64);
//!
//! impl Add for Meters {
//!     type Output = Self;
//!     fn add(self, other: Self) -> Self {
//!         Self(self.0 + other.0)
//!     }
//! }
//!
//! impl Numeric for Meters {}
//! ```

use std::num::Wrapping;
use std::ops::Add;
use std::time::Duration;

/// A value type that supports addition and has an additive zero.
///
/// `Default::default()` must be the additive identity:
/// `Self::default() + x == x` for all `x`.
pub trait Numeric: Add<Output = Self> + Default + Clone {}

/// A value type with a total order over the values it is used with.
///
/// Floating point types are included; maps holding `NaN` produce
/// unspecified `max`/`min` results, since `NaN` is unordered.
pub trait Ordered: PartialOrd {}

macro_rules! impl_numeric {
    ($($numeric_type:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric_type {}
        )*
    };
}

macro_rules! impl_ordered {
    ($($ordered_type:ty),* $(,)?) => {
        $(
            impl Ordered for $ordered_type {}
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Duration,
);

impl<T> Numeric for Wrapping<T> where Self: Add<Output = Self> + Default + Clone {}

#[cfg(feature = "complex")]
impl<T> Numeric for num_complex::Complex<T> where Self: Add<Output = Self> + Default + Clone {}

impl_ordered!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool,
    String, Duration,
);

impl Ordered for &str {}

impl<T: Ordered> Ordered for Wrapping<T> {}

static_assertions::assert_impl_all!(i32: Numeric, Ordered);
static_assertions::assert_impl_all!(f64: Numeric, Ordered);
static_assertions::assert_impl_all!(Wrapping<u8>: Numeric, Ordered);
static_assertions::assert_impl_all!(String: Ordered);
static_assertions::assert_not_impl_any!(String: Numeric);
static_assertions::assert_not_impl_any!(Vec<i32>: Numeric, Ordered);
#[cfg(feature = "complex")]
static_assertions::assert_impl_all!(num_complex::Complex64: Numeric);
#[cfg(feature = "complex")]
static_assertions::assert_not_impl_any!(num_complex::Complex64: Ordered);
