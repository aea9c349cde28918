//! Operations over unordered hash maps.
//!
//! Every function in this module takes a [`HashMap`](std::collections::HashMap)
//! with any key type `K: Eq + Hash`, any value type and any hasher `S`.
//! They fall into six families:
//!
//! | Family      | Functions                                                                 |
//! |-------------|---------------------------------------------------------------------------|
//! | Access      | [`get`], [`get_or_else`], [`keys`], [`values`], [`entries`], [`sample`]   |
//! | Search      | [`contains`], [`contains_by`], [`count`], [`count_by`], [`find`], [`find_by`] |
//! | Transform   | [`clone`], [`clean`], [`map`], [`collect`], [`filter`], [`filter_by`], [`filter_not`], [`filter_not_by`], [`partition`], [`partition_by`] |
//! | Reduce      | [`reduce`], [`fold`], [`fold_map`], [`sum`], [`sum_by`], [`max`], [`max_by`], [`min`], [`min_by`] |
//! | Fill        | [`fill`], [`fill_zero`], [`fill_by`], [`clear`]                           |
//! | Build       | [`from_entries`]                                                          |
//!
//! # Ownership
//!
//! Reading and deriving functions borrow the source map. Deriving functions
//! allocate a new map that uses a clone of the source's hasher builder, so
//! the source is never aliased or modified. Only the fill family and
//! [`clear`] take `&mut` and change the map in place; they never change its
//! key set (other than `clear` removing every key).
//!
//! # Iteration order
//!
//! Hash map iteration order is unspecified, and these functions make no
//! attempt to fix it. [`reduce`] seeds its accumulator with whichever value
//! comes first, and [`sample`] indexes into the current order. Combiners
//! passed to [`reduce`], [`fold`] and [`fold_map`] must be
//! order-independent (associative and commutative); with any other combiner
//! the result depends on the order and is not detected as an error.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use mapops::maps;
//!
//! let scores: HashMap<&str, i32> = maps::from_entries([
//!     ("alice", 7),
//!     ("bob", 0),
//!     ("carol", 12),
//! ]);
//!
//! let (passed, failed) = maps::partition_by(&scores, |_, score| *score >= 5);
//! assert_eq!(passed.len(), 2);
//! assert_eq!(failed.len(), 1);
//!
//! let doubled = maps::map(&passed, |_, score| score * 2);
//! assert_eq!(maps::sum(&doubled), 38);
//! ```

mod access;
mod build;
mod fill;
mod reduce;
mod search;
mod transform;

pub use access::{entries, get, get_or_else, keys, sample, values};
pub use build::from_entries;
pub use fill::{clear, fill, fill_by, fill_zero};
pub use reduce::{fold, fold_map, max, max_by, min, min_by, reduce, sum, sum_by};
pub use search::{contains, contains_by, count, count_by, find, find_by};
pub use transform::{
    clean, clone, collect, filter, filter_by, filter_not, filter_not_by, map, partition,
    partition_by,
};
