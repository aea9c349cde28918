//! # mapops
//!
//! Generic operations over unordered key-value containers.
//!
//! ## Overview
//!
//! The standard library's [`HashMap`](std::collections::HashMap) offers
//! lookups and iteration, but every filter, projection or reduction over it
//! has to be spelled out as a loop. This library provides that vocabulary
//! once, generically over the key type, the value type and the hasher:
//!
//! - **Accessors**: [`maps::get`], [`maps::get_or_else`], [`maps::keys`],
//!   [`maps::values`], [`maps::entries`], [`maps::sample`]
//! - **Membership**: [`maps::contains`], [`maps::count`], [`maps::find`]
//!   and their predicate (`_by`) forms
//! - **Derivation**: [`maps::clean`], [`maps::map`], [`maps::collect`],
//!   [`maps::filter`], [`maps::partition`] and friends
//! - **Reduction**: [`maps::reduce`], [`maps::fold`], [`maps::sum`],
//!   [`maps::max`], [`maps::min`], [`maps::fold_map`]
//! - **Mutation**: [`maps::fill`], [`maps::fill_zero`], [`maps::fill_by`],
//!   [`maps::clear`]
//! - **Construction**: [`maps::from_entries`]
//!
//! Iteration order of a hash map is unspecified, and nothing here fixes it.
//! Combiners handed to [`maps::reduce`], [`maps::fold`] and
//! [`maps::fold_map`] must therefore be order-independent.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`entry::Entry`]
//! - `fxhash`: use `rustc_hash::FxBuildHasher` for [`hashing::Map`]
//! - `ahash`: use `ahash::RandomState` for [`hashing::Map`]
//! - `complex`: [`typeclass::Numeric`] for `num_complex::Complex<T>`
//! - `full`: Enable all optional features except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use mapops::maps;
//!
//! let stock: HashMap<&str, i32> = maps::from_entries([("a", 1), ("b", 0), ("c", 3)]);
//!
//! let in_stock = maps::clean(&stock);
//! assert_eq!(in_stock.len(), 2);
//! assert_eq!(maps::sum(&stock), 4);
//! assert_eq!(maps::max(&stock), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the shared types and type classes. Map operations are kept
/// behind the [`maps`] path since several of them (`map`, `filter`,
/// `clone`) would shadow common names.
///
/// # Usage
///
/// ```rust
/// use mapops::prelude::*;
///
/// let entry = Entry::new("x", 1);
/// assert_eq!(entry.key(), &"x");
/// ```
pub mod prelude {
    pub use crate::entry::*;
    pub use crate::error::*;
    pub use crate::hashing::*;
    pub use crate::typeclass::*;
}

pub mod entry;
pub mod error;
pub mod hashing;
pub mod maps;
pub mod typeclass;
