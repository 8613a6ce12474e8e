//! # hashset-ext
//!
//! Bulk insertion into hash sets, with fast paths for sources of known
//! shape and capacity pre-reservation.
//!
//! ## Overview
//!
//! The standard library's `Extend` reserves from a size hint and treats every
//! source alike. This crate provides a single operation, `add_range`, that
//! chooses its strategy from the static shape of the source:
//!
//! - **Arrays and lists**: empty input returns at once; otherwise the set
//!   reserves room for every element before inserting
//! - **Counted collections**: other sets and exact-size iterators reserve
//!   when their count is positive
//! - **Plain iterators**: inserted one by one
//!
//! The result never depends on the path taken: the set ends up holding the
//! union of its previous contents and the distinct elements of the source.
//!
//! ## Feature Flags
//!
//! - `hashbrown`: `hashbrown::HashSet` as a target and as a source
//! - `ahash`: `ahash::AHashSet` as a target
//! - `fxhash`: re-exports `rustc_hash::FxHashSet` from the prelude
//! - `smallvec`: `smallvec::SmallVec` as a source
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use hashset_ext::prelude::*;
//!
//! let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! set.add_range([3, 4, 5]);
//! set.add_range(sequence((6..9).filter(|value| value % 2 == 0)));
//!
//! let expected: HashSet<i32> = [1, 2, 3, 4, 5, 6, 8].into_iter().collect();
//! assert_eq!(set, expected);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension trait, the capability traits, and the checked
/// entry points.
///
/// # Usage
///
/// ```rust
/// use hashset_ext::prelude::*;
/// ```
pub mod prelude {
    pub use crate::add_range::{AddRange, add_range_shared, try_add_range};
    pub use crate::error::AddRangeError;
    pub use crate::source::{Sequence, Shape, Source, sequence};
    pub use crate::target::ReservableSet;

    #[cfg(feature = "fxhash")]
    pub use rustc_hash::FxHashSet;

    #[cfg(feature = "ahash")]
    pub use ahash::AHashSet;
}

pub mod add_range;
pub mod error;
pub mod source;
pub mod target;

pub use add_range::{AddRange, add_range_shared, try_add_range};
pub use error::AddRangeError;
pub use source::{Sequence, Shape, Source, sequence};
pub use target::ReservableSet;
