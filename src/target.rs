//! Mutable set targets for bulk insertion.
//!
//! This module provides [`ReservableSet`], the small capability contract a
//! container has to satisfy to receive [`add_range`](crate::AddRange::add_range):
//! report its length, insert with set semantics, and optionally reserve room
//! for more elements.
//!
//! # Implementations
//!
//! | Container                         | Feature     | `reserve`    |
//! |-----------------------------------|-------------|--------------|
//! | `std::collections::HashSet<T, S>` | always      | forwarded    |
//! | `std::collections::BTreeSet<T>`   | always      | no-op        |
//! | `hashbrown::HashSet<T, S>`        | `hashbrown` | forwarded    |
//! | `ahash::AHashSet<T, S>`           | `ahash`     | forwarded    |
//!
//! The `std` implementation is generic over the hasher, so
//! `rustc_hash::FxHashSet` and `HashSet<T, ahash::RandomState>` need no
//! separate implementation.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A mutable container with set semantics that can pre-allocate capacity.
///
/// Inserting an element that is already present must leave the container
/// unchanged. [`reserve`](Self::reserve) is a hint: it must never change the
/// logical contents, and containers without a reservation primitive may
/// ignore it.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use hashset_ext::ReservableSet;
///
/// let mut set: HashSet<i32> = HashSet::new();
/// ReservableSet::reserve(&mut set, 16);
/// assert!(set.capacity() >= 16);
///
/// assert!(ReservableSet::insert(&mut set, 1));
/// assert!(!ReservableSet::insert(&mut set, 1));
/// assert_eq!(ReservableSet::len(&set), 1);
/// ```
pub trait ReservableSet<T> {
    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element.
    ///
    /// Returns `true` if the element was newly inserted, `false` if it was
    /// already present.
    fn insert(&mut self, element: T) -> bool;

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// After the call the set can hold `len() + additional` elements
    /// without growing.
    fn reserve(&mut self, additional: usize);
}

impl<T: Eq + Hash, S: BuildHasher> ReservableSet<T> for HashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }
}

impl<T: Ord> ReservableSet<T> for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    /// B-trees allocate node by node; there is nothing to reserve.
    #[inline]
    fn reserve(&mut self, _additional: usize) {}
}

#[cfg(feature = "hashbrown")]
impl<T: Eq + Hash, S: BuildHasher> ReservableSet<T> for hashbrown::HashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }
}

#[cfg(feature = "ahash")]
impl<T: Eq + Hash, S: BuildHasher> ReservableSet<T> for ahash::AHashSet<T, S> {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        (**self).insert(element)
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional);
    }
}

// =============================================================================
// Tests
// =============================================================================
