//! Source sequences for bulk insertion.
//!
//! This module provides [`Source`], implemented by every sequence that can
//! feed [`add_range`](crate::AddRange::add_range), and [`Shape`], which
//! describes the most capable length and indexing guarantee a source offers.
//!
//! # Shapes
//!
//! | Shape               | Sources                                              |
//! |---------------------|------------------------------------------------------|
//! | [`Shape::Array`]    | `[T; N]`, `&[T; N]`, `&[T]`, `Box<[T]>`              |
//! | [`Shape::List`]     | `Vec<T>`, `&Vec<T>`, `VecDeque<T>`, `&VecDeque<T>`   |
//! | [`Shape::Counted`]  | `HashSet`, `BTreeSet`, exact-size [`Sequence`]s      |
//! | [`Shape::Unknown`]  | any other [`Sequence`]                               |
//!
//! The shape of a source is decided by its type, so the choice of fast path
//! is made at compile time. Borrowed sources clone their elements; owned
//! sources move them.
//!
//! Plain iterators are wrapped with [`sequence`] to become a source:
//!
//! ```rust
//! use hashset_ext::{Shape, Source, sequence};
//!
//! let exact = sequence(0..4);
//! assert_eq!(exact.shape(), Shape::Counted { count: 4 });
//!
//! let filtered = sequence((0..4).filter(|value| value % 2 == 0));
//! assert_eq!(filtered.shape(), Shape::Unknown);
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque, btree_set, hash_set, vec_deque};
use std::iter::{Cloned, FusedIterator};
use std::slice;

// =============================================================================
// Shape
// =============================================================================

/// The length and indexing capability of a [`Source`].
///
/// Shapes are ordered from most to least capable. Only `Array` and `List`
/// sources take the early return on empty input; `Counted` sources reserve
/// only when the count is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A fixed-size, indexable sequence.
    Array {
        /// Number of elements.
        len: usize,
    },
    /// A dynamically sized, indexable sequence.
    List {
        /// Number of elements.
        len: usize,
    },
    /// A sequence whose length is known without enumerating it.
    Counted {
        /// Number of elements the sequence will yield.
        count: usize,
    },
    /// A sequence whose length is only known after enumerating it.
    Unknown,
}

impl Shape {
    /// Returns the number of elements if the shape knows it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_ext::Shape;
    ///
    /// assert_eq!(Shape::List { len: 3 }.known_len(), Some(3));
    /// assert_eq!(Shape::Unknown.known_len(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn known_len(&self) -> Option<usize> {
        match *self {
            Self::Array { len } | Self::List { len } => Some(len),
            Self::Counted { count } => Some(count),
            Self::Unknown => None,
        }
    }

    /// Returns `true` for array and list shapes.
    #[inline]
    #[must_use]
    pub const fn is_indexable(&self) -> bool {
        matches!(self, Self::Array { .. } | Self::List { .. })
    }

    /// Derives a shape from an iterator's size hint.
    ///
    /// An exact hint (equal lower and upper bounds) becomes
    /// [`Shape::Counted`]; anything else is [`Shape::Unknown`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashset_ext::Shape;
    ///
    /// assert_eq!(Shape::from_size_hint((5, Some(5))), Shape::Counted { count: 5 });
    /// assert_eq!(Shape::from_size_hint((0, Some(5))), Shape::Unknown);
    /// assert_eq!(Shape::from_size_hint((2, None)), Shape::Unknown);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_size_hint(size_hint: (usize, Option<usize>)) -> Self {
        match size_hint {
            (lower, Some(upper)) if lower == upper => Self::Counted { count: lower },
            _ => Self::Unknown,
        }
    }
}

// =============================================================================
// Source Definition
// =============================================================================

/// A sequence that can be bulk-inserted into a set.
///
/// [`shape`](Self::shape) must be cheap and must not consume anything. The
/// iterator returned by [`into_elements`](Self::into_elements) must yield
/// exactly as many elements as a known shape claims.
///
/// # Examples
///
/// ```rust
/// use hashset_ext::{Shape, Source};
///
/// let values = vec![1, 2, 3];
/// assert_eq!((&values).shape(), Shape::List { len: 3 });
///
/// let collected: Vec<i32> = (&values).into_elements().collect();
/// assert_eq!(collected, values);
/// ```
pub trait Source<T>: Sized {
    /// The iterator that yields the source's elements.
    type Elements: Iterator<Item = T>;

    /// Probes the shape of the source without enumerating it.
    fn shape(&self) -> Shape;

    /// Consumes the source and returns its elements.
    fn into_elements(self) -> Self::Elements;
}

// =============================================================================
// Array Shapes
// =============================================================================

impl<T, const N: usize> Source<T> for [T; N] {
    type Elements = std::array::IntoIter<T, N>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array { len: N }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone, const N: usize> Source<T> for &'a [T; N] {
    type Elements = Cloned<slice::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array { len: N }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

impl<'a, T: Clone> Source<T> for &'a [T] {
    type Elements = Cloned<slice::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

impl<T> Source<T> for Box<[T]> {
    type Elements = std::vec::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_vec().into_iter()
    }
}

// =============================================================================
// List Shapes
// =============================================================================

impl<T> Source<T> for Vec<T> {
    type Elements = std::vec::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::List { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone> Source<T> for &'a Vec<T> {
    type Elements = Cloned<slice::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::List { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

impl<T> Source<T> for VecDeque<T> {
    type Elements = vec_deque::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::List { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone> Source<T> for &'a VecDeque<T> {
    type Elements = Cloned<vec_deque::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::List { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Source<A::Item> for smallvec::SmallVec<A> {
    type Elements = smallvec::IntoIter<A>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::List { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

#[cfg(feature = "smallvec")]
impl<'a, A: smallvec::Array> Source<A::Item> for &'a smallvec::SmallVec<A>
where
    A::Item: Clone,
{
    type Elements = Cloned<slice::Iter<'a, A::Item>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::List { len: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

// =============================================================================
// Counted Shapes
// =============================================================================

impl<T, S> Source<T> for HashSet<T, S> {
    type Elements = hash_set::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Counted { count: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone, S> Source<T> for &'a HashSet<T, S> {
    type Elements = Cloned<hash_set::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Counted { count: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

impl<T> Source<T> for BTreeSet<T> {
    type Elements = btree_set::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Counted { count: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone> Source<T> for &'a BTreeSet<T> {
    type Elements = Cloned<btree_set::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Counted { count: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

#[cfg(feature = "hashbrown")]
impl<T, S> Source<T> for hashbrown::HashSet<T, S> {
    type Elements = hashbrown::hash_set::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Counted { count: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

#[cfg(feature = "hashbrown")]
impl<'a, T: Clone, S> Source<T> for &'a hashbrown::HashSet<T, S> {
    type Elements = Cloned<hashbrown::hash_set::Iter<'a, T>>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Counted { count: self.len() }
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// A plain iterator used as a [`Source`].
///
/// The shape is taken from the iterator's [`size_hint`](Iterator::size_hint):
/// exact hints give [`Shape::Counted`], the rest [`Shape::Unknown`]. The
/// iterator is driven exactly once, to completion.
///
/// Created by [`sequence`].
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use hashset_ext::{AddRange, sequence};
///
/// let mut set: HashSet<u32> = HashSet::new();
/// set.add_range(sequence((1..=10).map(|value| value * value)));
/// assert!(set.contains(&100));
/// ```
#[derive(Debug, Clone)]
#[must_use = "a sequence does nothing until it is passed to add_range"]
pub struct Sequence<I> {
    iterator: I,
}

impl<I> Sequence<I> {
    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iterator
    }
}

impl<I: Iterator> Source<I::Item> for Sequence<I> {
    type Elements = I;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::from_size_hint(self.iterator.size_hint())
    }

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.iterator
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Sequence<I> {}

/// Wraps any iterable as a [`Source`].
///
/// # Examples
///
/// ```rust
/// use hashset_ext::{Shape, Source, sequence};
///
/// let words = sequence("a b a".split(' '));
/// assert_eq!(words.shape(), Shape::Unknown);
/// ```
#[inline]
pub fn sequence<I: IntoIterator>(items: I) -> Sequence<I::IntoIter> {
    Sequence {
        iterator: items.into_iter(),
    }
}

// =============================================================================
// Tests
// =============================================================================
