//! Bulk insertion into sets.
//!
//! This module provides the [`AddRange`] extension trait, implemented for
//! every [`ReservableSet`], together with two checked entry points:
//!
//! - [`try_add_range`]: accepts possibly absent arguments and rejects them
//!   before touching the set
//! - [`add_range_shared`]: works on sets behind `RefCell` (and `Rc<RefCell<_>>`),
//!   where the target and the source may be the very same instance
//!
//! # Algorithm
//!
//! 1. Probe the [`Shape`] of the source (never enumerates it).
//! 2. Arrays and lists: return at once when empty, otherwise reserve room
//!    for all of their elements.
//! 3. Counted sources: reserve room when the count is positive.
//! 4. Insert every element. Duplicates are absorbed by the set.
//!
//! Reservation only affects performance. The resulting set is always the
//! same as inserting the elements one at a time.
//!
//! # Aliasing
//!
//! A set cannot be extended from itself through plain references; the
//! borrow checker rejects it:
//!
//! ```compile_fail
//! use std::collections::HashSet;
//! use hashset_ext::AddRange;
//!
//! let mut set: HashSet<i32> = [1, 2].into_iter().collect();
//! set.add_range(&set);
//! ```
//!
//! With shared ownership the aliasing is only visible at run time, so
//! [`add_range_shared`] detects it and does nothing:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::collections::HashSet;
//! use std::rc::Rc;
//! use hashset_ext::add_range_shared;
//!
//! let set = Rc::new(RefCell::new(HashSet::from([1, 2])));
//! let alias = Rc::clone(&set);
//!
//! add_range_shared(&set, &alias).unwrap();
//! assert_eq!(set.borrow().len(), 2);
//! ```

use std::cell::RefCell;
use std::ptr;

use crate::error::AddRangeError;
use crate::source::{Shape, Source};
use crate::target::ReservableSet;

// =============================================================================
// AddRange Definition
// =============================================================================

/// Bulk insertion for mutable sets.
///
/// Implemented for every [`ReservableSet`], so bringing the trait into scope
/// is enough to call `add_range` on a `HashSet`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use hashset_ext::AddRange;
///
/// let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// set.add_range([3, 4, 5]);
///
/// let expected: HashSet<i32> = (1..=5).collect();
/// assert_eq!(set, expected);
/// ```
pub trait AddRange<T> {
    /// Inserts every element of `items` into the set.
    ///
    /// Elements already present are left as they are. The source is
    /// consumed exactly once; a borrowed source is only read.
    ///
    /// # Complexity
    ///
    /// O(n) amortized, with at most one reservation for sources of known
    /// length.
    fn add_range<I: Source<T>>(&mut self, items: I);
}

impl<T, S: ReservableSet<T> + ?Sized> AddRange<T> for S {
    fn add_range<I: Source<T>>(&mut self, items: I) {
        let shape = items.shape();
        log::trace!("add_range: shape={shape:?} set_len={}", self.len());

        match shape {
            Shape::Array { len: 0 } | Shape::List { len: 0 } => return,
            Shape::Array { len } | Shape::List { len } | Shape::Counted { count: len } => {
                if len > 0 {
                    self.reserve(len);
                }
            }
            Shape::Unknown => {}
        }

        for element in items.into_elements() {
            self.insert(element);
        }
    }
}

// =============================================================================
// Checked Entry Points
// =============================================================================

/// Inserts every element of `items` into `set`, rejecting absent arguments.
///
/// Both arguments are validated before the set is touched, `set` first.
///
/// # Errors
///
/// - [`AddRangeError::InvalidArgument`] with `parameter: "set"` if `set` is `None`
/// - [`AddRangeError::InvalidArgument`] with `parameter: "items"` if `items` is `None`
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use hashset_ext::{AddRangeError, try_add_range};
///
/// let mut set: HashSet<&str> = HashSet::from(["a"]);
///
/// try_add_range(Some(&mut set), Some(vec!["a", "b", "a"])).unwrap();
/// assert_eq!(set, HashSet::from(["a", "b"]));
///
/// let error = try_add_range(Some(&mut set), None::<Vec<&str>>).unwrap_err();
/// assert_eq!(error, AddRangeError::InvalidArgument { parameter: "items" });
/// assert_eq!(set.len(), 2);
/// ```
pub fn try_add_range<T, S, I>(set: Option<&mut S>, items: Option<I>) -> Result<(), AddRangeError>
where
    S: ReservableSet<T> + ?Sized,
    I: Source<T>,
{
    let Some(set) = set else {
        return Err(rejected(AddRangeError::InvalidArgument { parameter: "set" }));
    };
    let Some(items) = items else {
        return Err(rejected(AddRangeError::InvalidArgument { parameter: "items" }));
    };

    set.add_range(items);
    Ok(())
}

/// Inserts every element of the set in `items` into the set in `set`.
///
/// If both cells are the same instance the call returns `Ok(())` at once,
/// without borrowing either cell and without iterating.
///
/// Otherwise `set` is borrowed mutably and `items` immutably for the
/// duration of the call.
///
/// # Errors
///
/// - [`AddRangeError::AlreadyBorrowed`] with `parameter: "set"` if `set` is
///   currently borrowed
/// - [`AddRangeError::AlreadyBorrowed`] with `parameter: "items"` if `items`
///   is currently borrowed mutably
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::collections::HashSet;
/// use hashset_ext::add_range_shared;
///
/// let target = RefCell::new(HashSet::from([1, 2]));
/// let source = RefCell::new(vec![2, 3]);
///
/// add_range_shared(&target, &source).unwrap();
/// assert_eq!(*target.borrow(), HashSet::from([1, 2, 3]));
/// ```
pub fn add_range_shared<T, S, U>(set: &RefCell<S>, items: &RefCell<U>) -> Result<(), AddRangeError>
where
    S: ReservableSet<T> + ?Sized,
    U: ?Sized,
    for<'a> &'a U: Source<T>,
{
    if ptr::addr_eq(set.as_ptr(), items.as_ptr()) {
        log::debug!("add_range_shared: set and items are the same instance, nothing to do");
        return Ok(());
    }

    let mut target = set
        .try_borrow_mut()
        .map_err(|_| rejected(AddRangeError::AlreadyBorrowed { parameter: "set" }))?;
    let source = items
        .try_borrow()
        .map_err(|_| rejected(AddRangeError::AlreadyBorrowed { parameter: "items" }))?;

    AddRange::<T>::add_range(&mut *target, &*source);
    Ok(())
}

fn rejected(error: AddRangeError) -> AddRangeError {
    log::debug!("add_range rejected: {error}");
    error
}

// =============================================================================
// Tests
// =============================================================================
