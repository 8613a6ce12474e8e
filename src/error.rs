//! Error types for bulk insertion.
//!
//! Every error is raised before the target set is touched, so a failed call
//! always leaves the set exactly as it was.

use std::error::Error;
use std::fmt;

/// Errors that can occur when calling the checked bulk insertion entry points.
///
/// [`AddRange::add_range`](crate::AddRange::add_range) itself cannot fail;
/// only [`try_add_range`](crate::try_add_range) and
/// [`add_range_shared`](crate::add_range_shared) report errors.
///
/// # Examples
///
/// ```rust
/// use hashset_ext::AddRangeError;
///
/// let error = AddRangeError::InvalidArgument { parameter: "items" };
/// assert_eq!(
///     format!("{error}"),
///     "invalid argument: `items` must not be absent"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRangeError {
    /// A required argument was absent.
    ///
    /// `parameter` is either `"set"` or `"items"`.
    InvalidArgument {
        /// The name of the absent parameter.
        parameter: &'static str,
    },

    /// A shared argument could not be borrowed because it is already
    /// borrowed elsewhere.
    ///
    /// The target set needs an exclusive borrow and the source needs a
    /// shared one.
    AlreadyBorrowed {
        /// The name of the parameter that could not be borrowed.
        parameter: &'static str,
    },
}

impl AddRangeError {
    /// Returns the name of the parameter the error refers to.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter } | Self::AlreadyBorrowed { parameter } => parameter,
        }
    }
}

impl fmt::Display for AddRangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { parameter } => {
                write!(formatter, "invalid argument: `{parameter}` must not be absent")
            }
            Self::AlreadyBorrowed { parameter } => {
                write!(formatter, "`{parameter}` is already borrowed")
            }
        }
    }
}

impl Error for AddRangeError {}

static_assertions::assert_impl_all!(AddRangeError: Error, Send, Sync, Copy);
