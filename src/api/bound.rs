//! The inclusive maximum of the elements of an `IntegerSet`.
//!
//! #   Design
//!
//! A `Bound` is a plain configuration value. The process-wide bound, consulted by `IntegerSet` on insertion, is held
//! in an atomic: every operation loads it once at its entry point, and validates all its elements against that
//! snapshot.
//!
//! Lowering the bound does not remove the elements already in a set, but membership and removal only consider the
//! elements within `0..=maximum`: elements above a lowered maximum are treated as absent, until it is raised again.
//! Enumeration and the bulk operations between two `IntegerSet` still see them.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::{
    api::{BitKey, BoundError, DomainError},
    utils::BitChunkRaw,
};

//  Relaxed is sufficient: the bound does not guard any other memory.
static MAXIMUM: AtomicU64 = AtomicU64::new(Bound::DEFAULT_MAXIMUM);

/// The inclusive maximum of the elements of an `IntegerSet`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct Bound {
    maximum: u64,
}

//
//  Creation
//

impl Bound {
    /// The maximum in effect until `set_current` is called.
    pub const DEFAULT_MAXIMUM: u64 = 1_048_576;

    /// The default bound.
    pub const DEFAULT: Self = Self {
        maximum: Self::DEFAULT_MAXIMUM,
    };

    /// The largest maximum, beyond which keys could no longer be addressed in memory.
    ///
    /// This is `u64::MAX` on 64-bits platforms.
    pub const LIMIT: u64 = match (isize::MAX as u64 + 1).checked_mul(BitChunkRaw::BITS) {
        Some(bits) => bits - 1,
        None => u64::MAX,
    };

    /// Creates a bound.
    ///
    /// Returns an error if `maximum` is 0, or greater than `Self::LIMIT`.
    pub const fn new(maximum: u64) -> Result<Self, BoundError> {
        if maximum == 0 || maximum > Self::LIMIT {
            return Err(BoundError);
        }

        Ok(Self { maximum })
    }

    /// Returns the process-wide bound.
    #[inline]
    pub fn current() -> Self {
        Self {
            maximum: MAXIMUM.load(Ordering::Relaxed),
        }
    }

    /// Sets the process-wide bound, returning the previous one.
    ///
    /// Returns an error, and leaves the process-wide bound unchanged, if `maximum` is 0, or greater than `Self::LIMIT`.
    ///
    /// #   Examples
    ///
    /// ```
    /// use integer_set::api::Bound;
    ///
    /// assert!(Bound::set_current(0).is_err());
    /// assert_eq!(Bound::DEFAULT_MAXIMUM, Bound::current().maximum());
    /// ```
    pub fn set_current(maximum: u64) -> Result<Self, BoundError> {
        let bound = Self::new(maximum)?;

        let previous = MAXIMUM.swap(bound.maximum, Ordering::Relaxed);

        tracing::debug!(previous, maximum, "IntegerSet maximum updated");

        Ok(Self { maximum: previous })
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//
//  Validation
//

impl Bound {
    /// Returns the inclusive maximum.
    #[inline]
    pub const fn maximum(&self) -> u64 {
        self.maximum
    }

    /// Returns whether `value` is within `0..=maximum`.
    #[inline]
    pub const fn is_valid(&self, value: i128) -> bool {
        0 <= value && value <= self.maximum as i128
    }

    /// Returns the key of `element`, if it is an integer within `0..=maximum`.
    ///
    /// #   Examples
    ///
    /// ```
    /// use integer_set::api::{Bound, DomainError};
    ///
    /// let bound = Bound::new(10).expect("non-zero");
    ///
    /// assert_eq!(Ok(10), bound.validate(10));
    /// assert_eq!(Err(DomainError::OutOfRange { value: 11, maximum: 10 }), bound.validate(11));
    /// assert_eq!(Err(DomainError::OutOfRange { value: -1, maximum: 10 }), bound.validate(-1));
    /// ```
    #[inline]
    pub fn validate<T>(&self, element: T) -> Result<u64, DomainError>
    where
        T: BitKey,
    {
        self.check(element.to_integer())
    }

    /// Returns the key of `integer`, if it is an integer within `0..=maximum`.
    ///
    /// `None` stands for an element which is not an integer.
    pub fn check(&self, integer: Option<i128>) -> Result<u64, DomainError> {
        let Some(value) = integer else {
            tracing::debug!("rejected non-integer element");

            return Err(DomainError::NotAnInteger);
        };

        if !self.is_valid(value) {
            tracing::debug!(value, maximum = self.maximum, "rejected out of range element");

            return Err(DomainError::OutOfRange {
                value,
                maximum: self.maximum,
            });
        }

        Ok(value as u64)
    }

    /// Returns the key of `integer`, if it is an integer within `0..=maximum`.
    ///
    /// Unlike `check`, a rejected element is not an error, merely skipped.
    #[inline]
    pub fn accept(&self, integer: Option<i128>) -> Option<u64> {
        integer.filter(|value| self.is_valid(*value)).map(|value| value as u64)
    }
}

//
//  Conversions
//

impl TryFrom<u64> for Bound {
    type Error = BoundError;

    fn try_from(maximum: u64) -> Result<Self, BoundError> {
        Self::new(maximum)
    }
}

impl From<Bound> for u64 {
    fn from(bound: Bound) -> u64 {
        bound.maximum
    }
}

// mod bound_tests
