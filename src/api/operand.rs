//! The right-hand side of the operations of an `IntegerSet`.
//!
//! #   Design
//!
//! `IntegerSet` operations behave differently depending on the kind of their operand: another `IntegerSet` is
//! combined chunk by chunk, a range is combined in closed form, a foreign set may be coerced, and anything else is
//! processed element by element. `Operand` closes over those kinds, and is matched once per operation.
//!
//! `Operand` is built through `From` conversions, which fix the type of foreign set `G` from the source type, so
//! that callers may simply pass `&set`, `&hash_set`, `1..=100`, or `&[1, 2, 3][..]`.

use core::{
    fmt,
    ops::{Range, RangeInclusive},
};
use std::collections::{BTreeSet, HashSet};

use crate::{
    api::{BitKey, Bound, DomainError},
    collections::IntegerSet,
};

/// The right-hand side of the operations of an `IntegerSet`.
pub enum Operand<'a, G = IntegerSet> {
    /// Another `IntegerSet`.
    Integer(&'a IntegerSet),
    /// A foreign set, which may or may not hold only valid integers.
    Set(&'a G),
    /// A range of integers.
    Range(KeyRange),
    /// A sequence of elements, without set capability.
    Sequence(Sequence<'a>),
}

impl<'a, G> Operand<'a, G> {
    /// Creates a sequence operand, from any iterable of keys.
    pub fn sequence<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: BitKey + 'a,
    {
        Self::Sequence(Sequence::new(elements))
    }

    /// Returns a short, human-readable, name of the kind of operand.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "IntegerSet",
            Self::Set(_) => "set",
            Self::Range(_) => "range",
            Self::Sequence(_) => "sequence",
        }
    }
}

impl<G> fmt::Debug for Operand<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(set) => f.debug_tuple("Integer").field(set).finish(),
            Self::Set(_) => f.debug_tuple("Set").finish_non_exhaustive(),
            Self::Range(range) => f.debug_tuple("Range").field(range).finish(),
            Self::Sequence(_) => f.debug_tuple("Sequence").finish_non_exhaustive(),
        }
    }
}

//
//  KeyRange
//

/// A range of integers, possibly out of the domain of an `IntegerSet`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KeyRange {
    start: i128,
    end: i128,
    exclusive: bool,
}

impl KeyRange {
    /// Creates a range from `start` to `end`, both included.
    pub const fn inclusive(start: i128, end: i128) -> Self {
        Self {
            start,
            end,
            exclusive: false,
        }
    }

    /// Creates a range from `start` included to `end` excluded.
    pub const fn exclusive(start: i128, end: i128) -> Self {
        Self {
            start,
            end,
            exclusive: true,
        }
    }

    /// Returns the first element of the range.
    pub const fn start(&self) -> i128 {
        self.start
    }

    /// Returns the end of the range, which is excluded if `is_exclusive`.
    pub const fn end(&self) -> i128 {
        self.end
    }

    /// Returns whether the end of the range is excluded.
    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Returns whether the range holds no element.
    ///
    /// ```
    /// use integer_set::api::KeyRange;
    ///
    /// assert!(KeyRange::exclusive(5, 5).is_empty());
    /// assert!(KeyRange::inclusive(6, 5).is_empty());
    /// assert!(!KeyRange::inclusive(5, 5).is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.start > self.end || (self.exclusive && self.start == self.end)
    }

    /// Returns the last element of the range, included, unless the range is empty.
    pub const fn last(&self) -> Option<i128> {
        if self.is_empty() {
            return None;
        }

        //  Cannot overflow: a non-empty exclusive range has `end > start`.
        Some(if self.exclusive { self.end - 1 } else { self.end })
    }

    /// Returns the first and last keys of the range, both included, or None if the range is empty.
    ///
    /// Returns an error if either end is outside of `0..=maximum`.
    pub fn keys(&self, bound: Bound) -> Result<Option<(u64, u64)>, DomainError> {
        let Some(last) = self.last() else {
            return Ok(None);
        };

        if !bound.is_valid(self.start) || !bound.is_valid(last) {
            tracing::debug!(
                start = self.start,
                end = last,
                maximum = bound.maximum(),
                "rejected unsuitable range"
            );

            return Err(DomainError::UnsuitableRange {
                start: self.start,
                end: last,
                maximum: bound.maximum(),
            });
        }

        Ok(Some((self.start as u64, last as u64)))
    }

    /// Returns the first and last keys of the range, both included, restricted to `0..=maximum`.
    ///
    /// Returns None if the restricted range is empty.
    pub fn clamped_keys(&self, bound: Bound) -> Option<(u64, u64)> {
        let last = self.last()?;

        let maximum = bound.maximum() as i128;

        if last < 0 || self.start > maximum {
            return None;
        }

        Some((self.start.max(0) as u64, last.min(maximum) as u64))
    }
}

impl<T> From<Range<T>> for KeyRange
where
    T: Into<i128>,
{
    fn from(range: Range<T>) -> Self {
        Self::exclusive(range.start.into(), range.end.into())
    }
}

impl<T> From<RangeInclusive<T>> for KeyRange
where
    T: Into<i128>,
{
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();

        Self::inclusive(start.into(), end.into())
    }
}

//
//  Sequence
//

/// A lazy sequence of elements, each seen as the integer it stands for, if any.
pub struct Sequence<'a> {
    elements: Box<dyn Iterator<Item = Option<i128>> + 'a>,
}

impl<'a> Sequence<'a> {
    /// Creates a sequence from any iterable of keys.
    pub fn new<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: BitKey + 'a,
    {
        Self::from_members(elements.into_iter().map(BitKey::to_integer))
    }

    /// Creates a sequence from any iterable of members, `None` standing for an element which is not an integer.
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Option<i128>>,
        I::IntoIter: 'a,
    {
        Self {
            elements: Box::new(members.into_iter()),
        }
    }
}

impl Iterator for Sequence<'_> {
    type Item = Option<i128>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

//
//  Conversions
//

impl<'a> From<&'a IntegerSet> for Operand<'a, IntegerSet> {
    fn from(set: &'a IntegerSet) -> Self {
        Self::Integer(set)
    }
}

impl<'a, T, S> From<&'a HashSet<T, S>> for Operand<'a, HashSet<T, S>> {
    fn from(set: &'a HashSet<T, S>) -> Self {
        Self::Set(set)
    }
}

impl<'a, T> From<&'a BTreeSet<T>> for Operand<'a, BTreeSet<T>> {
    fn from(set: &'a BTreeSet<T>) -> Self {
        Self::Set(set)
    }
}

impl<'a> From<KeyRange> for Operand<'a, IntegerSet> {
    fn from(range: KeyRange) -> Self {
        Self::Range(range)
    }
}

impl<'a, T> From<Range<T>> for Operand<'a, IntegerSet>
where
    T: Into<i128>,
{
    fn from(range: Range<T>) -> Self {
        Self::Range(range.into())
    }
}

impl<'a, T> From<RangeInclusive<T>> for Operand<'a, IntegerSet>
where
    T: Into<i128>,
{
    fn from(range: RangeInclusive<T>) -> Self {
        Self::Range(range.into())
    }
}

impl<'a> From<Sequence<'a>> for Operand<'a, IntegerSet> {
    fn from(sequence: Sequence<'a>) -> Self {
        Self::Sequence(sequence)
    }
}

impl<'a, T> From<&'a [T]> for Operand<'a, IntegerSet>
where
    T: BitKey,
{
    fn from(elements: &'a [T]) -> Self {
        Self::sequence(elements.iter().copied())
    }
}

impl<'a, T> From<&'a Vec<T>> for Operand<'a, IntegerSet>
where
    T: BitKey,
{
    fn from(elements: &'a Vec<T>) -> Self {
        Self::sequence(elements.iter().copied())
    }
}

impl<'a, T, const N: usize> From<[T; N]> for Operand<'a, IntegerSet>
where
    T: BitKey + 'a,
{
    fn from(elements: [T; N]) -> Self {
        Self::sequence(elements)
    }
}

// mod operand_tests
