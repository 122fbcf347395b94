//! Core implementation of `IntegerSet`: creation, queries, and mutations.

use core::fmt;
use std::collections::{BTreeSet, HashSet};

use crate::{
    api::{BitKey, Bound, DomainError, GenericSet, KeyRange, Operand, SetLike},
    utils::{BitChunkRaw, BitVector, Iter},
};

/// A set of integers from 0 to `Bound::current().maximum()`, both included.
///
/// Two sets are equal if they hold the same elements, and equal sets hash equally.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct IntegerSet {
    vector: BitVector,
}

//
//  Creation
//

impl IntegerSet {
    /// Creates a new, empty, set.
    pub const fn new() -> Self {
        Self {
            vector: BitVector::new(),
        }
    }

    /// Creates a set from its raw bit vector, as chunks of 64 bits, least significant first.
    ///
    /// The elements are not validated against the maximum.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::from_chunks([0b1010, 0b1]);
    ///
    /// assert_eq!(vec![1, 3, 64], set.to_vec());
    /// ```
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            vector: BitVector::from_chunks(chunks),
        }
    }

    /// Creates a set from its raw bit vector.
    ///
    /// Returns an error if `bits` is negative. The elements are not validated against the maximum.
    pub fn try_from_bits(bits: i128) -> Result<Self, DomainError> {
        if bits < 0 {
            return Err(DomainError::NegativeVector(bits));
        }

        let bits = bits as u128;

        Ok(Self::from_chunks([bits as u64, (bits >> 64) as u64]))
    }

    /// Creates a set from its elements.
    ///
    /// Returns an error on the first element which is not within `0..=maximum`.
    ///
    /// ```
    /// use integer_set::{api::DomainError, IntegerSet};
    ///
    /// let set = IntegerSet::try_from_iter([5, 1, 3, 1]).expect("valid");
    ///
    /// assert_eq!(vec![1, 3, 5], set.to_vec());
    /// assert!(matches!(IntegerSet::try_from_iter([1, -1]), Err(DomainError::OutOfRange { value: -1, .. })));
    /// ```
    pub fn try_from_iter<I, T>(elements: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = T>,
        T: BitKey,
    {
        let mut result = Self::new();
        result.extend_checked(elements.into_iter().map(BitKey::to_integer), Bound::current())?;

        Ok(result)
    }

    /// Creates a set from the image of `elements` by `fun`.
    ///
    /// Returns an error on the first image which is not within `0..=maximum`.
    pub fn try_from_iter_with<I, T, U, F>(elements: I, fun: F) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> U,
        U: BitKey,
    {
        Self::try_from_iter(elements.into_iter().map(fun))
    }

    /// Creates a set from a range, in time proportional to the number of chunks.
    ///
    /// An empty range yields an empty set. Returns an error if either end of a non-empty range is not within
    /// `0..=maximum`.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::from_range(1..=100).expect("valid");
    ///
    /// assert_eq!(100, set.len());
    /// assert_eq!(Some(1), set.first());
    /// assert_eq!(Some(100), set.last());
    ///
    /// assert!(IntegerSet::from_range(5..5).expect("valid").is_empty());
    /// assert!(IntegerSet::from_range(-1..5).is_err());
    /// ```
    pub fn from_range<R>(range: R) -> Result<Self, DomainError>
    where
        R: Into<KeyRange>,
    {
        let Some((first, last)) = range.into().keys(Bound::current())? else {
            return Ok(Self::new());
        };

        Ok(Self {
            vector: BitVector::from_span(first, last),
        })
    }

    /// Creates a set from any operand, see `merge`.
    pub fn try_from_operand<'a, G>(source: impl Into<Operand<'a, G>>) -> Result<Self, DomainError>
    where
        G: SetLike + 'a,
    {
        let mut result = Self::new();
        result.merge_with(source.into(), Bound::current())?;

        Ok(result)
    }
}

//
//  Queries
//

impl IntegerSet {
    /// Returns the raw bit vector, as chunks of 64 bits, least significant first.
    ///
    /// The last chunk, if any, is never `BitChunkRaw::ALL_ZEROS`.
    #[inline]
    pub fn chunks(&self) -> &[BitChunkRaw] {
        self.vector.chunks()
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.vector.count()
    }

    /// Returns whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vector.is_zero()
    }

    /// Returns whether the set contains `element`.
    ///
    /// Negative elements, and elements which do not stand for an integer, are never contained. Neither are elements
    /// greater than the current maximum, even if inserted before the maximum was lowered: like `remove`, membership
    /// only considers elements within `0..=maximum`.
    #[inline]
    pub fn contains<T>(&self, element: T) -> bool
    where
        T: BitKey,
    {
        self.contains_integer(element.to_integer())
    }

    /// Returns the smallest element, if any.
    #[inline]
    pub fn first(&self) -> Option<u64> {
        self.vector.lowest()
    }

    /// Returns the largest element, if any.
    #[inline]
    pub fn last(&self) -> Option<u64> {
        self.vector.highest()
    }

    /// Returns an iterator over the elements of the set, in ascending order.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::try_from_iter([100, 6, 0]).expect("valid");
    ///
    /// assert_eq!(vec![0, 6, 100], set.iter().collect::<Vec<_>>());
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.vector)
    }

    /// Returns the elements of the set, in ascending order.
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// Returns the elements of the set, in a set of arbitrary type.
    ///
    /// #   Panics
    ///
    /// If the element type of `G` cannot represent one of the elements.
    pub fn to_set<G>(&self) -> G
    where
        G: GenericSet + Default,
    {
        let mut result = G::default();

        for key in self {
            result.insert_key(key);
        }

        result
    }
}

//
//  Mutations
//

impl IntegerSet {
    /// Adds `element` to the set.
    ///
    /// Returns an error, and leaves the set unchanged, if `element` is not within `0..=maximum`. The maximum never
    /// exceeds `Bound::LIMIT`, hence any valid element can be stored.
    ///
    /// ```
    /// use integer_set::{api::Bound, IntegerSet};
    ///
    /// let mut set = IntegerSet::new();
    ///
    /// set.add(1).expect("valid").add(Bound::current().maximum()).expect("valid");
    ///
    /// assert_eq!(2, set.len());
    /// assert!(set.add(-1).is_err());
    /// assert!(set.add(Bound::current().maximum() + 1).is_err());
    /// ```
    pub fn add<T>(&mut self, element: T) -> Result<&mut Self, DomainError>
    where
        T: BitKey,
    {
        self.insert(element)?;

        Ok(self)
    }

    /// Inserts `element` in the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if `element` was inserted.
    /// -   `Ok(false)`: if `element` was already present, in which case the set is unchanged.
    /// -   `Err(_)`: if `element` is not within `0..=maximum`, in which case the set is unchanged.
    pub fn insert<T>(&mut self, element: T) -> Result<bool, DomainError>
    where
        T: BitKey,
    {
        let key = Bound::current().validate(element)?;

        Ok(self.vector.set(key))
    }

    /// Deletes `element` from the set.
    ///
    /// Elements which are absent, or not within `0..=maximum`, are silently ignored.
    pub fn delete<T>(&mut self, element: T) -> &mut Self
    where
        T: BitKey,
    {
        self.remove(element);

        self
    }

    /// Removes `element` from the set, returning whether it was present.
    ///
    /// Elements which are not within `0..=maximum` are never removed.
    pub fn remove<T>(&mut self, element: T) -> bool
    where
        T: BitKey,
    {
        Bound::current()
            .accept(element.to_integer())
            .is_some_and(|key| self.vector.reset(key))
    }

    /// Removes all elements.
    pub fn clear(&mut self) -> &mut Self {
        self.vector.clear();

        self
    }

    /// Replaces the elements of the set by those of `source`.
    ///
    /// Returns an error, and leaves the set unchanged, if one of the elements of `source` is not within
    /// `0..=maximum`.
    pub fn replace<'a, G>(&mut self, source: impl Into<Operand<'a, G>>) -> Result<&mut Self, DomainError>
    where
        G: SetLike + 'a,
    {
        match source.into() {
            Operand::Integer(other) => self.vector.clone_from(&other.vector),
            source => {
                let mut replacement = Self::new();
                replacement.merge_with(source, Bound::current())?;

                *self = replacement;
            }
        }

        Ok(self)
    }

    /// Adds the elements of `source` to the set.
    ///
    /// -   Another `IntegerSet` is merged chunk by chunk.
    /// -   A range is merged in closed form; an empty range is a no-op, and a non-empty range with either end not
    ///     within `0..=maximum` is an error.
    /// -   Any other operand is merged element by element, returning an error on the first element not within
    ///     `0..=maximum`. The elements preceding it are left in the set.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let mut set = IntegerSet::new();
    ///
    /// set.merge(1..4).expect("valid").merge(&[8, 9][..]).expect("valid");
    ///
    /// assert_eq!(vec![1, 2, 3, 8, 9], set.to_vec());
    ///
    /// assert!(set.merge(&[10, -1][..]).is_err());
    /// assert!(set.contains(10));
    /// ```
    pub fn merge<'a, G>(&mut self, source: impl Into<Operand<'a, G>>) -> Result<&mut Self, DomainError>
    where
        G: SetLike + 'a,
    {
        self.merge_with(source.into(), Bound::current())?;

        Ok(self)
    }

    /// Removes the elements of `source` from the set.
    ///
    /// Elements which are absent, or not within `0..=maximum`, are silently ignored; a range is restricted to
    /// `0..=maximum`.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let mut set = IntegerSet::from_range(0..10).expect("valid");
    ///
    /// set.subtract(-5..3).subtract(&[5, -1][..]);
    ///
    /// assert_eq!(vec![3, 4, 6, 7, 8, 9], set.to_vec());
    /// ```
    pub fn subtract<'a, G>(&mut self, source: impl Into<Operand<'a, G>>) -> &mut Self
    where
        G: SetLike + 'a,
    {
        self.subtract_with(source.into(), Bound::current());

        self
    }

    /// Retains only the elements for which `predicate` returns true.
    pub fn retain<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(u64) -> bool,
    {
        let mut retained = BitVector::new();

        for key in self.iter().filter(|key| predicate(*key)) {
            retained.set(key);
        }

        self.vector = retained;

        self
    }

    /// Removes the elements for which `predicate` returns true.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(u64) -> bool,
    {
        self.retain(|key| !predicate(key))
    }

    /// Retains only the elements for which `predicate` returns true.
    ///
    /// Returns None if no element was removed.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let mut set = IntegerSet::try_from_iter([1, 2, 3, 4]).expect("valid");
    ///
    /// assert!(set.select(|key| key % 2 == 0).is_some());
    /// assert!(set.select(|key| key % 2 == 0).is_none());
    /// assert_eq!(vec![2, 4], set.to_vec());
    /// ```
    pub fn select<F>(&mut self, predicate: F) -> Option<&mut Self>
    where
        F: FnMut(u64) -> bool,
    {
        let before = self.len();

        self.retain(predicate);

        (self.len() != before).then_some(self)
    }

    /// Removes the elements for which `predicate` returns true.
    ///
    /// Returns None if no element was removed.
    pub fn reject<F>(&mut self, predicate: F) -> Option<&mut Self>
    where
        F: FnMut(u64) -> bool,
    {
        let before = self.len();

        self.remove_if(predicate);

        (self.len() != before).then_some(self)
    }

    /// Replaces every element by its image by `fun`.
    ///
    /// Returns an error, and leaves the set unchanged, if one of the images is not within `0..=maximum`.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let mut set = IntegerSet::try_from_iter([1, 2, 3]).expect("valid");
    ///
    /// set.map_in_place(|key| key * 10).expect("valid");
    /// assert_eq!(vec![10, 20, 30], set.to_vec());
    ///
    /// assert!(set.map_in_place(|key| 20 - key as i64).is_err());
    /// assert_eq!(vec![10, 20, 30], set.to_vec());
    /// ```
    pub fn map_in_place<T, F>(&mut self, fun: F) -> Result<&mut Self, DomainError>
    where
        F: FnMut(u64) -> T,
        T: BitKey,
    {
        let mapped = Self::try_from_iter(self.iter().map(fun))?;

        self.vector = mapped.vector;

        Ok(self)
    }
}

//
//  Implementation details
//

impl IntegerSet {
    //  Returns whether the set contains `integer`, `None` standing for a non-integer element.
    pub(crate) fn contains_integer(&self, integer: Option<i128>) -> bool {
        Bound::current()
            .accept(integer)
            .is_some_and(|key| self.vector.is_set(key))
    }

    //  Returns the underlying vector.
    pub(crate) fn vector(&self) -> &BitVector {
        &self.vector
    }

    //  Returns the underlying vector.
    pub(crate) fn vector_mut(&mut self) -> &mut BitVector {
        &mut self.vector
    }

    //  Converts a foreign set, if all its elements are within `0..=maximum`.
    pub(crate) fn coerce<G>(set: &G, bound: Bound) -> Option<Self>
    where
        G: SetLike,
    {
        let mut result = Self::new();

        if result.extend_checked(set.members(), bound).is_err() {
            tracing::trace!(len = set.len(), "foreign set not coercible to IntegerSet");

            return None;
        }

        Some(result)
    }

    //  Adds the elements of `source`, see `merge`.
    pub(crate) fn merge_with<G>(&mut self, source: Operand<'_, G>, bound: Bound) -> Result<(), DomainError>
    where
        G: SetLike,
    {
        match source {
            Operand::Integer(other) => self.vector.or_assign(&other.vector),
            Operand::Range(range) => {
                if let Some((first, last)) = range.keys(bound)? {
                    self.vector.set_range(first, last);
                }
            }
            Operand::Set(set) => self.extend_checked(set.members(), bound)?,
            Operand::Sequence(sequence) => self.extend_checked(sequence, bound)?,
        }

        Ok(())
    }

    //  Removes the elements of `source`, see `subtract`.
    pub(crate) fn subtract_with<G>(&mut self, source: Operand<'_, G>, bound: Bound)
    where
        G: SetLike,
    {
        match source {
            Operand::Integer(other) => self.vector.and_not_assign(&other.vector),
            Operand::Range(range) => {
                if let Some((first, last)) = range.clamped_keys(bound) {
                    self.vector.reset_range(first, last);
                }
            }
            Operand::Set(set) => self.remove_accepted(set.members(), bound),
            Operand::Sequence(sequence) => self.remove_accepted(sequence, bound),
        }
    }

    //  Adds each member, stopping at the first one not within `0..=maximum`.
    fn extend_checked<I>(&mut self, members: I, bound: Bound) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = Option<i128>>,
    {
        for member in members {
            self.vector.set(bound.check(member)?);
        }

        Ok(())
    }

    //  Removes each member, skipping those not within `0..=maximum`.
    fn remove_accepted<I>(&mut self, members: I, bound: Bound)
    where
        I: IntoIterator<Item = Option<i128>>,
    {
        for key in members.into_iter().filter_map(|member| bound.accept(member)) {
            self.vector.reset(key);
        }
    }
}

//
//  Traits
//

impl fmt::Debug for IntegerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntegerSet ")?;

        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a IntegerSet {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&IntegerSet> for BTreeSet<u64> {
    fn from(set: &IntegerSet) -> Self {
        set.iter().collect()
    }
}

impl From<&IntegerSet> for HashSet<u64> {
    fn from(set: &IntegerSet) -> Self {
        set.iter().collect()
    }
}

impl SetLike for IntegerSet {
    fn len(&self) -> usize {
        IntegerSet::len(self)
    }

    fn contains_key(&self, key: u64) -> bool {
        self.contains(key)
    }

    fn members(&self) -> impl Iterator<Item = Option<i128>> + '_ {
        self.iter().map(|key| Some(i128::from(key)))
    }
}

/// The keys are not validated against the maximum.
impl GenericSet for IntegerSet {
    fn try_insert_key(&mut self, key: u64) -> Result<bool, DomainError> {
        Ok(self.vector.set(key))
    }

    fn remove_key(&mut self, key: u64) -> bool {
        self.vector.reset(key)
    }

    fn symmetric_difference_with(&self, other: &IntegerSet) -> Result<Self, DomainError> {
        let mut result = self.clone();
        result.vector.xor_assign(&other.vector);

        Ok(result)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    use super::IntegerSet;

    impl Serialize for IntegerSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de> Deserialize<'de> for IntegerSet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let elements = Vec::<i64>::deserialize(deserializer)?;

            IntegerSet::try_from_iter(elements).map_err(D::Error::custom)
        }
    }
} // mod serde_impl

#[cfg(test)]
mod integer_set_tests {
    use super::*;

    fn set(elements: &[u64]) -> IntegerSet {
        IntegerSet::try_from_iter(elements.iter().copied()).expect("valid")
    }

    #[test]
    fn new() {
        let set = IntegerSet::new();

        assert!(set.is_empty());
        assert_eq!(0, set.len());
        assert_eq!(None, set.first());
        assert_eq!(None, set.last());
        assert!(set.chunks().is_empty());
        assert_eq!(set, IntegerSet::default());
    }

    #[test]
    fn from_chunks() {
        let set = IntegerSet::from_chunks([0b101, 0, 0]);

        assert_eq!(vec![0, 2], set.to_vec());
        assert_eq!(1, set.chunks().len());
        assert_eq!(set, IntegerSet::from_chunks([0b101]));
    }

    #[test]
    fn try_from_bits() {
        assert_eq!(Err(DomainError::NegativeVector(-1)), IntegerSet::try_from_bits(-1));
        assert_eq!(IntegerSet::new(), IntegerSet::try_from_bits(0).expect("non-negative"));
        assert_eq!(
            vec![0, 6, 100],
            IntegerSet::try_from_bits((1 << 100) | (1 << 6) | 1)
                .expect("non-negative")
                .to_vec()
        );
    }

    #[test]
    fn try_from_iter_with() {
        let set = IntegerSet::try_from_iter_with([1u8, 2, 3], |x| u32::from(x) * 2).expect("valid");

        assert_eq!(vec![2, 4, 6], set.to_vec());

        assert_eq!(
            Err(DomainError::OutOfRange {
                value: -2,
                maximum: Bound::DEFAULT_MAXIMUM
            }),
            IntegerSet::try_from_iter_with([1, 2], |x: i32| -x)
        );
    }

    #[test]
    fn from_range() {
        let set = IntegerSet::from_range(1..=100).expect("valid");

        assert_eq!(100, set.len());
        assert_eq!((1..=100).collect::<Vec<u64>>(), set.to_vec());

        assert!(IntegerSet::from_range(5..5).expect("valid").is_empty());
        assert!(IntegerSet::from_range(6..=5).expect("valid").is_empty());
        assert!(IntegerSet::from_range(-5..-6).expect("valid").is_empty());

        assert_eq!(vec![63, 64], IntegerSet::from_range(63..65).expect("valid").to_vec());

        let maximum = i128::from(Bound::DEFAULT_MAXIMUM);

        assert!(IntegerSet::from_range(-1..=3).is_err());
        assert!(IntegerSet::from_range(0..=maximum + 1).is_err());
        assert_eq!(
            Some(Bound::DEFAULT_MAXIMUM),
            IntegerSet::from_range(maximum..=maximum).expect("valid").last()
        );
    }

    #[test]
    fn try_from_operand() {
        let source = BTreeSet::from([4u16, 2]);

        assert_eq!(vec![2, 4], IntegerSet::try_from_operand(&source).expect("valid").to_vec());
        assert_eq!(vec![0, 1], IntegerSet::try_from_operand(0..2).expect("valid").to_vec());
    }

    #[test]
    fn contains() {
        let set = set(&[0, 6, 100]);

        assert!(set.contains(0u8));
        assert!(set.contains(6i64));
        assert!(set.contains(100usize));
        assert!(!set.contains(5));
        assert!(!set.contains(-6));
        assert!(!set.contains(u64::MAX));
    }

    #[test]
    fn first_last() {
        let set = set(&[6, 64, 200]);

        assert_eq!(Some(6), set.first());
        assert_eq!(Some(200), set.last());
    }

    #[test]
    fn add_insert() {
        let mut set = IntegerSet::new();

        set.add(3).expect("valid").add(3).expect("valid");

        assert_eq!(vec![3], set.to_vec());

        assert_eq!(Ok(true), set.insert(4));
        assert_eq!(Ok(false), set.insert(4));
        assert_eq!(Ok(true), set.insert(Bound::DEFAULT_MAXIMUM));

        assert!(set.add(-1).is_err());
        assert!(set.insert(Bound::DEFAULT_MAXIMUM + 1).is_err());
        assert_eq!(vec![3, 4, Bound::DEFAULT_MAXIMUM], set.to_vec());
    }

    #[test]
    fn delete_remove() {
        let mut set = set(&[1, 2, 3, 200]);

        set.delete(2).delete(-1).delete(Bound::DEFAULT_MAXIMUM + 1).delete(7);

        assert_eq!(vec![1, 3, 200], set.to_vec());

        assert!(set.remove(200));
        assert!(!set.remove(200));
        assert!(!set.remove(-3));

        assert_eq!(vec![1, 3], set.to_vec());
        assert_eq!(1, set.chunks().len());
    }

    #[test]
    fn clear() {
        let mut set = set(&[1, 2, 3]);

        assert!(set.clear().is_empty());
    }

    #[test]
    fn replace() {
        let mut set = set(&[1, 2, 3]);

        set.replace(&IntegerSet::try_from_iter([7]).expect("valid")).expect("valid");
        assert_eq!(vec![7], set.to_vec());

        set.replace(&HashSet::from([8u32, 9])).expect("valid");
        assert_eq!(vec![8, 9], set.to_vec());

        assert!(set.replace(&[1, -1][..]).is_err());
        assert_eq!(vec![8, 9], set.to_vec());
    }

    #[test]
    fn merge() {
        let mut set = set(&[1]);

        set.merge(&IntegerSet::try_from_iter([65]).expect("valid")).expect("valid");
        set.merge(3..=4).expect("valid");
        set.merge(10..10).expect("valid");
        set.merge(&BTreeSet::from([5i8])).expect("valid");
        set.merge([6, 7]).expect("valid");

        assert_eq!(vec![1, 3, 4, 5, 6, 7, 65], set.to_vec());

        assert!(set.merge(-1..=3).is_err());
        assert!(set.merge(&[8, -1, 9][..]).is_err());

        //  No rollback.
        assert_eq!(vec![1, 3, 4, 5, 6, 7, 8, 65], set.to_vec());
    }

    #[test]
    fn merge_non_integer() {
        let mut set = IntegerSet::new();

        let result = set.merge(crate::api::Sequence::from_members([Some(1), None]));

        assert_eq!(Err(DomainError::NotAnInteger), result.map(|_| ()));
        assert_eq!(vec![1], set.to_vec());
    }

    #[test]
    fn subtract() {
        let mut set = IntegerSet::from_range(0..=70).expect("valid");

        set.subtract(&IntegerSet::from_range(10..=69).expect("valid"));
        set.subtract(-10..2);
        set.subtract(&HashSet::from([-1i32, 3, 1_000]));
        set.subtract([5, 70, Bound::DEFAULT_MAXIMUM + 1]);

        assert_eq!(vec![2, 4, 6, 7, 8, 9], set.to_vec());
        assert_eq!(1, set.chunks().len());

        set.subtract(0..=Bound::DEFAULT_MAXIMUM * 2);

        assert!(set.is_empty());
    }

    #[test]
    fn retain_remove_if() {
        let mut set = IntegerSet::from_range(0..10).expect("valid");

        set.retain(|key| key % 3 == 0);
        assert_eq!(vec![0, 3, 6, 9], set.to_vec());

        set.remove_if(|key| key > 5);
        assert_eq!(vec![0, 3], set.to_vec());
    }

    #[test]
    fn select_reject() {
        let mut set = IntegerSet::from_range(0..6).expect("valid");

        assert!(set.reject(|key| key > 10).is_none());
        assert_eq!(Some(vec![0, 1, 2]), set.reject(|key| key > 2).map(|set| set.to_vec()));
        assert!(set.select(|_| true).is_none());
        assert!(set.select(|_| false).is_some());
        assert!(set.is_empty());
    }

    #[test]
    fn map_in_place() {
        let mut set = set(&[1, 2, 3]);

        set.map_in_place(|key| key / 2).expect("valid");
        assert_eq!(vec![0, 1], set.to_vec());

        assert_eq!(
            Err(DomainError::OutOfRange {
                value: -1,
                maximum: Bound::DEFAULT_MAXIMUM
            }),
            set.map_in_place(|key| key as i64 - 1).map(|_| ())
        );
        assert_eq!(vec![0, 1], set.to_vec());
    }

    #[test]
    fn conversions() {
        let set = set(&[1, 64, 3]);

        assert_eq!(BTreeSet::from([1, 3, 64]), BTreeSet::from(&set));
        assert_eq!(HashSet::from([1, 3, 64]), HashSet::from(&set));
        assert_eq!(BTreeSet::from([1u8, 3, 64]), set.to_set::<BTreeSet<u8>>());
        assert_eq!(set, set.to_set::<IntegerSet>());
    }

    #[test]
    fn debug() {
        assert_eq!("IntegerSet {0, 6, 100}", format!("{:?}", set(&[100, 0, 6])));
        assert_eq!("IntegerSet {}", format!("{:?}", IntegerSet::new()));
    }

    #[test]
    fn hash() {
        let mut sets = HashSet::new();

        sets.insert(set(&[1, 2]));
        sets.insert(IntegerSet::from_range(1..=2).expect("valid"));

        let mut shrunk = set(&[1, 2, 300]);
        shrunk.delete(300);
        sets.insert(shrunk);

        assert_eq!(1, sets.len());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let set = set(&[0, 6, 100]);

        let json = serde_json::to_string(&set).expect("serializable");
        assert_eq!("[0,6,100]", json);

        let deserialized: IntegerSet = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(set, deserialized);

        assert!(serde_json::from_str::<IntegerSet>("[1,-1]").is_err());
    }
} // mod integer_set_tests
