//  Set algebra of `IntegerSet`.
//
//  Each operation first attempts to work chunk by chunk, coercing foreign sets when all their elements are valid, and
//  only then falls back to element by element processing.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::{
    api::{Bound, Combined, DomainError, GenericSet, Operand},
    collections::IntegerSet,
};

impl IntegerSet {
    /// Returns the elements in either `self` or `other`.
    ///
    /// The result is a foreign set, of the type of `other`, if `other` is a foreign set holding elements which are not
    /// within `0..=maximum`. Returns an error if `other` is a range or a sequence, with one element which is not within
    /// `0..=maximum`, or if the result is a foreign set whose element type cannot represent one of the elements of
    /// `self`.
    ///
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use integer_set::{api::Combined, IntegerSet};
    ///
    /// let set = IntegerSet::try_from_iter([1, 2]).expect("valid");
    ///
    /// let union = set.union(&BTreeSet::from([2, 3])).expect("valid");
    /// assert_eq!(Some(vec![1, 2, 3]), union.into_integer().map(|set| set.to_vec()));
    ///
    /// let union = set.union(&BTreeSet::from([-1, 3])).expect("valid");
    /// assert_eq!(Combined::Generic(BTreeSet::from([-1, 1, 2, 3])), union);
    /// ```
    pub fn union<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<Combined<G>, DomainError>
    where
        G: GenericSet + 'a,
    {
        let bound = Bound::current();

        match other.into() {
            Operand::Integer(other) => Ok(Combined::Integer(self | other)),
            Operand::Set(set) => {
                let Some(mut coerced) = Self::coerce(set, bound) else {
                    let mut result = set.clone();

                    for key in self {
                        result.try_insert_key(key)?;
                    }

                    return Ok(Combined::Generic(result));
                };

                coerced.vector_mut().or_assign(self.vector());

                Ok(Combined::Integer(coerced))
            }
            source => {
                let mut result = self.clone();
                result.merge_with(source, bound)?;

                Ok(Combined::Integer(result))
            }
        }
    }

    /// Returns the elements in both `self` and `other`.
    ///
    /// The result is a subset of `self`, hence is always an `IntegerSet`. Elements of `other` which are not within
    /// `0..=maximum` are ignored.
    pub fn intersection<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> IntegerSet
    where
        G: GenericSet + 'a,
    {
        let bound = Bound::current();

        match other.into() {
            Operand::Integer(other) => self & other,
            Operand::Set(set) => {
                if let Some(mut coerced) = Self::coerce(set, bound) {
                    coerced.vector_mut().and_assign(self.vector());

                    return coerced;
                }

                let mut result = self.clone();
                result.retain(|key| set.contains_key(key));

                result
            }
            Operand::Range(range) => {
                let mut result = self.clone();

                match range.clamped_keys(bound) {
                    Some((first, last)) => result.vector_mut().retain_range(first, last),
                    None => result.vector_mut().clear(),
                }

                result
            }
            Operand::Sequence(sequence) => {
                let mut result = IntegerSet::new();

                for key in sequence.filter_map(|member| bound.accept(member)) {
                    if self.vector().is_set(key) {
                        result.vector_mut().set(key);
                    }
                }

                result
            }
        }
    }

    /// Returns the elements in `self`, but not in `other`.
    ///
    /// The result is a subset of `self`, hence is always an `IntegerSet`. Elements of `other` which are not within
    /// `0..=maximum` are ignored.
    pub fn difference<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> IntegerSet
    where
        G: GenericSet + 'a,
    {
        let bound = Bound::current();

        let mut result = self.clone();

        match other.into() {
            Operand::Set(set) => match Self::coerce(set, bound) {
                Some(coerced) => result.vector_mut().and_not_assign(coerced.vector()),
                None => result.subtract_with(Operand::Set(set), bound),
            },
            source => result.subtract_with(source, bound),
        }

        result
    }

    /// Returns the elements in either `self` or `other`, but not both.
    ///
    /// The result is a foreign set, computed by `GenericSet::symmetric_difference_with`, if `other` is a foreign set
    /// holding elements which are not within `0..=maximum`. Returns an error if `other` is a range or a sequence, with
    /// one element which is not within `0..=maximum`, or if the result is a foreign set whose element type cannot
    /// represent one of the elements of `self`.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::try_from_iter([1, 2, 3]).expect("valid");
    ///
    /// let result = set.symmetric_difference(2..=5).expect("valid");
    ///
    /// assert_eq!(Some(vec![1, 4, 5]), result.into_integer().map(|set| set.to_vec()));
    /// ```
    pub fn symmetric_difference<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<Combined<G>, DomainError>
    where
        G: GenericSet + 'a,
    {
        let bound = Bound::current();

        match other.into() {
            Operand::Integer(other) => Ok(Combined::Integer(self ^ other)),
            Operand::Set(set) => {
                let Some(mut coerced) = Self::coerce(set, bound) else {
                    return set.symmetric_difference_with(self).map(Combined::Generic);
                };

                coerced.vector_mut().xor_assign(self.vector());

                Ok(Combined::Integer(coerced))
            }
            source => {
                let mut result = IntegerSet::new();
                result.merge_with(source, bound)?;

                result.vector_mut().xor_assign(self.vector());

                Ok(Combined::Integer(result))
            }
        }
    }
}

//
//  Operators
//

impl BitOr for &IntegerSet {
    type Output = IntegerSet;

    fn bitor(self, other: &IntegerSet) -> IntegerSet {
        let mut result = self.clone();
        result |= other;

        result
    }
}

impl BitOrAssign<&IntegerSet> for IntegerSet {
    fn bitor_assign(&mut self, other: &IntegerSet) {
        self.vector_mut().or_assign(other.vector());
    }
}

impl BitAnd for &IntegerSet {
    type Output = IntegerSet;

    fn bitand(self, other: &IntegerSet) -> IntegerSet {
        let mut result = self.clone();
        result &= other;

        result
    }
}

impl BitAndAssign<&IntegerSet> for IntegerSet {
    fn bitand_assign(&mut self, other: &IntegerSet) {
        self.vector_mut().and_assign(other.vector());
    }
}

impl Sub for &IntegerSet {
    type Output = IntegerSet;

    fn sub(self, other: &IntegerSet) -> IntegerSet {
        let mut result = self.clone();
        result -= other;

        result
    }
}

impl SubAssign<&IntegerSet> for IntegerSet {
    fn sub_assign(&mut self, other: &IntegerSet) {
        self.vector_mut().and_not_assign(other.vector());
    }
}

impl BitXor for &IntegerSet {
    type Output = IntegerSet;

    fn bitxor(self, other: &IntegerSet) -> IntegerSet {
        let mut result = self.clone();
        result ^= other;

        result
    }
}

impl BitXorAssign<&IntegerSet> for IntegerSet {
    fn bitxor_assign(&mut self, other: &IntegerSet) {
        self.vector_mut().xor_assign(other.vector());
    }
}

// mod algebra_tests
