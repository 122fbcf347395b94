//  Relational predicates of `IntegerSet`.
//
//  Only sets can be compared: ranges and sequences are rejected with a `CapabilityError`.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{
    api::{BitKey, Bound, CapabilityError, Operand, SetLike},
    collections::IntegerSet,
};

//  An operand with set capability.
enum Comparand<'a, G> {
    Integer(&'a IntegerSet),
    Set(&'a G),
}

impl<'a, G> TryFrom<Operand<'a, G>> for Comparand<'a, G> {
    type Error = CapabilityError;

    fn try_from(operand: Operand<'a, G>) -> Result<Self, CapabilityError> {
        match operand {
            Operand::Integer(set) => Ok(Self::Integer(set)),
            Operand::Set(set) => Ok(Self::Set(set)),
            operand => Err(CapabilityError::new(operand.kind())),
        }
    }
}

impl IntegerSet {
    /// Returns whether every element of `other` is in `self`.
    ///
    /// A foreign set larger than `self` is rejected without being iterated. Returns an error if `other` is not a set.
    ///
    /// ```
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::try_from_iter([1, 2, 3]).expect("valid");
    /// let other = IntegerSet::try_from_iter([1, 3]).expect("valid");
    ///
    /// assert_eq!(Ok(true), set.is_superset(&other));
    /// assert_eq!(Ok(false), other.is_superset(&set));
    /// assert!(set.is_superset(&[1, 3][..]).is_err());
    /// ```
    pub fn is_superset<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<bool, CapabilityError>
    where
        G: SetLike + 'a,
    {
        Ok(match Comparand::try_from(other.into())? {
            Comparand::Integer(other) => other.vector().is_subset_of(self.vector()),
            Comparand::Set(set) => self.len() >= set.len() && self.contains_all(set),
        })
    }

    /// Returns whether every element of `self` is in `other`.
    ///
    /// Returns an error if `other` is not a set.
    pub fn is_subset<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<bool, CapabilityError>
    where
        G: SetLike + 'a,
    {
        Ok(match Comparand::try_from(other.into())? {
            Comparand::Integer(other) => self.vector().is_subset_of(other.vector()),
            Comparand::Set(set) => self.len() <= set.len() && self.iter().all(|key| set.contains_key(key)),
        })
    }

    /// Returns whether every element of `other` is in `self`, and `self` has more elements.
    ///
    /// Returns an error if `other` is not a set.
    pub fn is_proper_superset<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<bool, CapabilityError>
    where
        G: SetLike + 'a,
    {
        Ok(match Comparand::try_from(other.into())? {
            Comparand::Integer(other) => self != other && other.vector().is_subset_of(self.vector()),
            Comparand::Set(set) => self.len() > set.len() && self.contains_all(set),
        })
    }

    /// Returns whether every element of `self` is in `other`, and `other` has more elements.
    ///
    /// Returns an error if `other` is not a set.
    pub fn is_proper_subset<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<bool, CapabilityError>
    where
        G: SetLike + 'a,
    {
        Ok(match Comparand::try_from(other.into())? {
            Comparand::Integer(other) => self != other && self.vector().is_subset_of(other.vector()),
            Comparand::Set(set) => self.len() < set.len() && self.iter().all(|key| set.contains_key(key)),
        })
    }

    /// Returns whether `self` and `other` have at least one element in common.
    ///
    /// Only the smaller of the two sets is iterated, when `other` is a foreign set. Returns an error if `other` is not
    /// a set.
    pub fn intersects<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<bool, CapabilityError>
    where
        G: SetLike + 'a,
    {
        Ok(match Comparand::try_from(other.into())? {
            Comparand::Integer(other) => self.vector().intersects(other.vector()),
            Comparand::Set(set) if self.len() < set.len() => {
                let maximum = Bound::current().maximum();

                self.iter().take_while(|key| *key <= maximum).any(|key| set.contains_key(key))
            }
            Comparand::Set(set) => set.members().any(|member| self.contains_integer(member)),
        })
    }

    /// Returns whether `self` and `other` have no element in common.
    ///
    /// Returns an error if `other` is not a set.
    pub fn is_disjoint<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> Result<bool, CapabilityError>
    where
        G: SetLike + 'a,
    {
        self.intersects(other).map(|intersects| !intersects)
    }

    /// Returns whether `self` and `other` hold the same elements.
    ///
    /// Ranges and sequences are never equal to a set.
    ///
    /// ```
    /// use std::collections::HashSet;
    ///
    /// use integer_set::IntegerSet;
    ///
    /// let set = IntegerSet::try_from_iter([1, 2]).expect("valid");
    ///
    /// assert!(set.eq_set(&HashSet::from([2, 1])));
    /// assert!(!set.eq_set(&HashSet::from([2, -1])));
    /// assert!(!set.eq_set(1..=2));
    /// ```
    pub fn eq_set<'a, G>(&self, other: impl Into<Operand<'a, G>>) -> bool
    where
        G: SetLike + 'a,
    {
        match Comparand::try_from(other.into()) {
            Ok(Comparand::Integer(other)) => self == other,
            Ok(Comparand::Set(set)) => self.len() == set.len() && self.contains_all(set),
            Err(_) => false,
        }
    }

    //  Returns whether every element of `set` is in `self`.
    fn contains_all<G>(&self, set: &G) -> bool
    where
        G: SetLike,
    {
        set.members().all(|member| self.contains_integer(member))
    }
}

impl<T, S> PartialEq<HashSet<T, S>> for IntegerSet
where
    T: BitKey + Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &HashSet<T, S>) -> bool {
        self.eq_set(other)
    }
}

impl<T> PartialEq<BTreeSet<T>> for IntegerSet
where
    T: BitKey + Ord,
{
    fn eq(&self, other: &BTreeSet<T>) -> bool {
        self.eq_set(other)
    }
}

// mod relation_tests
