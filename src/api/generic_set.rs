//! The sets an `IntegerSet` interoperates with.

use core::any;
use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{
    api::{BitKey, DomainError},
    collections::IntegerSet,
};

/// A read-only set, of arbitrary elements.
///
/// This is all an `IntegerSet` requires to compare itself to a foreign set, or to absorb one: an element count, an
/// iteration capability, and a membership test.
pub trait SetLike {
    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns whether the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the set contains the element standing for `key`.
    fn contains_key(&self, key: u64) -> bool;

    /// Returns the elements of the set, in any order, as the integers they stand for.
    ///
    /// An element which does not stand for an integer is yielded as `None`.
    fn members(&self) -> impl Iterator<Item = Option<i128>> + '_;
}

/// A set, of arbitrary elements, which an `IntegerSet` may return when it cannot represent the result of an
/// operation.
pub trait GenericSet: SetLike + Clone {
    /// Inserts the element standing for `key`, returning whether it is newly inserted.
    ///
    /// Returns an error, and leaves the set unchanged, if the element type cannot represent `key`.
    fn try_insert_key(&mut self, key: u64) -> Result<bool, DomainError>;

    /// Inserts the element standing for `key`, returning whether it is newly inserted.
    ///
    /// #   Panics
    ///
    /// If the element type cannot represent `key`.
    #[track_caller]
    fn insert_key(&mut self, key: u64) -> bool {
        #[cold]
        #[track_caller]
        fn panic(error: DomainError) -> ! {
            panic!("{error}");
        }

        self.try_insert_key(key).unwrap_or_else(|error| panic(error))
    }

    /// Removes the element standing for `key`, returning whether it was present.
    fn remove_key(&mut self, key: u64) -> bool;

    /// Returns the elements in either `self` or `other`, but not both.
    ///
    /// Returns an error if the element type cannot represent one of the elements of `other` absent from `self`.
    ///
    /// `IntegerSet::symmetric_difference` delegates to this method when `self` cannot be converted to an
    /// `IntegerSet`; implementations may override it.
    fn symmetric_difference_with(&self, other: &IntegerSet) -> Result<Self, DomainError> {
        let mut result = self.clone();

        for key in other {
            if !result.remove_key(key) {
                result.try_insert_key(key)?;
            }
        }

        Ok(result)
    }
}

//  Returns the element standing for `key`, if `T` can represent it.
fn element<T>(key: u64) -> Result<T, DomainError>
where
    T: BitKey,
{
    T::try_from_key(key).ok_or(DomainError::Unrepresentable {
        key,
        type_name: any::type_name::<T>(),
    })
}

//
//  HashSet
//

impl<T, S> SetLike for HashSet<T, S>
where
    T: BitKey + Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains_key(&self, key: u64) -> bool {
        T::try_from_key(key).is_some_and(|element| self.contains(&element))
    }

    fn members(&self) -> impl Iterator<Item = Option<i128>> + '_ {
        self.iter().map(|element| element.to_integer())
    }
}

impl<T, S> GenericSet for HashSet<T, S>
where
    T: BitKey + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn try_insert_key(&mut self, key: u64) -> Result<bool, DomainError> {
        Ok(self.insert(element(key)?))
    }

    fn remove_key(&mut self, key: u64) -> bool {
        T::try_from_key(key).is_some_and(|element| self.remove(&element))
    }
}

//
//  BTreeSet
//

impl<T> SetLike for BTreeSet<T>
where
    T: BitKey + Ord,
{
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains_key(&self, key: u64) -> bool {
        T::try_from_key(key).is_some_and(|element| self.contains(&element))
    }

    fn members(&self) -> impl Iterator<Item = Option<i128>> + '_ {
        self.iter().map(|element| element.to_integer())
    }
}

impl<T> GenericSet for BTreeSet<T>
where
    T: BitKey + Ord,
{
    fn try_insert_key(&mut self, key: u64) -> Result<bool, DomainError> {
        Ok(self.insert(element(key)?))
    }

    fn remove_key(&mut self, key: u64) -> bool {
        T::try_from_key(key).is_some_and(|element| self.remove(&element))
    }
}

// mod generic_set_tests
