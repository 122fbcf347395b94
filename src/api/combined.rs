//! The result of combining an `IntegerSet` with an operand which may hold elements it cannot represent.

use crate::{api::SetLike, collections::IntegerSet};

/// The result of `IntegerSet::union` and `IntegerSet::symmetric_difference`.
///
/// The result is an `IntegerSet` whenever the operand could be coerced to one, and a foreign set of the operand's
/// type otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Combined<G> {
    /// All elements are valid integers.
    Integer(IntegerSet),
    /// Some elements are not valid integers.
    Generic(G),
}

impl<G> Combined<G> {
    /// Returns whether the result is an `IntegerSet`.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns a reference to the `IntegerSet`, if any.
    pub fn as_integer(&self) -> Option<&IntegerSet> {
        match self {
            Self::Integer(set) => Some(set),
            Self::Generic(_) => None,
        }
    }

    /// Returns the `IntegerSet`, if any.
    pub fn into_integer(self) -> Option<IntegerSet> {
        match self {
            Self::Integer(set) => Some(set),
            Self::Generic(_) => None,
        }
    }

    /// Returns the foreign set, if any.
    pub fn into_generic(self) -> Option<G> {
        match self {
            Self::Integer(_) => None,
            Self::Generic(set) => Some(set),
        }
    }
}

impl<G> Combined<G>
where
    G: SetLike,
{
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(set) => set.len(),
            Self::Generic(set) => set.len(),
        }
    }

    /// Returns whether there is no element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the element standing for `key` is present.
    pub fn contains_key(&self, key: u64) -> bool {
        match self {
            Self::Integer(set) => set.contains(key),
            Self::Generic(set) => set.contains_key(key),
        }
    }
}

// mod combined_tests
