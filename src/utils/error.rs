//  Errors.

use thiserror::Error;

/// An element, or a range of elements, outside of the domain of an `IntegerSet`.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum DomainError {
    /// The element is an integer, but is either negative or greater than the maximum.
    #[error("{value} is out of range for IntegerSet (0..={maximum})")]
    OutOfRange {
        /// The offending element.
        value: i128,
        /// The maximum in effect when the element was validated.
        maximum: u64,
    },
    /// The element is not an integer.
    #[error("non-integer element for IntegerSet")]
    NotAnInteger,
    /// A raw vector was negative.
    #[error("IntegerSet cannot be created from negative vector {0}")]
    NegativeVector(i128),
    /// A range has a bound outside of `0..=maximum`.
    #[error("unsuitable range {start}..={end} for IntegerSet (0..={maximum})")]
    UnsuitableRange {
        /// The first element of the range.
        start: i128,
        /// The last element of the range, included.
        end: i128,
        /// The maximum in effect when the range was validated.
        maximum: u64,
    },
    /// A key cannot be represented by the element type of a foreign set.
    #[error("{key} cannot be represented as {type_name}")]
    Unrepresentable {
        /// The offending key.
        key: u64,
        /// The element type of the foreign set.
        type_name: &'static str,
    },
}

/// An operand, passed where a set is required, lacks set capability.
///
/// Ranges and sequences can be merged into, or subtracted from, an `IntegerSet`, but they cannot be compared to it.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("value must be a set, not a {kind}")]
pub struct CapabilityError {
    kind: &'static str,
}

impl CapabilityError {
    /// Creates an error, for an operand of the given `kind`.
    pub const fn new(kind: &'static str) -> Self {
        Self { kind }
    }

    /// Returns the kind of the operand.
    pub const fn kind(&self) -> &'static str {
        self.kind
    }
}

/// An invalid maximum: either 0, or greater than `Bound::LIMIT`.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("maximum of IntegerSet must be strictly positive and addressable")]
pub struct BoundError;

// mod display_tests
