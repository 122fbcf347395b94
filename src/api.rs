//! A set of vocabulary types and traits, used by `IntegerSet` to interoperate with its environment.

pub mod bit_key;
pub mod bound;
pub mod combined;
pub mod generic_set;
pub mod operand;

pub use bit_key::BitKey;
pub use bound::Bound;
pub use combined::Combined;
pub use generic_set::{GenericSet, SetLike};
pub use operand::{KeyRange, Operand, Sequence};

pub use crate::utils::{BoundError, CapabilityError, DomainError};
