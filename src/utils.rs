//! Low-level types upon which `IntegerSet` is built.

mod chunk;
mod chunk_iter;
mod chunk_store;
mod error;

pub use chunk::{BitChunkRaw, IndexInChunkRaw, IndexOfChunkRaw};
pub use chunk_iter::Iter;
pub use chunk_store::BitVector;
pub use error::{BoundError, CapabilityError, DomainError};
