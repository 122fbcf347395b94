//! Graph algorithms upon which the partitioning of an `IntegerSet` is built.

pub mod scc;

pub use scc::strongly_connected_components;
