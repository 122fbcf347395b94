//! The `IntegerSet` collection.

//  Design considerations
//
//  #   Why split?
//
//  `IntegerSet` exposes a large API. It is split by concern: the core of the collection (creation, queries, and
//  mutations), the set algebra, the relational predicates, and the partitioning. Each of these modules merely adds an
//  `impl IntegerSet` block.

pub mod integer_set;

mod algebra;
mod partition;
mod relation;

pub use integer_set::IntegerSet;
