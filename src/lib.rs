//! A set of non-negative integers, backed by a bit vector.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains a selection of vocabulary types and traits.
//! -   The `algorithm` module contains a selection of algorithms the collection is built atop.
//! -   The `collections` module contains the `IntegerSet` collection itself.
//! -   The `utils` module contains a selection of low-level types upon which the collection is built.
//!
//!
//! #   Elements
//!
//! An `IntegerSet` holds integers from 0 to a process-wide maximum, both included, see `api::Bound`. Elements are
//! validated on insertion only: lowering the maximum does not invalidate the elements already held.
//!
//! Membership is represented as a single arbitrary-width bit vector, split in `u64` chunks, so that the set algebra
//! and relational predicates take time proportional to the number of chunks, rather than the number of elements.
//!
//!
//! #   Operands
//!
//! Most operations accept any `Into<api::Operand>`: another `IntegerSet`, a `HashSet` or `BTreeSet` of integers, a
//! range, or a sequence of integers.
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use integer_set::IntegerSet;
//!
//! let mut set = IntegerSet::try_from_iter([1, 3, 5]).expect("valid");
//!
//! set.merge(10..=12).expect("valid");
//! set.subtract(&BTreeSet::from([3, 11]));
//!
//! assert_eq!(vec![1, 5, 10, 12], set.to_vec());
//! assert_eq!(Ok(true), set.is_superset(&BTreeSet::from([1u32, 5])));
//! assert!(set.is_superset(&[1, 5][..]).is_err());
//! ```
//!
//!
//! #   Key type
//!
//! Keys are expressed as a `u64`. While `usize` is the typical index type, it is only sufficient to index every
//! _byte_ in a program, not necessarily every _bit_, and it is awkward to convert to and from.

//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

pub mod algorithm;
pub mod api;
pub mod collections;
pub mod utils;

pub use collections::IntegerSet;
