//  See `BitVector`.
//
//  #   Why trim?
//
//  The vector stands for a single integer, and two vectors differing only by trailing `ALL_ZEROS` chunks stand for the
//  same integer. Trimming after every operation which may clear bits makes the chunk slice canonical, and lets
//  `Eq` and `Hash` be derived.

use crate::utils::{BitChunkRaw, IndexInChunkRaw, IndexOfChunkRaw};

/// An arbitrary-width bit vector.
///
/// #   Invariant
///
/// The last chunk, if any, is never `ALL_ZEROS`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BitVector {
    chunks: Vec<BitChunkRaw>,
}

//
//  Creation
//

impl BitVector {
    /// Creates a new, zero, vector.
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Creates a vector from its chunks, least significant first.
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let chunks = chunks.into_iter().map(BitChunkRaw).collect();

        let mut result = Self { chunks };
        result.trim();

        result
    }

    /// Creates a vector with all bits from `first` to `last`, both included, set.
    pub fn from_span(first: u64, last: u64) -> Self {
        let mut result = Self::new();
        result.set_range(first, last);

        result
    }
}

//
//  Queries
//

impl BitVector {
    /// Returns the underlying chunks.
    #[inline]
    pub fn chunks(&self) -> &[BitChunkRaw] {
        &self.chunks
    }

    /// Returns whether the vector is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the number of bits set.
    #[inline]
    pub fn count(&self) -> usize {
        self.chunks.iter().map(BitChunkRaw::count).sum()
    }

    /// Returns whether the bit `key` is set.
    pub fn is_set(&self, key: u64) -> bool {
        let Some((of_chunk, in_chunk)) = BitChunkRaw::split(key) else {
            return false;
        };

        self.get(of_chunk).is_set(in_chunk)
    }

    /// Returns the index of the lowest bit set, if any.
    pub fn lowest(&self) -> Option<u64> {
        let (of_chunk, chunk) = self.chunks.iter().enumerate().find(|(_, chunk)| **chunk != BitChunkRaw::ALL_ZEROS)?;

        let in_chunk = chunk.lowest()?.position();

        BitChunkRaw::fuse(IndexOfChunkRaw(of_chunk), in_chunk)
    }

    /// Returns the index of the highest bit set, if any.
    pub fn highest(&self) -> Option<u64> {
        let of_chunk = self.chunks.len().checked_sub(1)?;

        let in_chunk = self.chunks[of_chunk].highest()?;

        BitChunkRaw::fuse(IndexOfChunkRaw(of_chunk), in_chunk)
    }

    /// Returns whether every bit set in `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.chunks.len() > other.chunks.len() {
            //  The last chunk of `self` is not `ALL_ZEROS`, and has no counterpart.
            return false;
        }

        self.chunks.iter().zip(&other.chunks).all(|(s, o)| (*s & !*o) == BitChunkRaw::ALL_ZEROS)
    }

    /// Returns whether at least one bit is set in both `self` and `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        self.chunks.iter().zip(&other.chunks).any(|(s, o)| (*s & *o) != BitChunkRaw::ALL_ZEROS)
    }
}

//
//  Single bit mutations
//

impl BitVector {
    /// Sets the bit `key`, growing the vector as necessary.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Panics
    ///
    /// If `key` cannot be split into a chunk index, which only happens on platforms with less than 64 bits pointers.
    pub fn set(&mut self, key: u64) -> bool {
        let Some((of_chunk, in_chunk)) = BitChunkRaw::split(key) else {
            panic!("Cannot address bit {key}");
        };

        if of_chunk.0 >= self.chunks.len() {
            self.chunks.resize(of_chunk.0 + 1, BitChunkRaw::ALL_ZEROS);
        }

        self.chunks[of_chunk.0].set(in_chunk)
    }

    /// Resets the bit `key`.
    ///
    /// Returns whether the bit was set, or not.
    pub fn reset(&mut self, key: u64) -> bool {
        let Some((of_chunk, in_chunk)) = BitChunkRaw::split(key) else {
            return false;
        };

        let Some(chunk) = self.chunks.get_mut(of_chunk.0) else {
            return false;
        };

        let result = chunk.reset(in_chunk);

        self.trim();

        result
    }

    /// Resets all bits.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}

//
//  Bulk mutations
//

impl BitVector {
    /// `self |= other`.
    pub fn or_assign(&mut self, other: &Self) {
        if other.chunks.len() > self.chunks.len() {
            self.chunks.resize(other.chunks.len(), BitChunkRaw::ALL_ZEROS);
        }

        for (s, o) in self.chunks.iter_mut().zip(&other.chunks) {
            *s |= *o;
        }
    }

    /// `self &= other`.
    pub fn and_assign(&mut self, other: &Self) {
        self.chunks.truncate(other.chunks.len());

        for (s, o) in self.chunks.iter_mut().zip(&other.chunks) {
            *s &= *o;
        }

        self.trim();
    }

    /// `self &= !other`.
    pub fn and_not_assign(&mut self, other: &Self) {
        for (s, o) in self.chunks.iter_mut().zip(&other.chunks) {
            *s &= !*o;
        }

        self.trim();
    }

    /// `self ^= other`.
    pub fn xor_assign(&mut self, other: &Self) {
        if other.chunks.len() > self.chunks.len() {
            self.chunks.resize(other.chunks.len(), BitChunkRaw::ALL_ZEROS);
        }

        for (s, o) in self.chunks.iter_mut().zip(&other.chunks) {
            *s ^= *o;
        }

        self.trim();
    }

    /// Sets all bits from `first` to `last`, both included.
    ///
    /// Does nothing if `first` is strictly greater than `last`.
    pub fn set_range(&mut self, first: u64, last: u64) {
        let Some(spans) = Spans::new(first, last) else {
            return;
        };

        if spans.last.0 >= self.chunks.len() {
            self.chunks.resize(spans.last.0 + 1, BitChunkRaw::ALL_ZEROS);
        }

        for (of_chunk, mask) in spans {
            self.chunks[of_chunk.0] |= mask;
        }
    }

    /// Resets all bits from `first` to `last`, both included.
    ///
    /// Does nothing if `first` is strictly greater than `last`.
    pub fn reset_range(&mut self, first: u64, last: u64) {
        let Some(spans) = Spans::new(first, last) else {
            return;
        };

        for (of_chunk, mask) in spans {
            let Some(chunk) = self.chunks.get_mut(of_chunk.0) else {
                break;
            };

            *chunk &= !mask;
        }

        self.trim();
    }

    /// Resets all bits outside of `first` to `last`, both included.
    pub fn retain_range(&mut self, first: u64, last: u64) {
        if first > last {
            self.clear();
            return;
        }

        if first > 0 {
            self.reset_range(0, first - 1);
        }

        if last < u64::MAX {
            self.reset_range(last + 1, u64::MAX);
        }
    }
}

//
//  Implementation details
//

impl BitVector {
    //  Reestablishes the invariant.
    fn trim(&mut self) {
        let len = self
            .chunks
            .iter()
            .rposition(|chunk| *chunk != BitChunkRaw::ALL_ZEROS)
            .map_or(0, |last| last + 1);

        self.chunks.truncate(len);
    }

    //  Returns the chunk at `index`, or `ALL_ZEROS`.
    fn get(&self, index: IndexOfChunkRaw) -> BitChunkRaw {
        self.chunks.get(index.0).copied().unwrap_or(BitChunkRaw::ALL_ZEROS)
    }
}

//  Iterator over the masks covering a span of bits, one per chunk.
struct Spans {
    next: IndexOfChunkRaw,
    first: IndexInChunkRaw,
    last: IndexOfChunkRaw,
    last_in: IndexInChunkRaw,
    done: bool,
}

impl Spans {
    fn new(first: u64, last: u64) -> Option<Self> {
        if first > last {
            return None;
        }

        let (next, first) = BitChunkRaw::split(first)?;

        //  Beyond the addressable chunks, nothing is ever set.
        let (last, last_in) = BitChunkRaw::split(last).unwrap_or((IndexOfChunkRaw(usize::MAX), HIGHEST_IN_CHUNK));

        Some(Self {
            next,
            first,
            last,
            last_in,
            done: false,
        })
    }
}

impl Iterator for Spans {
    type Item = (IndexOfChunkRaw, BitChunkRaw);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let of_chunk = self.next;

        let mask = if of_chunk == self.last {
            self.done = true;

            BitChunkRaw::span(self.first, self.last_in)
        } else {
            //  Cannot overflow, as `of_chunk < self.last`.
            self.next = IndexOfChunkRaw(of_chunk.0 + 1);

            BitChunkRaw::span(self.first, HIGHEST_IN_CHUNK)
        };

        self.first = IndexInChunkRaw(0);

        Some((of_chunk, mask))
    }
}

const HIGHEST_IN_CHUNK: IndexInChunkRaw = IndexInChunkRaw(BitChunkRaw::BITS as u32 - 1);

// mod vector_tests
