//  See `Iter`.

use core::iter::FusedIterator;

use super::{BitChunkRaw, BitVector, IndexOfChunkRaw};

/// Ascending iterator over the bits set in a `BitVector`.
///
/// Each step isolates the lowest set bit of the remaining chunk, emits its position plus the accumulated shift, then
/// shifts the remaining chunk past it. The number of steps is thus the number of bits set, plus one per chunk, rather
/// than the number of bits in the vector.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    //  Chunks not yet loaded in `remaining`.
    chunks: &'a [BitChunkRaw],
    //  Index of the next chunk to load.
    of_chunk: IndexOfChunkRaw,
    //  Unvisited bits of the current chunk; bit 0 stands for the key `shift`.
    remaining: u64,
    shift: u64,
    //  Number of bits still to be yielded.
    count: usize,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator.
    pub fn new(vector: &'a BitVector) -> Self {
        Self {
            chunks: vector.chunks(),
            of_chunk: IndexOfChunkRaw(0),
            remaining: 0,
            shift: 0,
            count: vector.count(),
        }
    }

    //  Loads the next non-zero chunk in `remaining`, returns false if none.
    fn load(&mut self) -> bool {
        while let Some((head, tail)) = self.chunks.split_first() {
            let of_chunk = self.of_chunk;

            self.chunks = tail;
            self.of_chunk = IndexOfChunkRaw(of_chunk.0 + 1);

            if *head == BitChunkRaw::ALL_ZEROS {
                continue;
            }

            self.remaining = head.0;
            self.shift = of_chunk.0 as u64 * BitChunkRaw::BITS;

            return true;
        }

        false
    }
}

impl Iterator for Iter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 && !self.load() {
            return None;
        }

        let bit = BitChunkRaw(self.remaining).lowest()?;
        let position = bit.position().0;

        let key = self.shift + position as u64;

        //  Shift past the bit; `checked_shr` as shifting a `u64` by 64 is not defined.
        self.remaining = self.remaining.checked_shr(position + 1).unwrap_or(0);
        self.shift = key + 1;
        self.count -= 1;

        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }

    fn count(self) -> usize {
        self.count
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

// mod iter_tests
