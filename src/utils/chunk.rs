//  See `BitChunkRaw` type.
//
//  #   Why a dedicated type?
//
//  The bit-twiddling of a set is concentrated on single words: isolating the lowest set bit, masking a span of bits,
//  counting. Bundling those on a dedicated type keeps the vector-level code free of shifts and masks.
//
//
//  #   Why `u64`?
//
//  32-bits & 64-bits CPUs support `u64` natively, and a vector of `u64` is as wide a "word" as bulk OR/AND/XOR can get
//  without SIMD. The vector operations are thus proportional to `max / 64`.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A chunk of bits.
///
/// Bit `i` of chunk `n` stands for the integer `n * 64 + i`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct BitChunkRaw(pub u64);

/// The index of a chunk, in a sequence of chunks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfChunkRaw(pub usize);

/// The index of a bit in a chunk.
///
/// The index of a bit in a chunk is expected to always be strictly less than 64. No index created by
/// `BitChunkRaw::split` will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInChunkRaw` will panic if its value is strictly greater than 63.
///
/// In Release, any high bit will be ignored (masked away).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInChunkRaw(pub u32);

//
//  Constants.
//

impl BitChunkRaw {
    /// Number of bits in a chunk.
    pub const BITS: u64 = 64;

    /// An all-zeros bit chunk.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones bit chunk.
    pub const ALL_ONES: Self = Self(!0);
}

//
//  Static operations.
//

impl BitChunkRaw {
    /// Splits a key into an index-of-chunk/index-in-chunk pair.
    ///
    /// Returns None if the `key` is too large for the index-of-chunk part. This will never happen on 64-bits
    /// platforms.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use integer_set::utils::BitChunkRaw;
    /// let (of_chunk, in_chunk) = BitChunkRaw::split(133).expect("no overflow");
    ///
    /// assert_eq!(2, of_chunk.0);
    /// assert_eq!(5, in_chunk.0);
    /// ```
    #[inline]
    pub const fn split(key: u64) -> Option<(IndexOfChunkRaw, IndexInChunkRaw)> {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let of_chunk = key / Self::BITS;
        let in_chunk = key % Self::BITS;

        //  FIXME: convert to `.try_into()` when it is const.
        if of_chunk as usize as u64 != of_chunk {
            return None;
        }

        Some((IndexOfChunkRaw(of_chunk as _), IndexInChunkRaw(in_chunk as _)))
    }

    /// Fuses an index-of-chunk/index-in-chunk pair back into a key.
    ///
    /// Returns None if the resulting key would not fit in a `u64`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use integer_set::utils::{BitChunkRaw, IndexInChunkRaw, IndexOfChunkRaw};
    /// let key = BitChunkRaw::fuse(IndexOfChunkRaw(2), IndexInChunkRaw(5)).expect("no overflow");
    ///
    /// assert_eq!(133, key);
    /// ```
    #[inline]
    pub const fn fuse(of_chunk: IndexOfChunkRaw, in_chunk: IndexInChunkRaw) -> Option<u64> {
        debug_assert!(in_chunk.0 < Self::BITS as _);

        let of_chunk: u64 = of_chunk.0 as _;

        //  FIXME: convert to `?` when it is const.
        let Some(base) = of_chunk.checked_mul(Self::BITS) else {
            return None;
        };

        //  Mask to ensure the addition doesn't overflow.
        Some(base + (in_chunk.0 as u64) % Self::BITS)
    }
}

#[cfg(test)]
mod static_tests {
    use super::*;

    #[test]
    fn split_brush() {
        assert_eq!(Some((0, 0)), compute_split(0));
        assert_eq!(Some((0, 63)), compute_split(63));
        assert_eq!(Some((1, 0)), compute_split(64));
        assert_eq!(Some((1, 63)), compute_split(127));
        assert_eq!(Some((16_384, 0)), compute_split(1_048_576));
    }

    #[test]
    fn fuse_brush() {
        assert_eq!(Some(0), compute_fuse(0, 0));
        assert_eq!(Some(63), compute_fuse(0, 63));
        assert_eq!(Some(64), compute_fuse(1, 0));
        assert_eq!(Some(1_048_576), compute_fuse(16_384, 0));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn fuse_overflow() {
        let highest_of_chunk = (u64::MAX / 64) as usize;

        assert_eq!(Some(u64::MAX), compute_fuse(highest_of_chunk, 63));
        assert_eq!(None, compute_fuse(highest_of_chunk + 1, 0));
    }

    fn compute_split(key: u64) -> Option<(usize, u32)> {
        BitChunkRaw::split(key).map(|(o, i)| (o.0, i.0))
    }

    fn compute_fuse(of_chunk: usize, in_chunk: u32) -> Option<u64> {
        BitChunkRaw::fuse(IndexOfChunkRaw(of_chunk), IndexInChunkRaw(in_chunk))
    }
} // mod static_tests

//
//  Bit operations.
//

impl BitChunkRaw {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use integer_set::utils::BitChunkRaw;
    /// assert_eq!(0, BitChunkRaw::ALL_ZEROS.count());
    /// assert_eq!(64, BitChunkRaw::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Returns whether the given bit is set.
    #[inline]
    pub const fn is_set(&self, bit: IndexInChunkRaw) -> bool {
        (self.0 & Self::bit_mask(bit)) != 0
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    #[inline]
    pub const fn set(&mut self, bit: IndexInChunkRaw) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) == 0;

        self.0 |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    #[inline]
    pub const fn reset(&mut self, bit: IndexInChunkRaw) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) != 0;

        self.0 &= !mask;

        result
    }

    /// Returns the lowest set bit, isolated, if any.
    ///
    /// Under two's complement, `-c` flips every bit above the lowest set one, hence `c & -c` only keeps the latter.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use integer_set::utils::BitChunkRaw;
    /// assert_eq!(None, BitChunkRaw::ALL_ZEROS.lowest());
    /// assert_eq!(Some(BitChunkRaw(0b0100)), BitChunkRaw(0b1100).lowest());
    /// ```
    #[inline]
    pub const fn lowest(&self) -> Option<BitChunkRaw> {
        if self.0 == 0 {
            return None;
        }

        Some(BitChunkRaw(self.0 & self.0.wrapping_neg()))
    }

    /// Returns the position of the only set bit, for a chunk obtained by `lowest`.
    #[inline]
    pub const fn position(&self) -> IndexInChunkRaw {
        debug_assert!(self.0.is_power_of_two());

        IndexInChunkRaw(self.0.trailing_zeros())
    }

    /// Returns the index of the highest set bit, if any.
    #[inline]
    pub const fn highest(&self) -> Option<IndexInChunkRaw> {
        if self.0 == 0 {
            return None;
        }

        Some(IndexInChunkRaw(Self::BITS as u32 - 1 - self.0.leading_zeros()))
    }
}

// mod bit_tests

//
//  Span operations.
//

impl BitChunkRaw {
    /// Returns a chunk with all bits from `first` to `last`, both included, set.
    ///
    /// Returns `ALL_ZEROS` if `first` is strictly greater than `last`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use integer_set::utils::{BitChunkRaw, IndexInChunkRaw};
    /// assert_eq!(BitChunkRaw(0b0111_0000), BitChunkRaw::span(IndexInChunkRaw(4), IndexInChunkRaw(6)));
    /// assert_eq!(BitChunkRaw::ALL_ONES, BitChunkRaw::span(IndexInChunkRaw(0), IndexInChunkRaw(63)));
    /// ```
    #[inline]
    pub const fn span(first: IndexInChunkRaw, last: IndexInChunkRaw) -> BitChunkRaw {
        if first.0 > last.0 {
            return Self::ALL_ZEROS;
        }

        BitChunkRaw(Self::mask_after(first) & Self::mask_before(last))
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    const BITS: u32 = BitChunkRaw::BITS as u32;

    #[test]
    fn span_single() {
        for i in 0..BITS {
            assert_eq!(BitChunkRaw(1 << i), compute_span(i, i), "{i}");
        }
    }

    #[test]
    fn span_count() {
        for first in 0..BITS {
            for last in first..BITS {
                assert_eq!((last - first + 1) as usize, compute_span(first, last).count(), "{first}..={last}");
            }
        }
    }

    #[test]
    fn span_inverted() {
        assert_eq!(BitChunkRaw::ALL_ZEROS, compute_span(5, 4));
    }

    fn compute_span(first: u32, last: u32) -> BitChunkRaw {
        BitChunkRaw::span(IndexInChunkRaw(first), IndexInChunkRaw(last))
    }
} // mod span_tests

//
//  Bitwise traits.
//

impl BitAndAssign for BitChunkRaw {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for BitChunkRaw {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for BitChunkRaw {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOr for BitChunkRaw {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitXorAssign for BitChunkRaw {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXor for BitChunkRaw {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl Not for BitChunkRaw {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

//
//  Implementation details
//

impl BitChunkRaw {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInChunkRaw) -> u64 {
        debug_assert!(bit.0 < Self::BITS as _);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS as u32;

        1 << shift
    }

    //  Mask including `bit` and all bits after.
    #[inline]
    const fn mask_after(bit: IndexInChunkRaw) -> u64 {
        let mask = Self::bit_mask(bit) - 1;

        !mask
    }

    //  Mask including `bit` and all bits before.
    #[inline]
    const fn mask_before(bit: IndexInChunkRaw) -> u64 {
        (Self::bit_mask(bit) << 1).wrapping_sub(1)
    }
}
