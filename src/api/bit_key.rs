//! The elements of the sets an `IntegerSet` interoperates with.

use core::any;

/// An element which may stand for a key of an `IntegerSet`.
///
/// The primitive integer types are the obvious candidates, however a foreign set could also hold a strongly-typed
/// wrapper over an integer, or an enum for which only some variants stand for an integer.
pub trait BitKey: Copy {
    /// Returns the integer the element stands for, or None if it does not stand for an integer.
    ///
    /// The integer may be negative, or greater than any maximum; validation is up to the caller.
    fn to_integer(self) -> Option<i128>;

    /// Returns the element associated to the key, if the type can represent it.
    fn try_from_key(key: u64) -> Option<Self>;

    /// Returns the element associated to the key.
    ///
    /// #   Panics
    ///
    /// If the type cannot represent `key`, for example `300` as a `u8`.
    #[track_caller]
    fn from_key(key: u64) -> Self {
        #[cold]
        #[track_caller]
        fn panic(key: u64, name: &str) -> ! {
            panic!("Cannot convert {key} to {name}");
        }

        Self::try_from_key(key).unwrap_or_else(|| panic(key, any::type_name::<Self>()))
    }
}

macro_rules! impl_bit_key {
    ($($Type: ty),*) => {
        $(
            impl BitKey for $Type {
                #[inline]
                fn to_integer(self) -> Option<i128> {
                    i128::try_from(self).ok()
                }

                #[inline]
                fn try_from_key(key: u64) -> Option<Self> {
                    <$Type>::try_from(key).ok()
                }
            }
        )*
    }
}

impl_bit_key!(u8, u16, u32, u64, usize);
impl_bit_key!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod bit_key_tests {
    use super::*;

    #[test]
    fn to_integer() {
        assert_eq!(Some(-1), (-1i8).to_integer());
        assert_eq!(Some(255), u8::MAX.to_integer());
        assert_eq!(Some(u64::MAX as i128), u64::MAX.to_integer());
        assert_eq!(Some(i64::MIN as i128), i64::MIN.to_integer());
    }

    #[test]
    fn try_from_key() {
        assert_eq!(Some(255u8), u8::try_from_key(255));
        assert_eq!(None, u8::try_from_key(256));
        assert_eq!(None, i64::try_from_key(u64::MAX));
        assert_eq!(Some(3i32), i32::try_from_key(3));
    }

    #[test]
    #[should_panic(expected = "Cannot convert 300 to u8")]
    fn from_key_overflow() {
        u8::from_key(300);
    }
} // mod bit_key_tests
