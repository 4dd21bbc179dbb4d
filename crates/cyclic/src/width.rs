//! Storage-width selection for CRC registers.
//!
//! A CRC register of `N` bits lives in the narrowest of the four standard
//! unsigned integer types that can hold it. [`Word`] is that closed set of
//! storage types, and [`Bits`] + [`Uint`] perform the width-to-type mapping
//! at the type level (round `N` up to the next power of two, then up to the
//! next multiple of eight).
//!
//! | `N` | storage |
//! |-----|---------|
//! | 0..=8 | `u8` |
//! | 9..=16 | `u16` |
//! | 17..=32 | `u32` |
//! | 33..=64 | `u64` |
//!
//! Widths above 64 have no mapping and fail to compile.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod sealed {
  pub trait Sealed {}

  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
  impl Sealed for u64 {}
}

/// Unsigned integer usable as a CRC register.
///
/// Implemented for exactly `u8`, `u16`, `u32`, and `u64`; the trait is
/// sealed. [`shl`](Word::shl) and [`shr`](Word::shr) are lossy at the
/// storage edge: a shift by `BITS` or more yields zero rather than
/// panicking, matching how bits fall off a fixed-width register.
pub trait Word:
  Copy
  + Clone
  + Eq
  + PartialEq
  + Debug
  + Default
  + BitAnd<Output = Self>
  + BitOr<Output = Self>
  + BitXor<Output = Self>
  + Not<Output = Self>
  + Send
  + Sync
  + sealed::Sealed
  + 'static
{
  /// Storage width in bits.
  const BITS: u32;
  /// The all-zero value.
  const ZERO: Self;
  /// The value one.
  const ONE: Self;
  /// The all-ones value.
  const MAX: Self;

  /// Left shift, yielding zero when `n >= Self::BITS`.
  #[must_use]
  fn shl(self, n: u32) -> Self;

  /// Right shift, yielding zero when `n >= Self::BITS`.
  #[must_use]
  fn shr(self, n: u32) -> Self;

  /// Wrapping subtraction.
  #[must_use]
  fn wrapping_sub(self, rhs: Self) -> Self;

  /// Truncating conversion from `u64`.
  #[must_use]
  fn from_u64(value: u64) -> Self;

  /// Widening conversion to `u64`.
  #[must_use]
  fn to_u64(self) -> u64;

  /// Widening conversion from a byte.
  #[must_use]
  fn from_byte(byte: u8) -> Self;

  /// The low eight bits.
  #[must_use]
  fn low_byte(self) -> u8;
}

macro_rules! impl_word {
  ($($ty:ty)+) => {
    $(
      impl Word for $ty {
        const BITS: u32 = <$ty>::BITS;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const MAX: Self = <$ty>::MAX;

        #[inline]
        fn shl(self, n: u32) -> Self {
          self.checked_shl(n).unwrap_or(0)
        }

        #[inline]
        fn shr(self, n: u32) -> Self {
          self.checked_shr(n).unwrap_or(0)
        }

        #[inline]
        fn wrapping_sub(self, rhs: Self) -> Self {
          <$ty>::wrapping_sub(self, rhs)
        }

        #[inline]
        fn from_u64(value: u64) -> Self {
          value as $ty
        }

        #[inline]
        fn to_u64(self) -> u64 {
          self as u64
        }

        #[inline]
        fn from_byte(byte: u8) -> Self {
          byte as $ty
        }

        #[inline]
        fn low_byte(self) -> u8 {
          self as u8
        }
      }
    )+
  };
}

impl_word!(u8 u16 u32 u64);

/// Type-level marker for a CRC bit width.
///
/// Resolved to a storage type through [`SelectWord`]; see [`Uint`].
pub struct Bits<const N: u32>;

/// Maps a [`Bits`] width to its minimal storage [`Word`].
pub trait SelectWord {
  /// The selected storage type.
  type Word: Word;
}

/// The narrowest of `u8`/`u16`/`u32`/`u64` able to hold `N` bits.
///
/// ```
/// use cyclic::Uint;
///
/// let register: Uint<32> = 0xEDB8_8320_u32;
/// let wide: Uint<33> = 0x1_0000_0000_u64;
/// # let _ = (register, wide);
/// ```
pub type Uint<const N: u32> = <Bits<N> as SelectWord>::Word;

macro_rules! select_word {
  ($word:ty: $($n:literal)+) => {
    $(
      impl SelectWord for Bits<$n> {
        type Word = $word;
      }
    )+
  };
}

select_word!(u8: 0 1 2 3 4 5 6 7 8);
select_word!(u16: 9 10 11 12 13 14 15 16);
select_word!(u32: 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
select_word!(u64: 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
                  49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64);
