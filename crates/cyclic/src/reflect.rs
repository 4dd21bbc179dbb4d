//! Bit-order reflection.
//!
//! CRC catalogues express polynomials, initial values, and checksums in
//! either MSB-first or LSB-first bit order (`refin`/`refout`). Converting
//! between the two is a bit reversal, implemented here as a log2-step
//! masked swap rather than a per-bit loop: swap halves, then quarters,
//! then pairs, then single bits, using the 0x0F0F…/0x3333…/0x5555… mask
//! family. A final right shift makes the reversal exact for widths that
//! are not a power of two.

use crate::width::Word;

/// The alternating mask used by one swap round of [`reflect_bits`].
///
/// For a group size `digit`, the mask repeats `digit` set bits followed by
/// `digit` clear bits across the whole storage width, starting from the low
/// end. The repetition is generated by OR-ing the mask with itself shifted
/// left by `2 * digit` until it stops changing.
///
/// `swap_mask::<u16>(4)` is `0x0F0F`, `swap_mask::<u16>(1)` is `0x5555`.
#[must_use]
pub fn swap_mask<W: Word>(digit: u32) -> W {
  debug_assert!(digit >= 1 && digit <= W::BITS / 2);

  let mut mask = W::ONE.shl(digit).wrapping_sub(W::ONE);
  loop {
    let gap = mask.shl(digit);
    let next = mask | gap.shl(digit);
    if next == mask {
      return mask;
    }
    mask = next;
  }
}

/// Reverse the order of the low `width` bits of `value`.
///
/// The swap runs over the full storage width, then the result is shifted
/// right by `W::BITS - width` so that the reversal is exact for any
/// `width` in `1..=W::BITS`, byte-aligned or not. Storage bits at or above
/// `width` do not affect the result, and the result has no bits set at or
/// above `width`.
///
/// ```
/// use cyclic::reflect_bits;
///
/// assert_eq!(reflect_bits(0x0000_0001_u32, 32), 0x8000_0000);
/// assert_eq!(reflect_bits(0x001_u16, 12), 0x800);
/// ```
#[must_use]
pub fn reflect_bits<W: Word>(mut value: W, width: u32) -> W {
  debug_assert!(width >= 1 && width <= W::BITS);

  let mut digit = W::BITS >> 1;
  while digit != 0 {
    let rmask = swap_mask::<W>(digit);
    let lmask = rmask.shl(digit);
    value = (value & lmask).shr(digit) | (value & rmask).shl(digit);
    digit >>= 1;
  }
  value.shr(W::BITS - width)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mask_family_u16() {
    assert_eq!(swap_mask::<u16>(8), 0x00FF);
    assert_eq!(swap_mask::<u16>(4), 0x0F0F);
    assert_eq!(swap_mask::<u16>(2), 0x3333);
    assert_eq!(swap_mask::<u16>(1), 0x5555);
  }

  #[test]
  fn mask_family_u64() {
    assert_eq!(swap_mask::<u64>(32), 0x0000_0000_FFFF_FFFF);
    assert_eq!(swap_mask::<u64>(8), 0x00FF_00FF_00FF_00FF);
    assert_eq!(swap_mask::<u64>(1), 0x5555_5555_5555_5555);
  }

  #[test]
  fn known_vectors() {
    assert_eq!(reflect_bits(0x0000_0001_u32, 32), 0x8000_0000);
    assert_eq!(reflect_bits(0x1234_5678_u32, 32), 0x1E6A_2C48);
    assert_eq!(reflect_bits(0x1_u8, 4), 0x8);
    assert_eq!(reflect_bits(0x01_u8, 8), 0x80);
    assert_eq!(reflect_bits(0x001_u16, 12), 0x800);
  }

  #[test]
  fn reflected_polynomials() {
    // The classic catalogue pairs.
    assert_eq!(reflect_bits(0x04C1_1DB7_u32, 32), 0xEDB8_8320);
    assert_eq!(reflect_bits(0x42F0_E1EB_A9EA_3693_u64, 64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn involution() {
    fn check<W: Word>(width: u32, samples: &[u64]) {
      for &s in samples {
        let value = W::from_u64(s) & W::MAX.shr(W::BITS - width);
        assert_eq!(
          reflect_bits(reflect_bits(value, width), width),
          value,
          "width {width}"
        );
      }
    }

    let samples = [
      0,
      1,
      0xA5,
      0x123,
      0xDEAD,
      0x0BAD_F00D,
      0x1234_5678,
      u64::MAX,
      0x8000_0000_0000_0001,
    ];
    check::<u8>(4, &samples);
    check::<u8>(8, &samples);
    check::<u16>(12, &samples);
    check::<u16>(16, &samples);
    check::<u32>(32, &samples);
    check::<u64>(64, &samples);
  }

  #[test]
  fn high_bits_ignored() {
    // Bits at or above `width` must not leak into the result.
    assert_eq!(reflect_bits(0xF001_u16, 12), reflect_bits(0x0001_u16, 12));
    assert_eq!(reflect_bits(0xFFFF_FF01_u32, 8), reflect_bits(0x01_u32, 8));
  }
}
