//! The width-generic CRC engine.
//!
//! [`Crc`] holds one running checksum register of a caller-chosen storage
//! width and exposes two equivalent update algorithms:
//!
//! - [`update_bitwise`](Crc::update_bitwise): the bit-at-a-time reference,
//!   trivially checkable against published test vectors and the oracle the
//!   table-driven path is verified against.
//! - [`update_tabled`](Crc::update_tabled): the Sarwate algorithm, one
//!   256-entry table lookup per byte. The production path.
//!
//! Both operate on the same register representation, so they may be freely
//! interleaved within one accumulation.
//!
//! # Internal convention
//!
//! MSB-first and LSB-first processing are mirror-image shift loops, not one
//! unified loop with per-byte branching. The polynomial and initial value
//! are reflected once at construction when the input order is LSB-first, so
//! each per-mode loop runs with parameters already in its own convention.
//! The bit order is examined once per update call, outside the per-byte
//! loop.

use crate::params::{BitOrder, CrcParams, ParamsError};
use crate::reflect::reflect_bits;
use crate::width::Word;

/// A running CRC computation over a fixed parameter set.
///
/// `W` is the register storage type, normally chosen through
/// [`Uint`](crate::Uint) so that it is the narrowest type holding the
/// parameter width. A wider storage type is accepted and produces identical
/// checksums.
///
/// ```
/// use cyclic::{Crc, CrcParams, Uint};
///
/// let mut crc: Crc<Uint<32>> = Crc::new(CrcParams::PKZIP)?;
/// crc.update_tabled(b"123456789");
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// # Ok::<(), cyclic::ParamsError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Crc<W: Word> {
  /// The running register.
  checksum: W,
  /// Working initial value (already reflected for LSB-first input).
  initial: W,
  /// Working polynomial (already reflected for LSB-first input).
  poly: W,
  xor_out: W,
  /// Top bit of the `width`-bit register, `1 << (width - 1)`.
  msb: W,
  /// Low `width` bits set.
  mask: W,
  width: u32,
  input_order: BitOrder,
  output_order: BitOrder,
  /// Sarwate lookup table derived from `poly`; `table[0]` is always zero.
  table: [W; 256],
}

impl<W: Word> Crc<W> {
  /// Build an engine for `params`.
  ///
  /// # Errors
  ///
  /// Returns [`ParamsError`] when the parameter set is internally
  /// inconsistent (see [`CrcParams::validate`]) or when `params.width`
  /// exceeds `W::BITS`.
  pub fn new(params: CrcParams) -> Result<Self, ParamsError> {
    params.validate()?;
    if u32::from(params.width) > W::BITS {
      return Err(ParamsError::StorageTooNarrow {
        width: params.width,
        storage_bits: W::BITS,
      });
    }
    Ok(Self::from_checked(params))
  }

  /// Build an engine from a parameter set already known to be valid.
  ///
  /// Callers must have run [`CrcParams::validate`] (or hold a compile-time
  /// proof, as the preset constants do) and ensured `width <= W::BITS`.
  pub(crate) fn from_checked(params: CrcParams) -> Self {
    debug_assert!(params.validate().is_ok());
    debug_assert!(u32::from(params.width) <= W::BITS);

    let width = u32::from(params.width);
    let msb = W::ONE.shl(width - 1);
    let mask = msb.shl(1).wrapping_sub(W::ONE);

    let (poly, initial) = match params.input_order {
      BitOrder::Msb => (W::from_u64(params.polynomial), W::from_u64(params.initial)),
      BitOrder::Lsb => (
        reflect_bits(W::from_u64(params.polynomial), width),
        reflect_bits(W::from_u64(params.initial), width),
      ),
    };

    Self {
      checksum: initial,
      initial,
      poly,
      xor_out: W::from_u64(params.xor_out),
      msb,
      mask,
      width,
      input_order: params.input_order,
      output_order: params.output_order,
      table: build_table(params.input_order, poly, msb),
    }
  }

  /// The parameter width in bits.
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Advance the register using the bit-at-a-time reference algorithm.
  ///
  /// Eight conditional shift steps per byte. Accepts any byte slice,
  /// including empty (a no-op).
  pub fn update_bitwise(&mut self, data: &[u8]) {
    match self.input_order {
      BitOrder::Msb => {
        let inject = self.width - 8;
        for &byte in data {
          self.checksum = self.checksum ^ W::from_byte(byte).shl(inject);
          for _ in 0..8 {
            self.checksum = step_msb(self.checksum, self.poly, self.msb);
          }
        }
      }
      BitOrder::Lsb => {
        for &byte in data {
          self.checksum = self.checksum ^ W::from_byte(byte);
          for _ in 0..8 {
            self.checksum = step_lsb(self.checksum, self.poly);
          }
        }
      }
    }
  }

  /// Advance the register using the table-driven Sarwate algorithm.
  ///
  /// One table lookup per byte; byte-for-byte identical results to
  /// [`update_bitwise`](Self::update_bitwise).
  #[allow(clippy::indexing_slicing)] // index is a u8 into a [W; 256]
  pub fn update_tabled(&mut self, data: &[u8]) {
    match self.input_order {
      BitOrder::Msb => {
        let top = self.width - 8;
        for &byte in data {
          let index = byte ^ self.checksum.shr(top).low_byte();
          self.checksum = self.checksum.shl(8) ^ self.table[index as usize];
        }
      }
      BitOrder::Lsb => {
        for &byte in data {
          let index = byte ^ self.checksum.low_byte();
          self.checksum = self.checksum.shr(8) ^ self.table[index as usize];
        }
      }
    }
  }

  /// Project the finalized checksum out of the register.
  ///
  /// Applies the final XOR, reflects when input and output bit orders
  /// differ, and masks to the parameter width. Read-only and idempotent;
  /// the register remains usable for further updates.
  #[must_use]
  pub fn finalize(&self) -> W {
    let value = self.checksum ^ self.xor_out;
    let out = if self.input_order == self.output_order {
      value
    } else {
      reflect_bits(value, self.width)
    };
    out & self.mask
  }

  /// Restore the register to the initial value.
  pub fn reset(&mut self) {
    self.checksum = self.initial;
  }

  /// Replace the register with the state that finalizes to `crc`.
  ///
  /// Inverse of [`finalize`](Self::finalize): feeding more bytes afterwards
  /// continues the checksum that produced `crc`.
  pub fn resume(&mut self, crc: W) {
    let value = crc & self.mask;
    let raw = if self.input_order == self.output_order {
      value
    } else {
      reflect_bits(value, self.width)
    };
    self.checksum = raw ^ self.xor_out;
  }

  #[cfg(test)]
  pub(crate) fn table(&self) -> &[W; 256] {
    &self.table
  }
}

/// One MSB-first shift step: shift left, XOR the polynomial if the bit
/// shifted out of the top of the `width`-bit register was set.
#[inline]
fn step_msb<W: Word>(checksum: W, poly: W, msb: W) -> W {
  let shifted = checksum.shl(1);
  if checksum & msb != W::ZERO {
    shifted ^ poly
  } else {
    shifted
  }
}

/// One LSB-first shift step: shift right, XOR the (reflected) polynomial if
/// the bit shifted out of the bottom was set.
#[inline]
fn step_lsb<W: Word>(checksum: W, poly: W) -> W {
  let shifted = checksum.shr(1);
  if checksum & W::ONE != W::ZERO {
    shifted ^ poly
  } else {
    shifted
  }
}

/// Derive the 256-entry Sarwate table from the working polynomial.
///
/// Entry `k` is the bitwise CRC of the single byte `k` (LSB-first) or of
/// `k` placed in the register's top byte (MSB-first). Only the eight
/// single-bit bytes are computed with shift steps; the CRC contribution of
/// a byte is the XOR of the contributions of its set bits, so the other
/// 248 entries are filled by XOR combination.
#[allow(clippy::indexing_slicing)] // all indices are bounded sums below 256
fn build_table<W: Word>(order: BitOrder, poly: W, msb: W) -> [W; 256] {
  let mut table = [W::ZERO; 256];
  match order {
    BitOrder::Msb => {
      // table[1] needs the CRC step of the lowest bit of the top byte,
      // i.e. one step of the register holding only `msb`.
      let mut checksum = msb;
      let mut bit: usize = 0x01;
      while bit != 0x100 {
        checksum = step_msb(checksum, poly, msb);
        for low in 0..bit {
          table[bit + low] = checksum ^ table[low];
        }
        bit <<= 1;
      }
    }
    BitOrder::Lsb => {
      let mut checksum = W::ONE;
      let mut bit: usize = 0x80;
      while bit != 0 {
        checksum = step_lsb(checksum, poly);
        // Combine with every already-filled entry whose bits all sit
        // above `bit`.
        let stride = bit << 1;
        let mut high = 0;
        while high < 256 {
          table[bit + high] = checksum ^ table[high];
          high += stride;
        }
        bit >>= 1;
      }
    }
  }
  table
}
