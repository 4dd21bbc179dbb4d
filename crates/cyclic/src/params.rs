//! CRC parameter sets.
//!
//! A CRC variant is fully described by five parameters, following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//! width, generator polynomial, initial register value, bit order for input
//! and output, and the final XOR mask. The polynomial, initial value, and
//! XOR mask are expressed in the *input* bit order's convention; the engine
//! normalizes them internally.

use core::fmt;

/// Bit order for processing input bytes and presenting the checksum.
///
/// Corresponds to the catalogue's `refin`/`refout` flags: [`Msb`](BitOrder::Msb)
/// is `false` (non-reflected), [`Lsb`](BitOrder::Lsb) is `true` (reflected).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
  /// Most-significant-bit-first (non-reflected).
  Msb,
  /// Least-significant-bit-first (reflected).
  Lsb,
}

/// The five parameters defining a CRC variant.
///
/// Values are carried in `u64` regardless of `width`; [`validate`](Self::validate)
/// rejects any value that needs more bits than the declared width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits, `8..=64`.
  pub width: u8,
  /// Generator polynomial (without the implicit high term), in `input_order`'s
  /// bit convention.
  pub polynomial: u64,
  /// Initial register value, in `input_order`'s bit convention.
  pub initial: u64,
  /// Bit order in which input bytes enter the register.
  pub input_order: BitOrder,
  /// Bit order of the finalized checksum.
  pub output_order: BitOrder,
  /// Value XOR-ed into the register during finalization.
  pub xor_out: u64,
}

impl CrcParams {
  /// CRC-32/BZIP2 (check value `0xFC891918`).
  pub const BZIP2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    input_order: BitOrder::Msb,
    output_order: BitOrder::Msb,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/PKZIP, the classic Ethernet/zlib/gzip CRC (check value
  /// `0xCBF43926`). Same polynomial as BZIP2, reflected processing.
  pub const PKZIP: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    input_order: BitOrder::Lsb,
    output_order: BitOrder::Lsb,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/CKSUM, as used by POSIX `cksum` (check value `0x765E7680`).
  pub const CKSUM: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0,
    input_order: BitOrder::Msb,
    output_order: BitOrder::Msb,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-64/ECMA-182 (check value `0x6C40DF5F0B497347`).
  ///
  /// Often confused with CRC-64/XZ, which shares the polynomial but uses
  /// reflected processing and non-zero init/xorout.
  pub const ECMA182: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0,
    input_order: BitOrder::Msb,
    output_order: BitOrder::Msb,
    xor_out: 0,
  };

  /// CRC-64/XZ, used by XZ Utils and 7-Zip (check value
  /// `0x995DC9BBDF1939FA`).
  pub const CRC64_XZ: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    input_order: BitOrder::Lsb,
    output_order: BitOrder::Lsb,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  };

  /// Mask covering the low `width` bits.
  #[must_use]
  pub const fn value_mask(&self) -> u64 {
    if self.width >= 64 {
      u64::MAX
    } else {
      (1u64 << self.width) - 1
    }
  }

  /// Check the parameter set for internal consistency.
  ///
  /// Rejects widths outside `8..=64` and any polynomial/initial/xorout value
  /// that does not fit in `width` bits. A rejected parameter set can never
  /// reach the engine; there is no silently-wrong-checksum path.
  pub const fn validate(&self) -> Result<(), ParamsError> {
    if self.width < 8 || self.width > 64 {
      return Err(ParamsError::UnsupportedWidth { width: self.width });
    }
    let mask = self.value_mask();
    if self.polynomial & !mask != 0 {
      return Err(ParamsError::ValueExceedsWidth {
        field: "polynomial",
        width: self.width,
      });
    }
    if self.initial & !mask != 0 {
      return Err(ParamsError::ValueExceedsWidth {
        field: "initial",
        width: self.width,
      });
    }
    if self.xor_out & !mask != 0 {
      return Err(ParamsError::ValueExceedsWidth {
        field: "xor_out",
        width: self.width,
      });
    }
    Ok(())
  }
}

// Every shipped preset must be valid; a bad constant is a build failure.
const _: () = {
  assert!(matches!(CrcParams::BZIP2.validate(), Ok(())));
  assert!(matches!(CrcParams::PKZIP.validate(), Ok(())));
  assert!(matches!(CrcParams::CKSUM.validate(), Ok(())));
  assert!(matches!(CrcParams::ECMA182.validate(), Ok(())));
  assert!(matches!(CrcParams::CRC64_XZ.validate(), Ok(())));
};

/// A rejected CRC parameter set.
///
/// Returned by [`CrcParams::validate`] and [`Crc::new`](crate::Crc::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamsError {
  /// The width is outside the supported `8..=64` range.
  UnsupportedWidth {
    /// The rejected width.
    width: u8,
  },
  /// The width does not fit the chosen storage type.
  StorageTooNarrow {
    /// The requested width.
    width: u8,
    /// Bits available in the storage type.
    storage_bits: u32,
  },
  /// A parameter value needs more bits than the declared width.
  ValueExceedsWidth {
    /// Which parameter was rejected.
    field: &'static str,
    /// The declared width.
    width: u8,
  },
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth { width } => {
        write!(f, "unsupported CRC width {width} (expected 8..=64)")
      }
      Self::StorageTooNarrow { width, storage_bits } => {
        write!(f, "CRC width {width} does not fit {storage_bits}-bit storage")
      }
      Self::ValueExceedsWidth { field, width } => {
        write!(f, "{field} does not fit in {width} bits")
      }
    }
  }
}

impl core::error::Error for ParamsError {}
