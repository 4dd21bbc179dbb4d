//! CRC-64 presets.
//!
//! Both use the ECMA-182 polynomial 0x42F0E1EBA9EA3693:
//!
//! | Type | refin/refout | init | xorout | check |
//! |------|--------------|------|--------|-------|
//! | [`Ecma182`] | false/false | `0` | `0` | `0x6C40DF5F0B497347` |
//! | [`Crc64Xz`] | true/true | all ones | all ones | `0x995DC9BBDF1939FA` |

use crate::width::Uint;
use crate::CrcParams;

define_crc_variant! {
  /// CRC-64/ECMA-182 (MSB-first, zero init and xorout).
  ///
  /// Often misidentified as "the" CRC-64/ECMA; the reflected variant with
  /// all-ones init/xorout is [`Crc64Xz`].
  pub struct Ecma182(Uint<64>) = CrcParams::ECMA182;
}

define_crc_variant! {
  /// CRC-64/XZ (LSB-first), used by XZ Utils and 7-Zip.
  ///
  /// ```
  /// use cyclic::{Checksum, Crc64Xz};
  ///
  /// assert_eq!(Crc64Xz::checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
  /// ```
  pub struct Crc64Xz(Uint<64>) = CrcParams::CRC64_XZ;
}
