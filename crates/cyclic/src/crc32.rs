//! CRC-32 presets.
//!
//! All three share the 0x04C11DB7 polynomial and differ only in bit order
//! and initial value:
//!
//! | Type | refin/refout | init | xorout | check |
//! |------|--------------|------|--------|-------|
//! | [`Bzip2`] | false/false | `0xFFFFFFFF` | `0xFFFFFFFF` | `0xFC891918` |
//! | [`Pkzip`] | true/true | `0xFFFFFFFF` | `0xFFFFFFFF` | `0xCBF43926` |
//! | [`Cksum`] | false/false | `0` | `0xFFFFFFFF` | `0x765E7680` |

use crate::width::Uint;
use crate::CrcParams;

define_crc_variant! {
  /// CRC-32/BZIP2 (MSB-first), used by bzip2 and MPEG-2.
  ///
  /// ```
  /// use cyclic::{Bzip2, Checksum};
  ///
  /// assert_eq!(Bzip2::checksum(b"123456789"), 0xFC89_1918);
  /// ```
  pub struct Bzip2(Uint<32>) = CrcParams::BZIP2;
}

define_crc_variant! {
  /// CRC-32/PKZIP (LSB-first), the classic Ethernet/zlib/gzip/PNG CRC.
  ///
  /// ```
  /// use cyclic::{Checksum, Pkzip};
  ///
  /// let mut hasher = Pkzip::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xCBF4_3926);
  /// ```
  pub struct Pkzip(Uint<32>) = CrcParams::PKZIP;
}

define_crc_variant! {
  /// CRC-32/CKSUM (MSB-first, zero initial value), used by POSIX `cksum`.
  pub struct Cksum(Uint<32>) = CrcParams::CKSUM;
}
