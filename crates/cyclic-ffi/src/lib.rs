//! C ABI for the cyclic CRC presets.
//!
//! One exported function per named variant, each with the same shape:
//! compute the checksum over a raw byte buffer of the given length and
//! return the finalized value. Intended for cross-validation from external
//! test drivers (e.g. a Python harness comparing `cyclic_crc32_pkzip`
//! against `zlib.crc32`).
//!
//! ## Building
//!
//! ```bash
//! cargo build --release -p cyclic-ffi
//! ```
//!
//! This produces `target/release/libcyclic.so` (shared) and
//! `libcyclic.a` (static); the matching declarations live in
//! `include/cyclic.h`.
//!
//! ## Usage from C
//!
//! ```c
//! #include <cyclic.h>
//!
//! uint32_t crc = cyclic_crc32_pkzip(buf, len);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(unsafe_op_in_unsafe_fn)]

use core::slice;

use cyclic::{Bzip2, Checksum, Cksum, Crc64Xz, Ecma182, Pkzip};

/// View a raw C buffer as a byte slice, treating NULL or zero length as
/// the empty input.
///
/// # Safety
///
/// When `data` is non-null, it must be valid for reads of `len` bytes for
/// the duration of the call.
unsafe fn bytes<'a>(data: *const u8, len: usize) -> &'a [u8] {
  if data.is_null() || len == 0 {
    &[]
  } else {
    // SAFETY: non-null and readable for `len` bytes per the caller contract.
    unsafe { slice::from_raw_parts(data, len) }
  }
}

/// CRC-32/PKZIP (the zlib/Ethernet CRC) over `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be NULL or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn cyclic_crc32_pkzip(data: *const u8, len: usize) -> u32 {
  Pkzip::checksum(unsafe { bytes(data, len) })
}

/// CRC-32/BZIP2 over `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be NULL or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn cyclic_crc32_bzip2(data: *const u8, len: usize) -> u32 {
  Bzip2::checksum(unsafe { bytes(data, len) })
}

/// CRC-32/CKSUM over `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be NULL or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn cyclic_crc32_cksum(data: *const u8, len: usize) -> u32 {
  Cksum::checksum(unsafe { bytes(data, len) })
}

/// CRC-64/ECMA-182 over `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be NULL or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn cyclic_crc64_ecma182(data: *const u8, len: usize) -> u64 {
  Ecma182::checksum(unsafe { bytes(data, len) })
}

/// CRC-64/XZ over `len` bytes at `data`.
///
/// # Safety
///
/// `data` must be NULL or valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn cyclic_crc64_xz(data: *const u8, len: usize) -> u64 {
  Crc64Xz::checksum(unsafe { bytes(data, len) })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_and_empty_are_equivalent() {
    let buf: [u8; 0] = [];
    let empty = unsafe { cyclic_crc32_pkzip(buf.as_ptr(), 0) };
    let null = unsafe { cyclic_crc32_pkzip(core::ptr::null(), 0) };
    let null_with_len = unsafe { cyclic_crc32_pkzip(core::ptr::null(), 42) };
    assert_eq!(empty, null);
    assert_eq!(empty, null_with_len);
    assert_eq!(empty, 0);
  }

  #[test]
  fn check_values_through_the_boundary() {
    let data = b"123456789";
    unsafe {
      assert_eq!(cyclic_crc32_pkzip(data.as_ptr(), data.len()), 0xCBF4_3926);
      assert_eq!(cyclic_crc32_bzip2(data.as_ptr(), data.len()), 0xFC89_1918);
      assert_eq!(cyclic_crc32_cksum(data.as_ptr(), data.len()), 0x765E_7680);
      assert_eq!(cyclic_crc64_ecma182(data.as_ptr(), data.len()), 0x6C40_DF5F_0B49_7347);
      assert_eq!(cyclic_crc64_xz(data.as_ptr(), data.len()), 0x995D_C9BB_DF19_39FA);
    }
  }
}
