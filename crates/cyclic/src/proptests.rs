//! Property tests: algorithm equivalence and cross-library validation.
//!
//! The primary correctness property is that the bitwise reference and the
//! table-driven Sarwate algorithm agree on every input, including under
//! arbitrary interleavings of the two on one running register. Presets are
//! additionally validated against the `crc-fast` crate as an independent
//! reference.

extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use crate::{Bzip2, Checksum, Cksum, Crc, Crc64Xz, CrcParams, Ecma182, Pkzip, Uint};

const ALL_PARAMS: [CrcParams; 5] = [
  CrcParams::BZIP2,
  CrcParams::PKZIP,
  CrcParams::CKSUM,
  CrcParams::ECMA182,
  CrcParams::CRC64_XZ,
];

/// Run `params` through both algorithms over `data` and assert they
/// finalize identically.
fn assert_paths_agree(params: CrcParams, data: &[u8]) {
  let mut bitwise: Crc<Uint<64>> = Crc::new(params).unwrap();
  let mut tabled: Crc<Uint<64>> = Crc::new(params).unwrap();
  bitwise.update_bitwise(data);
  tabled.update_tabled(data);
  assert_eq!(
    bitwise.finalize(),
    tabled.finalize(),
    "algorithm divergence for {params:?}"
  );
}

proptest! {
  #[test]
  fn bitwise_and_tabled_agree(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    for params in ALL_PARAMS {
      assert_paths_agree(params, &data);
    }
  }

  #[test]
  fn interleaved_algorithms_agree(
    chunks in proptest::collection::vec((proptest::collection::vec(any::<u8>(), 0..=64), any::<bool>()), 0..=32)
  ) {
    for params in ALL_PARAMS {
      let mut mixed: Crc<Uint<64>> = Crc::new(params).unwrap();
      let mut pure: Crc<Uint<64>> = Crc::new(params).unwrap();

      for (chunk, use_table) in &chunks {
        if *use_table {
          mixed.update_tabled(chunk);
        } else {
          mixed.update_bitwise(chunk);
        }
        pure.update_tabled(chunk);
      }

      prop_assert_eq!(mixed.finalize(), pure.finalize());
    }
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn pkzip_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Pkzip::checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn bzip2_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Bzip2::checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn cksum_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Cksum::checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Cksum, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn ecma182_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Ecma182::checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc64Ecma182, &data);
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc64_xz_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc64Xz::checksum(&data);
    let reference = crc_fast::checksum(CrcAlgorithm::Crc64Xz, &data);
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn pkzip_streaming_matches_crc_fast(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257,
  ) {
    let mut ours = Pkzip::new();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32IsoHdlc);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u32);
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Structural properties
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn chunking_is_associative(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    for params in ALL_PARAMS {
      let mut chunked: Crc<Uint<64>> = Crc::new(params).unwrap();
      chunked.update_tabled(a);
      chunked.update_tabled(b);

      let mut oneshot: Crc<Uint<64>> = Crc::new(params).unwrap();
      oneshot.update_tabled(&data);

      prop_assert_eq!(chunked.finalize(), oneshot.finalize());
    }
  }

  #[test]
  fn single_byte_changes_crc(data in proptest::collection::vec(any::<u8>(), 1..=512), flip in any::<usize>()) {
    // Flipping one bit must change the checksum (CRC detects all
    // single-bit errors).
    let index = flip % data.len();
    let mut corrupted: Vec<u8> = data.clone();
    corrupted[index] ^= 1;

    prop_assert_ne!(Pkzip::checksum(&data), Pkzip::checksum(&corrupted));
    prop_assert_ne!(Crc64Xz::checksum(&data), Crc64Xz::checksum(&corrupted));
  }
}
