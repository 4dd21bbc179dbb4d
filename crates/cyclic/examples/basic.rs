//! Basic usage: presets, streaming, and the raw engine.
//!
//! Run with: `cargo run --example basic -p cyclic`

use cyclic::{Checksum, Crc, Crc64Xz, CrcParams, Pkzip, Uint};

fn main() {
  let data = b"123456789";

  // One-shot preset computation.
  let crc32 = Pkzip::checksum(data);
  println!("CRC-32/PKZIP: 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let crc64 = Crc64Xz::checksum(data);
  println!("CRC-64/XZ:    0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  // Streaming.
  let mut hasher = Pkzip::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  assert_eq!(hasher.finalize(), crc32);

  // Any catalogue variant through the raw engine, here CRC-32/CKSUM.
  let mut crc: Crc<Uint<32>> = Crc::new(CrcParams::CKSUM).expect("preset params are valid");
  crc.update_tabled(data);
  println!("CRC-32/CKSUM: 0x{:08X}", crc.finalize());
  assert_eq!(crc.finalize(), 0x765E_7680);
}
