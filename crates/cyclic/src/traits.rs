//! The checksum hasher trait.
//!
//! A thin streaming interface over the engine: construct, feed byte ranges,
//! read the finalized value. Implemented by the named preset types.

use core::fmt::Debug;

/// Streaming checksum computation.
///
/// # Implementor requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not consume accumulated state
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u32` for CRC-32, `u64` for CRC-64).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the variant's initial value.
  #[must_use]
  fn new() -> Self;

  /// Feed additional bytes into the running checksum.
  ///
  /// May be called any number of times; an empty slice is a no-op.
  fn update(&mut self, data: &[u8]);

  /// Feed multiple non-contiguous buffers, in order.
  ///
  /// Identical semantics to calling [`update`](Self::update) on each buffer.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// Does not consume or reset the hasher; further updates continue the
  /// accumulation.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Restore the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut hasher = Self::new();
    hasher.update(data);
    hasher.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut hasher = Self::new();
    hasher.update_vectored(bufs);
    hasher.finalize()
  }
}
