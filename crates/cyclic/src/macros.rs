//! Internal macros for CRC variant generation.
//!
//! The named presets share identical structure and differ only in their
//! parameter constant and register width; `define_crc_variant!` stamps out
//! the wrapper type, its inherent API, and the trait implementations.

/// Generate a named CRC variant over [`Crc`](crate::Crc).
///
/// This macro creates:
/// - the struct definition wrapping an engine of the given register type
/// - `new()` (cloning a `OnceLock`-cached prototype under `std`, so the
///   lookup table is derived once per preset per process)
/// - `update_bitwise()` and `resume()` inherent methods
/// - `Default`, `Debug`, and [`Checksum`](crate::Checksum) implementations
macro_rules! define_crc_variant {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($word:ty) = $params:expr;
  ) => {
    $(#[$outer])*
    #[derive(Clone)]
    $vis struct $name {
      inner: $crate::Crc<$word>,
    }

    impl $name {
      /// The variant's parameter set.
      pub const PARAMS: $crate::CrcParams = $params;

      /// Create a hasher initialized with the variant's initial value.
      #[must_use]
      pub fn new() -> Self {
        #[cfg(feature = "std")]
        {
          use std::sync::OnceLock;
          static PROTO: OnceLock<$crate::Crc<$word>> = OnceLock::new();
          // PARAMS is const-validated in params.rs; from_checked cannot
          // observe a bad parameter set.
          let proto = PROTO.get_or_init(|| $crate::Crc::from_checked(Self::PARAMS));
          Self { inner: proto.clone() }
        }
        #[cfg(not(feature = "std"))]
        {
          Self { inner: $crate::Crc::from_checked(Self::PARAMS) }
        }
      }

      /// Feed bytes through the bit-at-a-time reference algorithm.
      ///
      /// Produces the same results as [`Checksum::update`](crate::Checksum::update)
      /// (the table-driven path); kept public as the verification oracle.
      pub fn update_bitwise(&mut self, data: &[u8]) {
        self.inner.update_bitwise(data);
      }

      /// Create a hasher resuming from a previously finalized CRC.
      #[must_use]
      pub fn resume(crc: $word) -> Self {
        let mut hasher = Self::new();
        hasher.inner.resume(crc);
        hasher
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl core::fmt::Debug for $name {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(stringify!($name)).finish_non_exhaustive()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$word>();

      type Output = $word;

      #[inline]
      fn new() -> Self {
        Self::new()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.inner.update_tabled(data);
      }

      #[inline]
      fn finalize(&self) -> $word {
        self.inner.finalize()
      }

      #[inline]
      fn reset(&mut self) {
        self.inner.reset();
      }
    }
  };
}
