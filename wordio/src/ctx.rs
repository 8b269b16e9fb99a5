//! Types that give context to loads and stores.

/// The endianness, or byte order, of fixed-width words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Big-endian (most-significant-byte first).
    Big,
    /// Little-endian (least-significant-byte first).
    Little,
}

impl Endian {
    /// The native endianness of the target architecture.
    ///
    /// **Warning** - This should not be used for cross-platform I/O in general. Data stored in
    /// native order cannot be read back on a host with the opposite byte order.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        let endian = Self::Big;

        #[cfg(target_endian = "little")]
        let endian = Self::Little;

        endian
    }

    /// "Network-endian", an alias for big-endian, the default endianness.
    pub const fn network() -> Self {
        Self::Big
    }

    /// Returns `true` if words in this order can be copied to and from the host's in-memory
    /// representation without reordering bytes.
    ///
    /// This follows the build-time flags in [`endian`](crate::endian), so big-endian is only
    /// reported as matching when the `native-big-endian` feature is enabled.
    pub const fn is_native(self) -> bool {
        match self {
            Self::Little => crate::endian::NATIVE_LITTLE_ENDIAN,
            Self::Big => crate::endian::NATIVE_BIG_ENDIAN,
        }
    }
}

impl Default for Endian {
    /// (Network- / Big-endian) The default endianness used to load and store words.
    fn default() -> Self {
        Self::network()
    }
}
