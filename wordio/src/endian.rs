//! Loading and storing fixed-width words in a given byte order.
//!
//! Each function takes a fixed-length array, so the buffer size is checked by the type system.
//! When the host already stores integers in the requested order, the conversion is a plain copy
//! of the word's in-memory representation (see [`native`]); otherwise the bytes are assembled
//! one at a time (see [`portable`]). Both paths produce identical results.
//!
//! # Example
//!
//! ```
//! use wordio::endian::{load32_le, store32_be, store32_le};
//!
//! let mut buf = [0u8; 4];
//! store32_le(&mut buf, 0x01020304);
//! assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
//! assert_eq!(load32_le(&buf), 0x01020304);
//!
//! store32_be(&mut buf, 0x01020304);
//! assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
//! ```

/// `true` if the target stores integers little-endian in memory.
pub const NATIVE_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// `true` if the big-endian functions may copy the host representation directly.
///
/// Only set on big-endian targets built with the `native-big-endian` feature; otherwise the
/// big-endian functions always assemble bytes explicitly.
pub const NATIVE_BIG_ENDIAN: bool =
    cfg!(all(target_endian = "big", feature = "native-big-endian"));

/// Reads a little-endian `u32` from `src`.
#[inline]
pub const fn load32_le(src: &[u8; 4]) -> u32 {
    if NATIVE_LITTLE_ENDIAN {
        native::load32(src)
    } else {
        portable::load32_le(src)
    }
}

/// Writes `w` to `dst` as a little-endian `u32`.
#[inline]
pub fn store32_le(dst: &mut [u8; 4], w: u32) {
    if NATIVE_LITTLE_ENDIAN {
        native::store32(dst, w)
    } else {
        portable::store32_le(dst, w)
    }
}

/// Reads a little-endian `u64` from `src`.
#[inline]
pub const fn load64_le(src: &[u8; 8]) -> u64 {
    if NATIVE_LITTLE_ENDIAN {
        native::load64(src)
    } else {
        portable::load64_le(src)
    }
}

/// Writes `w` to `dst` as a little-endian `u64`.
#[inline]
pub fn store64_le(dst: &mut [u8; 8], w: u64) {
    if NATIVE_LITTLE_ENDIAN {
        native::store64(dst, w)
    } else {
        portable::store64_le(dst, w)
    }
}

/// Reads a big-endian `u32` from `src`.
#[inline]
pub const fn load32_be(src: &[u8; 4]) -> u32 {
    if NATIVE_BIG_ENDIAN {
        native::load32(src)
    } else {
        portable::load32_be(src)
    }
}

/// Writes `w` to `dst` as a big-endian `u32`.
#[inline]
pub fn store32_be(dst: &mut [u8; 4], w: u32) {
    if NATIVE_BIG_ENDIAN {
        native::store32(dst, w)
    } else {
        portable::store32_be(dst, w)
    }
}

/// Reads a big-endian `u64` from `src`.
#[inline]
pub const fn load64_be(src: &[u8; 8]) -> u64 {
    if NATIVE_BIG_ENDIAN {
        native::load64(src)
    } else {
        portable::load64_be(src)
    }
}

/// Writes `w` to `dst` as a big-endian `u64`.
#[inline]
pub fn store64_be(dst: &mut [u8; 8], w: u64) {
    if NATIVE_BIG_ENDIAN {
        native::store64(dst, w)
    } else {
        portable::store64_be(dst, w)
    }
}

/// Raw copies between a word and its in-memory representation on this host.
///
/// The result is in native order, so these are only a valid little- or big-endian codec when
/// [`NATIVE_LITTLE_ENDIAN`] or [`NATIVE_BIG_ENDIAN`] says so.
pub mod native {
    /// Copies 4 bytes into a `u32` as the host lays it out.
    #[inline]
    pub const fn load32(src: &[u8; 4]) -> u32 {
        u32::from_ne_bytes(*src)
    }

    /// Copies the host representation of `w` into `dst`.
    #[inline]
    pub fn store32(dst: &mut [u8; 4], w: u32) {
        *dst = w.to_ne_bytes();
    }

    /// Copies 8 bytes into a `u64` as the host lays it out.
    #[inline]
    pub const fn load64(src: &[u8; 8]) -> u64 {
        u64::from_ne_bytes(*src)
    }

    /// Copies the host representation of `w` into `dst`.
    #[inline]
    pub fn store64(dst: &mut [u8; 8], w: u64) {
        *dst = w.to_ne_bytes();
    }
}

/// Byte-at-a-time conversions that do not depend on the host byte order.
pub mod portable {
    /// Assembles a `u32` from little-endian bytes.
    pub const fn load32_le(src: &[u8; 4]) -> u32 {
        (src[0] as u32)
            | (src[1] as u32) << 8
            | (src[2] as u32) << 16
            | (src[3] as u32) << 24
    }

    /// Splits `w` into little-endian bytes.
    pub fn store32_le(dst: &mut [u8; 4], mut w: u32) {
        dst[0] = w as u8;
        w >>= 8;
        dst[1] = w as u8;
        w >>= 8;
        dst[2] = w as u8;
        w >>= 8;
        dst[3] = w as u8;
    }

    /// Assembles a `u64` from little-endian bytes.
    pub const fn load64_le(src: &[u8; 8]) -> u64 {
        (src[0] as u64)
            | (src[1] as u64) << 8
            | (src[2] as u64) << 16
            | (src[3] as u64) << 24
            | (src[4] as u64) << 32
            | (src[5] as u64) << 40
            | (src[6] as u64) << 48
            | (src[7] as u64) << 56
    }

    /// Splits `w` into little-endian bytes.
    pub fn store64_le(dst: &mut [u8; 8], mut w: u64) {
        dst[0] = w as u8;
        w >>= 8;
        dst[1] = w as u8;
        w >>= 8;
        dst[2] = w as u8;
        w >>= 8;
        dst[3] = w as u8;
        w >>= 8;
        dst[4] = w as u8;
        w >>= 8;
        dst[5] = w as u8;
        w >>= 8;
        dst[6] = w as u8;
        w >>= 8;
        dst[7] = w as u8;
    }

    /// Assembles a `u32` from big-endian bytes.
    pub const fn load32_be(src: &[u8; 4]) -> u32 {
        (src[3] as u32)
            | (src[2] as u32) << 8
            | (src[1] as u32) << 16
            | (src[0] as u32) << 24
    }

    /// Splits `w` into big-endian bytes.
    pub fn store32_be(dst: &mut [u8; 4], mut w: u32) {
        dst[3] = w as u8;
        w >>= 8;
        dst[2] = w as u8;
        w >>= 8;
        dst[1] = w as u8;
        w >>= 8;
        dst[0] = w as u8;
    }

    /// Assembles a `u64` from big-endian bytes.
    pub const fn load64_be(src: &[u8; 8]) -> u64 {
        (src[7] as u64)
            | (src[6] as u64) << 8
            | (src[5] as u64) << 16
            | (src[4] as u64) << 24
            | (src[3] as u64) << 32
            | (src[2] as u64) << 40
            | (src[1] as u64) << 48
            | (src[0] as u64) << 56
    }

    /// Splits `w` into big-endian bytes.
    pub fn store64_be(dst: &mut [u8; 8], mut w: u64) {
        dst[7] = w as u8;
        w >>= 8;
        dst[6] = w as u8;
        w >>= 8;
        dst[5] = w as u8;
        w >>= 8;
        dst[4] = w as u8;
        w >>= 8;
        dst[3] = w as u8;
        w >>= 8;
        dst[2] = w as u8;
        w >>= 8;
        dst[1] = w as u8;
        w >>= 8;
        dst[0] = w as u8;
    }
}
