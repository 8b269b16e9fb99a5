//! Fixed-width byte-order load/store primitives.
//!
//! The core of the crate is the eight functions in [`endian`], which convert `u32` and `u64`
//! words to and from little- or big-endian byte arrays without depending on the host's byte
//! order. On top of these, the [`Codec`] trait (and its derive macro) describes values with a
//! fixed byte layout, such as the words of a cipher block or a hash state.
//!
//! # Example
//!
//! ```
//! use wordio::Codec;
//! use wordio::ctx::Endian;
//!
//! #[derive(Debug, PartialEq, Codec)]
//! struct Header {
//!     magic: [u8; 4],
//!     len: u32,
//!     #[wordio(endian = "little")]
//!     checksum: u64,
//! }
//!
//! let header = Header {
//!     magic: *b"WORD",
//!     len: 0x0102,
//!     checksum: 0xaabb,
//! };
//!
//! let bytes = header.to_bytes(Endian::Big);
//! assert_eq!(bytes, *b"WORD\x00\x00\x01\x02\xbb\xaa\x00\x00\x00\x00\x00\x00");
//! assert_eq!(Header::load(&bytes, Endian::Big), header);
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod ctx;
pub mod endian;
mod error;
pub mod rotate;
pub mod util;

#[cfg(feature = "derive")]
pub mod derive;

#[cfg(feature = "derive")]
pub use wordio_derive::Codec;

#[doc(inline)]
pub use self::endian::{
    load32_be, load32_le, load64_be, load64_le, store32_be, store32_le, store64_be, store64_le,
};
#[doc(inline)]
pub use self::error::Error;
#[doc(inline)]
pub use self::rotate::{rotl32, rotl64, rotr32, rotr64};

use self::ctx::Endian;
use std::convert::TryFrom;
use std::mem;

const_assert!(u8::BITS == 8, "bytes must be 8 bits wide");
const_assert!(mem::size_of::<u32>() == 4, "u32 must occupy 4 bytes");
const_assert!(mem::size_of::<u64>() == 8, "u64 must occupy 8 bytes");
const_assert!(ZERO_LEN == 64, "the zero buffer must cover 64 bytes");

/// 64 zero bytes, for callers that need a guaranteed-zero region such as padding.
///
/// ```
/// let pad = &wordio::ZERO[..7];
/// assert!(pad.iter().all(|&b| b == 0));
/// ```
pub static ZERO: [u8; ZERO_LEN] = [0; ZERO_LEN];

/// The length of [`ZERO`].
pub const ZERO_LEN: usize = 64;

/// A fixed-length byte array, the storage of a [`Codec`] value.
///
/// Implemented for every `[u8; N]`.
pub trait ByteArray: Copy {
    /// The number of bytes in the array.
    const LEN: usize;

    /// Returns an array filled with zeros.
    fn zeroed() -> Self;

    /// Views the array as a slice.
    fn bytes(&self) -> &[u8];

    /// Views the array as a mutable slice.
    fn bytes_mut(&mut self) -> &mut [u8];

    /// Copies `src` into a new array, failing unless `src` has exactly `LEN` bytes.
    fn from_slice(src: &[u8]) -> Result<Self, Error>;

    /// Borrows `dst` as an array, failing unless `dst` has exactly `LEN` bytes.
    fn from_mut_slice(dst: &mut [u8]) -> Result<&mut Self, Error>;
}

impl<const N: usize> ByteArray for [u8; N] {
    const LEN: usize = N;

    fn zeroed() -> Self {
        [0; N]
    }

    fn bytes(&self) -> &[u8] {
        self
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }

    fn from_slice(src: &[u8]) -> Result<Self, Error> {
        let len = src.len();
        <[u8; N]>::try_from(src).map_err(|e| Error::length_mismatch(N, len, e))
    }

    fn from_mut_slice(dst: &mut [u8]) -> Result<&mut Self, Error> {
        let len = dst.len();
        <&mut [u8; N]>::try_from(dst).map_err(|e| Error::length_mismatch(N, len, e))
    }
}

/// A value with a fixed-size byte representation.
///
/// Implementations exist for `u32` and `u64`, which use the given [`Endian`], and for byte
/// arrays, which are copied as-is. Structs made of `Codec` fields can derive it; fields are laid
/// out in declaration order with no padding. See the [`derive`] module for the attributes.
pub trait Codec: Sized {
    /// The byte array holding the encoded value.
    type Bytes: ByteArray;

    /// Reads a value from `src`.
    fn load(src: &Self::Bytes, endian: Endian) -> Self;

    /// Writes `self` to `dst`, overwriting every byte.
    fn store(&self, dst: &mut Self::Bytes, endian: Endian);

    /// Returns the encoded bytes of `self`.
    fn to_bytes(&self, endian: Endian) -> Self::Bytes {
        let mut bytes = <Self::Bytes as ByteArray>::zeroed();
        self.store(&mut bytes, endian);
        bytes
    }

    /// Reads a value from a slice that must be exactly as long as `Self::Bytes`.
    ///
    /// ```
    /// use wordio::Codec;
    /// use wordio::ctx::Endian;
    ///
    /// assert_eq!(u32::load_slice(&[0, 0, 1, 0], Endian::Big).unwrap(), 0x100);
    /// assert!(u32::load_slice(&[0, 0, 1], Endian::Big).is_err());
    /// ```
    fn load_slice(src: &[u8], endian: Endian) -> Result<Self, Error> {
        let bytes = <Self::Bytes as ByteArray>::from_slice(src)?;
        Ok(Self::load(&bytes, endian))
    }

    /// Writes `self` to a slice that must be exactly as long as `Self::Bytes`.
    fn store_slice(&self, dst: &mut [u8], endian: Endian) -> Result<(), Error> {
        let dst = <Self::Bytes as ByteArray>::from_mut_slice(dst)?;
        self.store(dst, endian);
        Ok(())
    }
}

macro_rules! impl_word {
    ($($t:ty: $len:expr, $load_le:ident, $store_le:ident, $load_be:ident, $store_be:ident;)*) => {$(
        impl Codec for $t {
            type Bytes = [u8; $len];

            #[inline]
            fn load(src: &Self::Bytes, endian: Endian) -> Self {
                match endian {
                    Endian::Big => crate::endian::$load_be(src),
                    Endian::Little => crate::endian::$load_le(src),
                }
            }

            #[inline]
            fn store(&self, dst: &mut Self::Bytes, endian: Endian) {
                match endian {
                    Endian::Big => crate::endian::$store_be(dst, *self),
                    Endian::Little => crate::endian::$store_le(dst, *self),
                }
            }
        }
    )*}
}

impl_word! {
    u32: 4, load32_le, store32_le, load32_be, store32_be;
    u64: 8, load64_le, store64_le, load64_be, store64_be;
}

impl<const N: usize> Codec for [u8; N] {
    type Bytes = [u8; N];

    fn load(src: &Self::Bytes, _endian: Endian) -> Self {
        *src
    }

    fn store(&self, dst: &mut Self::Bytes, _endian: Endian) {
        *dst = *self;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zero() {
        assert_eq!(ZERO.len(), 64);
        assert_eq!(ZERO.len(), ZERO_LEN);
        assert_eq!(mem::size_of_val(&ZERO), ZERO_LEN);
        assert!(ZERO.iter().all(|&b| b == 0));

        let mut buf = [0xffu8; 8];
        store64_le(&mut buf, u64::MAX);
        store32_be(&mut [0u8; 4], u32::MAX);
        assert_eq!(ZERO, [0u8; 64]);
    }

    #[test]
    fn word_codec_follows_endian() {
        assert_eq!(0x01020304u32.to_bytes(Endian::Big), [1, 2, 3, 4]);
        assert_eq!(0x01020304u32.to_bytes(Endian::Little), [4, 3, 2, 1]);
        assert_eq!(
            u64::load(&[1, 2, 3, 4, 5, 6, 7, 8], Endian::Little),
            0x0807_0605_0403_0201
        );
        assert_eq!(
            u64::load(&[1, 2, 3, 4, 5, 6, 7, 8], Endian::Big),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    fn byte_array_codec_ignores_endian() {
        let tag = *b"abc";
        assert_eq!(tag.to_bytes(Endian::Big), tag);
        assert_eq!(tag.to_bytes(Endian::Little), tag);
        assert_eq!(<[u8; 3]>::load(b"xyz", Endian::Little), *b"xyz");
    }

    #[test]
    fn slices_must_match_exactly() {
        assert_eq!(u64::load_slice(&[0; 8], Endian::Big).unwrap(), 0);
        assert!(u64::load_slice(&[0; 7], Endian::Big).is_err());
        assert!(u64::load_slice(&[0; 9], Endian::Big).is_err());

        let mut buf = [0u8; 4];
        0xdeadbeefu32
            .store_slice(&mut buf, Endian::Little)
            .unwrap();
        assert_eq!(buf, [0xef, 0xbe, 0xad, 0xde]);

        let mut long = [0u8; 6];
        let error = 1u32.store_slice(&mut long, Endian::Big).unwrap_err();
        assert_eq!(
            error.to_string(),
            "length mismatch: expected 4 bytes, got 6"
        );
        assert_eq!(long, [0; 6]);
    }

    #[test]
    fn byte_array_len() {
        assert_eq!(<[u8; 4] as ByteArray>::LEN, 4);
        assert_eq!(<<u64 as Codec>::Bytes as ByteArray>::LEN, 8);
        assert_eq!(<[u8; 5] as ByteArray>::zeroed(), [0; 5]);
    }
}
