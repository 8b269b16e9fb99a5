//! Wrapper types that pin the byte order of a value.

use crate::ctx::Endian;
use crate::Codec;

macro_rules! endian_wrappers {
    ($($(#[$attr:meta])* $name:ident: $endian:expr,)*) => {$(
        $(#[$attr])*
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<T>(pub T);

        impl<T> Codec for $name<T>
        where
            T: Codec,
        {
            type Bytes = T::Bytes;

            fn load(src: &Self::Bytes, _endian: Endian) -> Self {
                Self(T::load(src, $endian))
            }

            fn store(&self, dst: &mut Self::Bytes, _endian: Endian) {
                self.0.store(dst, $endian)
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self(value)
            }
        }

        impl<T> $name<T> {
            /// Unwraps and returns the inner `T` value.
            pub fn into_inner(self) -> T {
                self.0
            }
        }
    )*}
}

endian_wrappers! {
    /// Little-endian wrapper type for words.
    ///
    /// Loads and stores the inner value in little-endian order, whatever order is passed in.
    ///
    /// # Example
    ///
    /// ```
    /// use wordio::Codec;
    /// use wordio::ctx::Endian;
    /// use wordio::util::LittleEndian;
    ///
    /// let x: LittleEndian<u32> = 0xdeadbeef.into();
    /// assert_eq!(x.to_bytes(Endian::Big), [0xef, 0xbe, 0xad, 0xde]);
    /// ```
    LittleEndian: Endian::Little,

    /// Big-endian wrapper type for words.
    ///
    /// Loads and stores the inner value in big-endian order, whatever order is passed in.
    ///
    /// # Example
    ///
    /// ```
    /// use wordio::Codec;
    /// use wordio::ctx::Endian;
    /// use wordio::util::BigEndian;
    ///
    /// let x: BigEndian<u32> = 0xdeadbeef.into();
    /// assert_eq!(x.to_bytes(Endian::Little), [0xde, 0xad, 0xbe, 0xef]);
    /// ```
    BigEndian: Endian::Big,
}
