//! Bit rotations for building word-oriented primitives.
//!
//! The shift amount `b` must satisfy `0 < b < width`. Debug builds check this; release builds
//! do not.

/// Rotates `w` left by `b` bits.
///
/// ```
/// assert_eq!(wordio::rotl32(0x8000_0001, 1), 0x0000_0003);
/// ```
#[inline]
pub const fn rotl32(w: u32, b: u32) -> u32 {
    debug_assert!(b > 0 && b < 32);
    w.rotate_left(b)
}

/// Rotates `w` left by `b` bits.
#[inline]
pub const fn rotl64(w: u64, b: u32) -> u64 {
    debug_assert!(b > 0 && b < 64);
    w.rotate_left(b)
}

/// Rotates `w` right by `b` bits.
#[inline]
pub const fn rotr32(w: u32, b: u32) -> u32 {
    debug_assert!(b > 0 && b < 32);
    w.rotate_right(b)
}

/// Rotates `w` right by `b` bits.
#[inline]
pub const fn rotr64(w: u64, b: u32) -> u64 {
    debug_assert!(b > 0 && b < 64);
    w.rotate_right(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_shift_or_formula() {
        let w: u32 = 0x9e37_79b9;
        for b in 1..32 {
            assert_eq!(rotl32(w, b), (w << b) | (w >> (32 - b)));
        }
        let w: u64 = 0x9e37_79b9_7f4a_7c15;
        for b in 1..64 {
            assert_eq!(rotl64(w, b), (w << b) | (w >> (64 - b)));
        }
    }

    #[test]
    fn left_then_right_is_identity() {
        for &w in &[0u32, 1, 0xdead_beef, u32::MAX] {
            for b in 1..32 {
                assert_eq!(rotr32(rotl32(w, b), b), w);
                assert_eq!(rotl32(w, 32 - b), rotr32(w, b));
            }
        }
        for &w in &[0u64, 1, 0xdead_beef_cafe_babe, u64::MAX] {
            for b in 1..64 {
                assert_eq!(rotr64(rotl64(w, b), b), w);
                assert_eq!(rotl64(w, 64 - b), rotr64(w, b));
            }
        }
    }

    #[test]
    fn high_bit_wraps_to_low() {
        assert_eq!(rotl32(0x8000_0000, 1), 1);
        assert_eq!(rotl64(0x8000_0000_0000_0000, 1), 1);
        assert_eq!(rotr32(1, 1), 0x8000_0000);
        assert_eq!(rotr64(1, 1), 0x8000_0000_0000_0000);
    }
}
