//! Single-bit operations on color channel bytes.

/// Writes `bit` into the least significant bit of `byte`.
///
/// The upper seven bits pass through untouched, so a channel value changes by
/// at most 1.
#[inline]
pub fn embed_bit(byte: u8, bit: u8) -> u8 {
    (byte & 0xFE) | (bit & 1)
}

/// Reads the least significant bit of `byte`.
#[inline]
pub fn extract_bit(byte: u8) -> u8 {
    byte & 1
}
