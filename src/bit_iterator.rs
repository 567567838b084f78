//! Iterator over the bits of a byte sequence.

/// Iterates the bits of a byte slice, most significant bit first.
///
/// The bit position starts at 7 within each byte and counts down to 0 before
/// the cursor advances to the next byte. Embedding consumes bits in this
/// order and extraction reassembles bytes in the same order.
pub struct BitIterator<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitIterator { bytes, cursor: 0 }
    }
}

impl Iterator for BitIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.cursor / 8)?;
        let bit = (byte >> (7 - self.cursor % 8)) & 1;
        self.cursor += 1;
        Some(bit)
    }
}
