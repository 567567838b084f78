//! Extraction of a framed payload from an RGBA carrier.
//!
//! The decoder reverses the embedding process: it rebuilds the permutation
//! from the shared seed, walks the identical slot sequence and reassembles
//! the frame from the least significant bits it finds there.

use log::debug;

use crate::bit_codec;
use crate::buffer::{slot_offsets, PixelBuffer};
use crate::error::{Result, StegoError};
use crate::frame;
use crate::permutation::Permutation;
use crate::DEFAULT_SEED;

/// Reveals password protected messages hidden in RGBA pixel buffers.
#[derive(Debug, Clone, Copy)]
pub struct StegoDecoder {
    seed: u32,
}

impl Default for StegoDecoder {
    fn default() -> Self {
        StegoDecoder { seed: DEFAULT_SEED }
    }
}

impl StegoDecoder {
    /// Creates a decoder using [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder whose permutation is driven by `seed`.
    ///
    /// Must match the seed the carrier was encoded with.
    pub fn with_seed(seed: u32) -> Self {
        StegoDecoder { seed }
    }

    /// Recovers the message hidden in `pixels`, authenticating it against
    /// `password`.
    ///
    /// Extraction runs in two passes over the same traversal order: the
    /// first reads the 32 bit length word, the second starts over from the
    /// beginning of the permutation and reads the entire frame. The carrier
    /// must have the pixel count it had at encode time, otherwise the
    /// traversal misaligns and the frame comes out as noise.
    ///
    /// Fails with [`StegoError::MalformedPayload`] when no intact frame is
    /// present and with [`StegoError::PasswordMismatch`] when a frame was
    /// recovered but the stored password differs.
    pub fn decode(&self, pixels: &PixelBuffer, password: &str) -> Result<String> {
        let permutation = Permutation::with_seed(pixels.block_count() as u32, self.seed);
        let data = pixels.as_bytes();

        // Pass 1: the length word alone
        let mut bits =
            slot_offsets(&permutation).map(|offset| bit_codec::extract_bit(data[offset]));
        let mut declared_len = 0usize;
        for _ in 0..u32::BITS {
            let bit = bits.next().ok_or(StegoError::MalformedPayload)?;
            declared_len = (declared_len << 1) | bit as usize;
        }

        // A length the carrier cannot hold means there is no frame, only
        // whatever noise the image happened to contain
        if declared_len > pixels.capacity_bytes().saturating_sub(frame::HEADER_LEN) {
            debug!(
                "declared payload of {} bytes exceeds carrier capacity of {} bytes",
                declared_len,
                pixels.capacity_bytes()
            );
            return Err(StegoError::MalformedPayload);
        }

        // Pass 2: re-walk the permutation from the start for the whole frame
        let frame_len = frame::HEADER_LEN + declared_len;
        let mut bits =
            slot_offsets(&permutation).map(|offset| bit_codec::extract_bit(data[offset]));
        let frame_bytes = take_bytes(&mut bits, frame_len).ok_or(StegoError::MalformedPayload)?;

        debug!("extracted a {} byte frame, authenticating", frame_len);
        frame::decode(&frame_bytes, password)
    }

    /// Dumps the first `len` extracted bytes without interpreting them as a
    /// frame.
    ///
    /// Useful for inspecting what a foreign or damaged carrier actually
    /// holds. `len` is clamped to the carrier's whole-byte capacity.
    pub fn extract_raw(&self, pixels: &PixelBuffer, len: usize) -> Vec<u8> {
        let permutation = Permutation::with_seed(pixels.block_count() as u32, self.seed);
        let data = pixels.as_bytes();

        let count = len.min(pixels.capacity_bytes());
        let mut bits =
            slot_offsets(&permutation).map(|offset| bit_codec::extract_bit(data[offset]));
        take_bytes(&mut bits, count).unwrap_or_default()
    }
}

/// Reassembles `count` bytes from a bit stream, most significant bit first.
///
/// Returns `None` when the stream runs dry before `count` bytes are complete.
fn take_bytes(bits: &mut impl Iterator<Item = u8>, count: usize) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(count);
    for _ in 0..count {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | bits.next()?;
        }
        bytes.push(byte);
    }

    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::StegoEncoder;

    fn generate_carrier(blocks: usize) -> PixelBuffer {
        let mut rng = fastrand::Rng::with_seed(12345);
        let data: Vec<u8> = (0..blocks * 4).map(|_| rng.u8(..)).collect();
        PixelBuffer::try_from(data).unwrap()
    }

    #[test]
    fn test_roundtrip_simple() {
        let carrier = generate_carrier(100);

        let encoded = StegoEncoder::new()
            .encode(carrier, "Hello World", "secret")
            .unwrap();
        let message = StegoDecoder::new().decode(&encoded, "secret").unwrap();

        assert_eq!(message, "Hello World");
    }

    #[test]
    fn test_roundtrip_with_custom_seed() {
        let carrier = generate_carrier(100);

        let encoded = StegoEncoder::with_seed(0xDEAD_BEEF)
            .encode(carrier, "hidden", "pw")
            .unwrap();
        let message = StegoDecoder::with_seed(0xDEAD_BEEF)
            .decode(&encoded, "pw")
            .unwrap();

        assert_eq!(message, "hidden");
    }

    #[test]
    fn test_wrong_seed_does_not_reveal() {
        let carrier = generate_carrier(100);

        let encoded = StegoEncoder::with_seed(1)
            .encode(carrier, "Secret", "pw")
            .unwrap();
        let result = StegoDecoder::with_seed(2).decode(&encoded, "pw");

        match result {
            Err(_) => (),
            Ok(extracted) => assert_ne!(extracted, "Secret"),
        }
    }

    #[test]
    fn test_wrong_password_is_a_mismatch() {
        let carrier = generate_carrier(100);

        let encoded = StegoEncoder::new().encode(carrier, "hi", "pw").unwrap();
        match StegoDecoder::new().decode(&encoded, "px") {
            Err(StegoError::PasswordMismatch) => (),
            other => panic!("Expected PasswordMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_carrier_fails_to_decode() {
        let carrier = generate_carrier(100);
        assert!(StegoDecoder::new().decode(&carrier, "pw").is_err());
    }

    #[test]
    fn test_absurd_declared_length_is_malformed() {
        // every LSB set: the length word reads as u32::MAX
        let carrier = PixelBuffer::try_from(vec![0xFF; 400]).unwrap();

        match StegoDecoder::new().decode(&carrier, "pw") {
            Err(StegoError::MalformedPayload) => (),
            other => panic!("Expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_carrier_is_malformed() {
        let carrier = PixelBuffer::try_from(Vec::new()).unwrap();

        match StegoDecoder::new().decode(&carrier, "") {
            Err(StegoError::MalformedPayload) => (),
            other => panic!("Expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_raw_returns_the_embedded_frame() {
        let carrier = generate_carrier(100);

        let encoded = StegoEncoder::new().encode(carrier, "hi", "pw").unwrap();
        let raw = StegoDecoder::new().extract_raw(&encoded, 9);

        assert_eq!(raw, frame::encode("hi", "pw"));
    }

    #[test]
    fn test_extract_raw_clamps_to_capacity() {
        let carrier = generate_carrier(100);
        let raw = StegoDecoder::new().extract_raw(&carrier, 10_000);

        assert_eq!(raw.len(), carrier.capacity_bytes());
    }
}
