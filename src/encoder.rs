//! Embedding of a framed payload into an RGBA carrier.

use log::{debug, trace};

use crate::bit_codec;
use crate::bit_iterator::BitIterator;
use crate::buffer::{slot_offsets, PixelBuffer};
use crate::error::{Result, StegoError};
use crate::frame;
use crate::permutation::Permutation;
use crate::DEFAULT_SEED;

/// Hides password protected messages in RGBA pixel buffers.
///
/// The encoder is stateless apart from the permutation seed; every call to
/// [`encode`](StegoEncoder::encode) computes everything else fresh from its
/// inputs.
#[derive(Debug, Clone, Copy)]
pub struct StegoEncoder {
    seed: u32,
}

impl Default for StegoEncoder {
    fn default() -> Self {
        StegoEncoder { seed: DEFAULT_SEED }
    }
}

impl StegoEncoder {
    /// Creates an encoder using [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder whose permutation is driven by `seed`.
    ///
    /// Revealing the message later requires the same seed on the decoder.
    pub fn with_seed(seed: u32) -> Self {
        StegoEncoder { seed }
    }

    /// Hides `message` and `password` inside `pixels`.
    ///
    /// Takes ownership of the carrier and returns it with the frame embedded
    /// in the least significant bits of permuted R/G/B slots. Untouched slots
    /// and every alpha byte keep their original values.
    ///
    /// Fails with [`StegoError::CapacityExceeded`] before touching any pixel
    /// when the frame does not fit.
    pub fn encode(
        &self,
        mut pixels: PixelBuffer,
        message: &str,
        password: &str,
    ) -> Result<PixelBuffer> {
        let frame = frame::encode(message, password);

        let required = frame.len() * 8;
        let available = pixels.capacity_bits();
        if required > available {
            return Err(StegoError::CapacityExceeded {
                required,
                available,
            });
        }

        let permutation = Permutation::with_seed(pixels.block_count() as u32, self.seed);
        trace!(
            "walking {} blocks with seed {:#010x}",
            permutation.len(),
            self.seed
        );

        let data = pixels.as_bytes_mut();
        for (offset, bit) in slot_offsets(&permutation).zip(BitIterator::new(&frame)) {
            data[offset] = bit_codec::embed_bit(data[offset], bit);
        }

        debug!(
            "embedded a {} byte frame into {} of {} slots",
            frame.len(),
            required,
            available
        );

        Ok(pixels)
    }

    /// Number of message and password bytes that fit into `pixels`, net of
    /// the length header.
    pub fn capacity(&self, pixels: &PixelBuffer) -> usize {
        pixels.capacity_bytes().saturating_sub(frame::HEADER_LEN)
    }
}
