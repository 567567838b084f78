//! Carrier buffer for raw RGBA pixel data.

use image::RgbaImage;

use crate::error::{Result, StegoError};
use crate::permutation::Permutation;

/// Bytes per pixel block: R, G, B, A.
pub const BYTES_PER_PIXEL: usize = 4;
/// Channels per block that can carry a payload bit. The alpha byte of each
/// block is never read or written.
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Owned RGBA carrier data.
///
/// The buffer is plain interleaved channel bytes grouped into 4-byte pixel
/// blocks. Construction enforces the grouping, so all downstream arithmetic
/// may rely on it. Dimensions are not tracked; callers that started from an
/// [`RgbaImage`] reattach them via [`RgbaImage::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Borrows the raw channel bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the raw channel bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Total byte length, always a multiple of [`BYTES_PER_PIXEL`].
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of 4-byte pixel blocks.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// Number of embeddable bit slots: three per block, one per color channel.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.block_count() * CHANNELS_PER_PIXEL
    }

    /// Number of whole bytes that fit into the bit slots.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bits() / 8
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl TryFrom<Vec<u8>> for PixelBuffer {
    type Error = StegoError;

    /// Wraps raw RGBA bytes, rejecting anything that is not a whole number
    /// of pixel blocks.
    fn try_from(data: Vec<u8>) -> Result<Self> {
        if data.len() % BYTES_PER_PIXEL != 0 {
            return Err(StegoError::InvalidBufferLength(data.len()));
        }

        Ok(PixelBuffer { data })
    }
}

impl From<RgbaImage> for PixelBuffer {
    /// Takes the raw container out of a decoded image. Raw RGBA data is
    /// always 4-aligned, so this cannot fail.
    fn from(image: RgbaImage) -> Self {
        PixelBuffer {
            data: image.into_raw(),
        }
    }
}

/// Byte offsets of the embeddable channel slots in traversal order.
///
/// Encoder and decoder both walk the carrier through this exact sequence;
/// any disagreement between the two sides scrambles every message. The
/// sequence is defined once here and nowhere else.
pub(crate) fn slot_offsets(permutation: &Permutation) -> impl Iterator<Item = usize> + '_ {
    permutation.iter().flat_map(|block| {
        let base = block as usize * BYTES_PER_PIXEL;
        base..base + CHANNELS_PER_PIXEL
    })
}
