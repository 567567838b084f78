//! # Pixveil
//!
//! Hides password protected messages in raw RGBA pixel data via permuted
//! LSB substitution. A message and its password are framed with a length
//! prefix and scattered over the least significant bits of the R/G/B
//! channels, visited in a deterministic pseudo-random order so the payload
//! never clusters in one corner of the image.
//!
//! The crate works on [`PixelBuffer`] values, plain RGBA bytes without
//! dimensions. Turning image files into pixel data and back is the caller's
//! business.
//!
//! # Usage Examples
//!
//! ## Hide and reveal a message
//!
//! ```rust
//! use pixveil::{decode, encode, PixelBuffer};
//!
//! let carrier = PixelBuffer::try_from(vec![127u8; 400])?;
//!
//! let encoded = encode(carrier, "Hello, World!", "SuperSecret42")?;
//!
//! assert_eq!(decode(&encoded, "SuperSecret42").as_deref(), Some("Hello, World!"));
//! assert_eq!(decode(&encoded, "wrong password"), None);
//! # Ok::<(), pixveil::StegoError>(())
//! ```
//!
//! ## Work with a decoded image
//!
//! ```rust
//! use image::RgbaImage;
//! use pixveil::{PixelBuffer, StegoDecoder, StegoEncoder};
//!
//! let image = RgbaImage::from_pixel(10, 10, image::Rgba([200, 180, 160, 255]));
//!
//! let encoded = StegoEncoder::new().encode(PixelBuffer::from(image), "hi", "pw")?;
//! assert_eq!(StegoDecoder::new().decode(&encoded, "pw")?, "hi");
//!
//! // reattach the dimensions to save the carrier as an image again
//! let stego_image = RgbaImage::from_raw(10, 10, encoded.into_bytes()).unwrap();
//! # let _ = stego_image;
//! # Ok::<(), pixveil::StegoError>(())
//! ```

pub mod bit_codec;

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod buffer;
pub use buffer::PixelBuffer;

pub mod permutation;
pub use permutation::Permutation;

pub mod frame;

pub mod encoder;
pub use encoder::StegoEncoder;

pub mod decoder;
pub use decoder::StegoDecoder;

pub mod error;
pub use error::{Result, StegoError};

/// Default permutation seed shared by encoder and decoder.
///
/// The seed determines WHERE bits land, not their secrecy; the password
/// travels inside the payload. Both sides must agree on the seed, so it is a
/// crate constant overridable via [`StegoEncoder::with_seed`] and
/// [`StegoDecoder::with_seed`].
pub const DEFAULT_SEED: u32 = 0x5EED;

/// Hides `message` and `password` inside `pixels` using [`DEFAULT_SEED`].
///
/// Convenience wrapper around [`StegoEncoder::encode`] with the default
/// configuration.
pub fn encode(pixels: PixelBuffer, message: &str, password: &str) -> Result<PixelBuffer> {
    StegoEncoder::new().encode(pixels, message, password)
}

/// Reveals the message hidden in `pixels`, or `None` when the carrier holds
/// no intact frame or the password does not match.
///
/// Both failure kinds collapse to `None` here; [`StegoDecoder::decode`]
/// reports them as distinct errors.
pub fn decode(pixels: &PixelBuffer, password: &str) -> Option<String> {
    StegoDecoder::new().decode(pixels, password).ok()
}
