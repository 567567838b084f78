//! Error types for hide and reveal operations.

use std::fmt;
use thiserror::Error;

/// Result type alias for hide/reveal operations.
pub type Result<T> = std::result::Result<T, StegoError>;

/// Errors that can occur while hiding or revealing a message.
#[derive(Error)]
pub enum StegoError {
    /// Message and password do not fit into the carrier.
    #[error("capacity exceeded: payload requires {required} bits but only {available} available")]
    CapacityExceeded { required: usize, available: usize },

    /// Extracted data does not form a valid frame: missing delimiter, broken
    /// UTF-8 or a length header that promises more bytes than the carrier holds.
    #[error("no valid payload found in carrier")]
    MalformedPayload,

    /// A frame was recovered but the password stored in it does not match.
    #[error("password does not match")]
    PasswordMismatch,

    /// Raw buffer length is not a whole number of RGBA pixels.
    #[error("buffer length {0} is not a multiple of 4 bytes (RGBA)")]
    InvalidBufferLength(usize),
}

impl fmt::Debug for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug delegates to Display so assertion failures stay readable
        write!(f, "{self}")
    }
}
