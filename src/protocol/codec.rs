//! DFP segment codec (encode / length-field parse)
//!
//! A segment is a fixed-width, zero-padded decimal length field followed
//! immediately by the UTF-8 payload bytes. The length field counts encoded
//! bytes, not characters.

use bytes::{BufMut, Bytes, BytesMut};

use super::{Error, FrameConfig, Result};

/// Encode a payload into a length-prefixed wire segment
///
/// # Format
///
/// ```text
/// [LENGTH FIELD (width ASCII digits, zero-padded)] [PAYLOAD (UTF-8 bytes)]
/// ```
///
/// Pure function: no I/O, deterministic. The length field counts the
/// payload's *encoded* byte length, so multi-byte characters contribute
/// more than one to it.
///
/// # Errors
///
/// Returns [`Error::FrameTooLarge`] if the payload's byte length has more
/// digits than the configured width can hold. This is checked before any
/// bytes are produced.
pub fn encode(config: &FrameConfig, payload: &str) -> Result<Bytes> {
    let len = payload.len();
    let max = config.max_payload_len();
    if len > max {
        return Err(Error::FrameTooLarge { len, max });
    }

    let width = config.length_field_width;
    let mut segment = BytesMut::with_capacity(width + len);
    segment.put_slice(format!("{len:0width$}").as_bytes());
    segment.put_slice(payload.as_bytes());
    Ok(segment.freeze())
}

/// Parse a length field into a payload byte count
///
/// Returns `Some(n)` only if `field` is exactly the configured width and
/// consists solely of ASCII decimal digits. Anything else is a framing
/// violation the caller must handle.
#[must_use]
pub fn parse_length_field(config: &FrameConfig, field: &[u8]) -> Option<usize> {
    if field.len() != config.length_field_width {
        return None;
    }
    if !field.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(field).ok()?.parse().ok()
}
