//! DFP error types

use thiserror::Error;

/// Ways a received byte sequence can fail to form a valid segment.
#[derive(Error, Debug)]
pub enum Violation {
    /// Length field was not the expected run of ASCII digits
    #[error("length field is not {width} ASCII digits")]
    BadLengthField {
        /// Configured length-field width
        width: usize,
    },

    /// Stream ended before the declared payload length arrived
    #[error("payload truncated: expected {expected} bytes, got {got}")]
    Truncated {
        /// Byte count declared by the length field
        expected: usize,
        /// Bytes actually read before the stream ended
        got: usize,
    },

    /// Payload bytes do not decode as UTF-8
    #[error("payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// DFP framing and transport errors
#[derive(Error, Debug)]
pub enum Error {
    /// Payload byte length exceeds what the length field can represent.
    /// Precondition failure: detected before any bytes are written.
    #[error("frame too large: {len} bytes (max {max})")]
    FrameTooLarge {
        /// Encoded payload length
        len: usize,
        /// Maximum the configured width can represent
        max: usize,
    },

    /// The peer ended the stream cleanly before a frame could be exchanged
    #[error("peer closed the connection")]
    PeerClosed,

    /// The peer terminated the connection abnormally mid-operation
    #[error("peer reset the connection")]
    PeerReset,

    /// Received bytes do not form a valid segment
    #[error("framing violation: {0}")]
    FramingViolation(Violation),

    /// Any other I/O failure from the underlying transport
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

impl Error {
    /// Stable name of the failure kind, for callers that report errors as
    /// plain text rather than matching on the enum.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FrameTooLarge { .. } => "FrameTooLarge",
            Self::PeerClosed => "PeerClosed",
            Self::PeerReset => "PeerReset",
            Self::FramingViolation(_) => "FramingViolation",
            Self::Transport(_) => "TransportError",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
