//! DFP protocol core implementation
//!
//! This module provides the wire format, framing configuration, and codec
//! for DFP segments.

mod codec;
mod config;
mod error;

pub use codec::{encode, parse_length_field};
pub use config::FrameConfig;
pub use error::{Error, Result, Violation};

use std::time::Duration;

/// Default width of the decimal length field, in bytes.
///
/// A width of 4 caps the encoded payload at 9999 bytes.
pub const DEFAULT_LENGTH_FIELD_WIDTH: usize = 4;

/// Default quiet period a drain waits before declaring the line idle.
pub const DEFAULT_DRAIN_QUIET_PERIOD: Duration = Duration::from_millis(10);

/// Default chunk size consumed per read while draining stale bytes.
pub const DEFAULT_DRAIN_CHUNK_SIZE: usize = 4096;
