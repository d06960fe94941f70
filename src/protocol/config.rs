//! Framing configuration

use std::time::Duration;

use super::{DEFAULT_DRAIN_CHUNK_SIZE, DEFAULT_DRAIN_QUIET_PERIOD, DEFAULT_LENGTH_FIELD_WIDTH};

/// Configuration shared by the codec, reader, writer, and drain.
///
/// Held by the caller and passed to each operation, so multiple
/// independently configured framing instances (for example with differing
/// length-field widths) can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Width of the decimal length field, in bytes.
    pub length_field_width: usize,
    /// How long a drain poll waits for more data before declaring the line
    /// idle and stopping.
    pub drain_quiet_period: Duration,
    /// Maximum bytes consumed per read while draining.
    pub drain_chunk_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH_FIELD_WIDTH)
    }
}

impl FrameConfig {
    /// Create a configuration with the given length-field width and default
    /// drain tuning.
    #[must_use]
    pub const fn new(length_field_width: usize) -> Self {
        Self {
            length_field_width,
            drain_quiet_period: DEFAULT_DRAIN_QUIET_PERIOD,
            drain_chunk_size: DEFAULT_DRAIN_CHUNK_SIZE,
        }
    }

    /// Largest encoded payload length the length field can represent
    /// (`10^width - 1`).
    #[must_use]
    pub fn max_payload_len(&self) -> usize {
        match 10usize.checked_pow(self.length_field_width as u32) {
            Some(bound) => bound - 1,
            None => usize::MAX,
        }
    }
}
