//! Connection handle abstraction

use std::io::{self, Read, Write};
use std::net::TcpStream;

/// A bidirectional byte-stream endpoint usable with the framing layer.
///
/// The framing operations never open, close, or pool connections; they only
/// read from and write to a handle the caller owns for its whole lifetime.
/// The caller must also serialize `send`/`receive` calls per connection:
/// interleaved operations from two call sites on the same handle would
/// corrupt framing.
///
/// `set_nonblocking` exists so [`drain`](super::drain) can poll for stale
/// bytes without blocking; it must be a reversible toggle.
pub trait Connection: Read + Write {
    /// Toggle the handle's non-blocking mode.
    fn set_nonblocking(&mut self, nonblocking: bool) -> io::Result<()>;
}

impl Connection for TcpStream {
    fn set_nonblocking(&mut self, nonblocking: bool) -> io::Result<()> {
        TcpStream::set_nonblocking(self, nonblocking)
    }
}
