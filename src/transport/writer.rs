//! Stream writer: drives a full segment through a possibly-partial-write
//! transport.

use std::io::{self, Write};

use tracing::{trace, warn};

use crate::protocol::{Error, FrameConfig, Result, encode};

/// Send one framed payload over `conn`.
///
/// Encodes the payload via the codec, then writes the segment in a loop
/// until the transport has accepted every byte, in order, exactly once. A
/// single write accepting fewer bytes than requested is expected, not an
/// error; the loop re-issues the unwritten suffix.
///
/// # Errors
///
/// - [`Error::FrameTooLarge`] if the payload does not fit the configured
///   length field; detected before any bytes are written.
/// - [`Error::PeerClosed`] if the peer reset or closed the connection
///   mid-write. Bytes already handed to the transport are not retracted,
///   and no retry is attempted; retry policy belongs to the caller.
/// - [`Error::Transport`] for any other I/O failure.
pub fn send<C: Write + ?Sized>(conn: &mut C, config: &FrameConfig, payload: &str) -> Result<()> {
    let segment = encode(config, payload)?;

    let mut written = 0;
    while written < segment.len() {
        match conn.write(&segment[written..]) {
            Ok(0) => {
                warn!(written, total = segment.len(), "peer closed the connection mid-send");
                return Err(Error::PeerClosed);
            }
            Ok(n) => {
                written += n;
                if written < segment.len() {
                    trace!(written, total = segment.len(), "partial write, resuming");
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if is_disconnect(e.kind()) => {
                warn!(written, total = segment.len(), "peer reset the connection mid-send");
                return Err(Error::PeerClosed);
            }
            Err(e) => return Err(Error::Transport(e)),
        }
    }
    Ok(())
}

fn is_disconnect(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
    )
}
