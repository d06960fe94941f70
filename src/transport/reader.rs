//! Stream reader: two-step exact read of one framed payload.
//!
//! Reading the fixed-width length field first means the receiver always
//! knows how many bytes make up the rest of the message, so no delimiter
//! scanning or unbounded lookahead is needed.

use std::io::{self, Read};

use tracing::warn;

use crate::protocol::{Error, FrameConfig, Result, Violation, parse_length_field};

use super::connection::Connection;
use super::drain::drain;

/// Receive one framed payload from `conn`.
///
/// Blocks until a complete segment arrives or the stream fails. There is no
/// built-in timeout: a silent but open connection blocks indefinitely, and
/// callers needing bounded wait time must layer one outside this call.
///
/// On a framing violation the remaining buffered bytes are drained
/// (best-effort) so a reused connection does not misread stale bytes as the
/// start of the next frame. The connection is never closed here; reacting
/// to a failure is the caller's decision.
///
/// # Errors
///
/// - [`Error::PeerClosed`] if the stream ended before any byte of the
///   length field arrived.
/// - [`Error::FramingViolation`] if the length field is not all digits, the
///   payload is truncated, or the payload is not valid UTF-8.
/// - [`Error::PeerReset`] if the peer reset the connection mid-read.
/// - [`Error::Transport`] for any other I/O failure.
pub fn receive<C: Connection + ?Sized>(conn: &mut C, config: &FrameConfig) -> Result<String> {
    let width = config.length_field_width;
    let mut field = vec![0u8; width];
    let got = read_full(conn, &mut field)?;
    if got == 0 {
        warn!("peer closed the connection before a length field arrived");
        return Err(Error::PeerClosed);
    }

    let declared = if got == width {
        parse_length_field(config, &field)
    } else {
        None
    };
    let Some(expected) = declared else {
        warn!(field = ?&field[..got], "malformed length field, resynchronizing");
        resync(conn, config);
        return Err(Error::FramingViolation(Violation::BadLengthField { width }));
    };

    let mut payload = vec![0u8; expected];
    let got = read_full(conn, &mut payload)?;
    if got != expected {
        warn!(expected, got, "frame truncated, resynchronizing");
        resync(conn, config);
        return Err(Error::FramingViolation(Violation::Truncated { expected, got }));
    }

    match String::from_utf8(payload) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(expected, "payload is not valid UTF-8, resynchronizing");
            resync(conn, config);
            Err(Error::FramingViolation(Violation::InvalidUtf8(e)))
        }
    }
}

/// Read until `buf` is full or the stream ends cleanly; returns bytes read.
fn read_full<C: Read + ?Sized>(conn: &mut C, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match conn.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if is_reset(e.kind()) => {
                warn!("peer reset the connection mid-receive");
                return Err(Error::PeerReset);
            }
            Err(e) => return Err(Error::Transport(e)),
        }
    }
    Ok(filled)
}

fn is_reset(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted
    )
}

/// Best-effort drain; a failed drain is logged, not propagated, since the
/// framing violation being reported is the primary failure.
fn resync<C: Connection + ?Sized>(conn: &mut C, config: &FrameConfig) {
    if let Err(e) = drain(conn, config) {
        warn!(error = %e, "failed to drain stale bytes");
    }
}
