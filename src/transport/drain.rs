//! Stream resynchronizer ("garbage cleaner")

use std::io::{self, ErrorKind};
use std::thread;

use tracing::trace;

use crate::protocol::FrameConfig;

use super::connection::Connection;

/// Restores blocking mode on drop, so a failed drain cannot leave the
/// connection permanently non-blocking.
struct BlockingGuard<'a, C: Connection + ?Sized> {
    conn: &'a mut C,
}

impl<C: Connection + ?Sized> Drop for BlockingGuard<'_, C> {
    fn drop(&mut self) {
        let _ = self.conn.set_nonblocking(false);
    }
}

/// Discard whatever unread bytes are sitting on `conn`.
///
/// After a framing violation the sender's remaining bytes are stale and
/// unparseable; left in the stream they would be misread as the start of
/// the next frame if the connection is reused. This polls the connection in
/// non-blocking mode, consuming up to [`FrameConfig::drain_chunk_size`]
/// bytes per read; a poll that stays quiet for one
/// [`FrameConfig::drain_quiet_period`], or a read of zero bytes (peer
/// closed), ends the drain.
///
/// Best-effort: the stop condition is bounded by the quiet period, not by
/// total data volume, so a peer that keeps sending indefinitely is not
/// guaranteed to be outrun. Blocking mode is restored on every exit path.
///
/// # Errors
///
/// Returns the underlying I/O error if toggling non-blocking mode fails or
/// a read fails with something other than `WouldBlock`.
pub fn drain<C: Connection + ?Sized>(conn: &mut C, config: &FrameConfig) -> io::Result<()> {
    conn.set_nonblocking(true)?;
    let mut guard = BlockingGuard { conn };

    let mut chunk = vec![0u8; config.drain_chunk_size];
    let mut drained = 0usize;
    let mut waited = false;
    loop {
        match guard.conn.read(&mut chunk) {
            Ok(0) => break, // peer closed
            Ok(n) => {
                drained += n;
                waited = false;
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock => {
                if waited {
                    break; // the line stayed quiet for a full period
                }
                waited = true;
                thread::sleep(config.drain_quiet_period);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    trace!(drained, "drained stale bytes");
    Ok(())
}
