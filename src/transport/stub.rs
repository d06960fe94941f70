//! Scriptable in-memory connection for transport tests.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use super::connection::Connection;

/// One scripted outcome for a `read` call.
pub(crate) enum ReadStep {
    /// Hand over these bytes (split across calls if the buffer is smaller).
    Data(Vec<u8>),
    /// No data ready right now (non-blocking poll came up empty).
    WouldBlock,
    /// Fail with this error kind.
    Error(io::ErrorKind),
}

/// One scripted outcome for a `write` call.
pub(crate) enum WriteStep {
    /// Accept at most this many bytes.
    Accept(usize),
    /// Fail with this error kind.
    Error(io::ErrorKind),
}

/// In-memory `Connection` with scripted reads and writes.
///
/// Reads follow the scripted steps in order; once the script runs out,
/// every further read reports a clean end of stream. Writes follow scripted
/// steps first, then accept up to `write_limit` bytes per call.
pub(crate) struct StubConnection {
    reads: VecDeque<ReadStep>,
    writes: VecDeque<WriteStep>,
    write_limit: Option<usize>,
    written: Vec<u8>,
    write_calls: usize,
    nonblocking: bool,
    mode_log: Vec<bool>,
}

impl StubConnection {
    pub(crate) fn new() -> Self {
        Self {
            reads: VecDeque::new(),
            writes: VecDeque::new(),
            write_limit: None,
            written: Vec::new(),
            write_calls: 0,
            nonblocking: false,
            mode_log: Vec::new(),
        }
    }

    /// Cap unscripted writes at `limit` bytes per call.
    pub(crate) fn with_write_limit(mut self, limit: usize) -> Self {
        self.write_limit = Some(limit);
        self
    }

    pub(crate) fn push_read(mut self, step: ReadStep) -> Self {
        self.reads.push_back(step);
        self
    }

    /// Shorthand for scripting readable bytes.
    pub(crate) fn push_data(self, bytes: &[u8]) -> Self {
        self.push_read(ReadStep::Data(bytes.to_vec()))
    }

    pub(crate) fn push_write(mut self, step: WriteStep) -> Self {
        self.writes.push_back(step);
        self
    }

    /// Everything the transport has accepted so far, in order.
    pub(crate) fn written(&self) -> &[u8] {
        &self.written
    }

    pub(crate) fn write_calls(&self) -> usize {
        self.write_calls
    }

    /// Scripted read steps not yet consumed.
    pub(crate) fn remaining_reads(&self) -> usize {
        self.reads.len()
    }

    pub(crate) fn is_blocking(&self) -> bool {
        !self.nonblocking
    }

    /// Every non-blocking toggle observed, in order.
    pub(crate) fn mode_log(&self) -> &[bool] {
        &self.mode_log
    }
}

impl Read for StubConnection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reads.pop_front() {
            None => Ok(0),
            Some(ReadStep::Data(mut data)) => {
                if data.len() > buf.len() {
                    let rest = data.split_off(buf.len());
                    self.reads.push_front(ReadStep::Data(rest));
                }
                buf[..data.len()].copy_from_slice(&data);
                Ok(data.len())
            }
            Some(ReadStep::WouldBlock) => Err(io::ErrorKind::WouldBlock.into()),
            Some(ReadStep::Error(kind)) => Err(kind.into()),
        }
    }
}

impl Write for StubConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_calls += 1;
        let accepted = match self.writes.pop_front() {
            Some(WriteStep::Accept(n)) => n.min(buf.len()),
            Some(WriteStep::Error(kind)) => return Err(kind.into()),
            None => self.write_limit.map_or(buf.len(), |limit| limit.min(buf.len())),
        };
        self.written.extend_from_slice(&buf[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Connection for StubConnection {
    fn set_nonblocking(&mut self, nonblocking: bool) -> io::Result<()> {
        self.nonblocking = nonblocking;
        self.mode_log.push(nonblocking);
        Ok(())
    }
}
