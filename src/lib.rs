//! DFP (Decimal Framing Protocol) - Length-prefixed text framing over byte-stream transports
//!
//! This library frames discrete UTF-8 text payloads for exchange over a
//! TCP-like byte stream. Each wire segment is a fixed-width, zero-padded
//! decimal length field followed by exactly that many payload bytes, so the
//! receiver always knows in advance how much of the stream belongs to the
//! current message.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::net::TcpStream;
//! use dfp::{FrameConfig, receive, send};
//!
//! let config = FrameConfig::default();
//! let mut conn = TcpStream::connect(("127.0.0.1", dfp::DEFAULT_PORT))?;
//!
//! // Send one framed payload
//! send(&mut conn, &config, "3 + 4")?;
//!
//! // Receive one framed payload
//! let reply = receive(&mut conn, &config)?;
//! println!("{reply}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! [LENGTH FIELD (4 ASCII digits, zero-padded)] [PAYLOAD (UTF-8 bytes)]
//! ```
//!
//! With the default width of 4, payload `"hi"` becomes the wire bytes
//! `30 30 30 32 68 69` (ASCII `"0002hi"`), and the largest encodable
//! payload is 9999 bytes.
//!
//! # Features
//!
//! - **Pure codec** - encoding is deterministic and free of I/O
//! - **Partial I/O loops** - send and receive survive short reads/writes
//! - **Stream resynchronization** - malformed frames trigger a best-effort
//!   drain so a reused connection starts the next exchange clean
//! - **Discriminated failures** - peer close, peer reset, framing
//!   violations, and transport errors are reported as distinct kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
pub mod transport;

pub use protocol::{
    DEFAULT_LENGTH_FIELD_WIDTH, Error, FrameConfig, Result, Violation, encode, parse_length_field,
};
pub use transport::{Connection, drain, receive, send};

/// DFP protocol version
pub const VERSION: &str = "1.0.0";

/// Default DFP port
pub const DEFAULT_PORT: u16 = 8888;
