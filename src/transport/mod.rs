//! Blocking stream transport for DFP segments

mod connection;
mod drain;
mod reader;
mod writer;

pub use connection::Connection;
pub use drain::drain;
pub use reader::receive;
pub use writer::send;

#[cfg(test)]
pub(crate) mod stub;
