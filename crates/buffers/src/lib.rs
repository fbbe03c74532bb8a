//! Byte-buffer primitives for the ZiProto codec.
//!
//! Two building blocks live here: [`Writer`], a growable byte sink with a
//! write cursor that all encoders append into, and [`Reader`], a borrowed
//! view over an input slice with a read cursor that decoders consume from.
//! Multi-byte values are always big-endian on the wire, so both sides work
//! in network byte order regardless of the host.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Errors surfaced by the buffer primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A read would run past the end of the input buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    /// A text read produced bytes that are not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// Growing the write buffer failed.
    #[error("buffer allocation failed")]
    AllocFailed,
}
