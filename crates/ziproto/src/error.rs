//! ZiProto codec error types.

use thiserror::Error;
use ziproto_buffers::BufferError;

/// Errors produced while encoding a [`crate::Value`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Growing the output buffer failed; no partial output is returned.
    #[error("output buffer allocation failed")]
    AllocationFailed,
    /// A byte length or container count exceeds the 32-bit wire ceiling.
    #[error("length {0} exceeds the 32-bit wire format ceiling")]
    SizeTooLarge(usize),
}

impl From<BufferError> for EncodeError {
    fn from(_: BufferError) -> Self {
        // The writer's only failure mode is allocation.
        EncodeError::AllocationFailed
    }
}

/// Errors produced while decoding untrusted input bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before the value was complete.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A reserved or unknown tag byte was encountered.
    #[error("invalid tag byte 0x{0:02x}")]
    InvalidTag(u8),
    /// A str payload is not valid UTF-8.
    #[error("invalid UTF-8 in str payload")]
    Utf8Invalid,
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::InvalidUtf8 => DecodeError::Utf8Invalid,
            // The reader side only ever reports end-of-input otherwise.
            _ => DecodeError::UnexpectedEof,
        }
    }
}
