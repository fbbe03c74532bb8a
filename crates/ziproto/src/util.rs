//! Convenience ZiProto entry points.

use crate::{DecodeError, EncodeError, Value, ZiProtoDecoder, ZiProtoEncoder};

/// Encodes one value into a fresh byte vector.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZiProtoEncoder::new();
    encoder.encode(value)
}

/// Decodes one value from the front of `blob`. Returns the value and the
/// number of bytes consumed; any remaining bytes are trailing data (or the
/// next value of a stream).
pub fn decode_value(blob: &[u8]) -> Result<(Value, usize), DecodeError> {
    let mut decoder = ZiProtoDecoder::new(blob);
    let value = decoder.read_any()?;
    Ok((value, decoder.position()))
}
