//! `ZiProtoEncoderStable` — ZiProto encoder with canonical map ordering.

use ziproto_buffers::Writer;

use crate::{EncodeError, Value, ZiProtoEncoder};

/// Encoder that emits map entries sorted by their encoded key bytes.
///
/// The wire rules are identical to [`ZiProtoEncoder`]; only map entry
/// order changes, so two semantically equal maps that differ in insertion
/// order produce the same bytes. Duplicate keys keep their insertion order
/// relative to each other. Keys are canonicalized recursively, so a
/// map-valued key sorts by its canonical form.
pub struct ZiProtoEncoderStable {
    pub inner: ZiProtoEncoder,
}

impl Default for ZiProtoEncoderStable {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiProtoEncoderStable {
    pub fn new() -> Self {
        Self {
            inner: ZiProtoEncoder::new(),
        }
    }

    /// Encodes one value tree canonically and returns the wire bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.inner.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.inner.writer.flush()),
            Err(err) => {
                self.inner.writer.rewind();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Map(pairs) => self.write_map(pairs),
            Value::Array(items) => {
                self.inner.write_array_hdr(items.len())?;
                for item in items {
                    self.write_any(item)?;
                }
                Ok(())
            }
            scalar => self.inner.write_scalar(scalar),
        }
    }

    /// Writes map entries sorted by encoded key bytes.
    pub fn write_map(&mut self, pairs: &[(Value, Value)]) -> Result<(), EncodeError> {
        let mut order: Vec<(Vec<u8>, usize)> = Vec::with_capacity(pairs.len());
        for (index, (key, _)) in pairs.iter().enumerate() {
            order.push((encode_key(key)?, index));
        }
        // Ties on key bytes fall back to the index, keeping duplicates in
        // insertion order.
        order.sort();

        self.inner.write_map_hdr(pairs.len())?;
        for (key_bytes, index) in &order {
            self.inner.writer.buf(key_bytes)?;
            self.write_any(&pairs[*index].1)?;
        }
        Ok(())
    }
}

fn encode_key(key: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut sub = ZiProtoEncoderStable {
        inner: ZiProtoEncoder {
            writer: Writer::with_alloc_size(64),
        },
    };
    sub.write_any(key)?;
    Ok(sub.inner.writer.flush())
}
