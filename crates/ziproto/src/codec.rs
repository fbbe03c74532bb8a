//! JSON interop: direct JSON encoding and a bundled JSON value codec.
//!
//! This is the crate's stand-in for a host-object adapter: a total
//! mapping between `serde_json::Value` and the wire, using the same
//! number-family policy as `From<serde_json::Value> for Value`.

use crate::{DecodeError, EncodeError, ZiProtoDecoder, ZiProtoEncoder};

impl ZiProtoEncoder {
    /// Encodes a JSON value straight to wire bytes, without building an
    /// intermediate [`crate::Value`] tree.
    pub fn encode_json(&mut self, json: &serde_json::Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        match self.write_json(json) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.rewind();
                Err(err)
            }
        }
    }

    /// Writes one JSON value, recursing into arrays and objects.
    pub fn write_json(&mut self, json: &serde_json::Value) -> Result<(), EncodeError> {
        match json {
            serde_json::Value::Null => self.write_nil(),
            serde_json::Value::Bool(b) => self.write_bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    self.write_uint(u)
                } else if let Some(i) = n.as_i64() {
                    self.write_int(i)
                } else {
                    self.write_float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => self.write_str(s),
            serde_json::Value::Array(arr) => {
                self.write_array_hdr(arr.len())?;
                for item in arr {
                    self.write_json(item)?;
                }
                Ok(())
            }
            serde_json::Value::Object(obj) => {
                self.write_map_hdr(obj.len())?;
                for (key, val) in obj {
                    self.write_str(key)?;
                    self.write_json(val)?;
                }
                Ok(())
            }
        }
    }
}

/// Bundled encoder/decoder pair between `serde_json::Value` and the wire.
pub struct ZiProtoJsonCodec {
    pub encoder: ZiProtoEncoder,
}

impl Default for ZiProtoJsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiProtoJsonCodec {
    pub fn new() -> Self {
        Self {
            encoder: ZiProtoEncoder::new(),
        }
    }

    /// Encodes a JSON value into wire bytes.
    pub fn encode(&mut self, json: &serde_json::Value) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode_json(json)
    }

    /// Decodes one value from the input and converts it to JSON. Returns
    /// the JSON value and the number of bytes consumed.
    pub fn decode(&self, blob: &[u8]) -> Result<(serde_json::Value, usize), DecodeError> {
        let mut decoder = ZiProtoDecoder::new(blob);
        let value = decoder.read_any()?;
        Ok((serde_json::Value::from(value), decoder.position()))
    }
}
