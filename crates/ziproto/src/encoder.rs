//! `ZiProtoEncoder` — the ZiProto wire encoder.

use ziproto_buffers::Writer;

use crate::constants::*;
use crate::{EncodeError, Value};

/// Encodes [`Value`] trees into ZiProto bytes.
///
/// Width selection is always minimal within the tag family picked by the
/// value's variant, so two encoders given the same value produce
/// byte-identical output. The encoder owns a reusable [`Writer`]; each
/// [`ZiProtoEncoder::encode`] call starts a fresh window and a failed call
/// rewinds it, so no partial output ever escapes.
pub struct ZiProtoEncoder {
    pub writer: Writer,
}

impl Default for ZiProtoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiProtoEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Creates an encoder whose writer starts at the given allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            writer: Writer::with_alloc_size(alloc_size),
        }
    }

    /// Encodes one value tree and returns the wire bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.rewind();
                Err(err)
            }
        }
    }

    /// Writes one value, recursing into containers.
    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Array(items) => {
                self.write_array_hdr(items.len())?;
                for item in items {
                    self.write_any(item)?;
                }
                Ok(())
            }
            Value::Map(pairs) => {
                self.write_map_hdr(pairs.len())?;
                for (key, val) in pairs {
                    self.write_any(key)?;
                    self.write_any(val)?;
                }
                Ok(())
            }
            scalar => self.write_scalar(scalar),
        }
    }

    /// Writes one value without recursing: scalars are encoded completely,
    /// containers contribute only their header. The caller owns the
    /// header/body consistency of containers (the format carries no end
    /// marker); [`ZiProtoEncoder::write_any`] is the driver that maintains
    /// it.
    pub fn write_scalar(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Nil => self.write_nil(),
            Value::Bool(b) => self.write_bool(*b),
            Value::UInt(u) => self.write_uint(*u),
            Value::Int(i) => self.write_int(*i),
            Value::Float(f) => self.write_float(*f),
            Value::Bin(b) => self.write_bin(b),
            Value::Str(s) => self.write_str(s),
            Value::Array(items) => self.write_array_hdr(items.len()),
            Value::Map(pairs) => self.write_map_hdr(pairs.len()),
        }
    }

    pub fn write_nil(&mut self) -> Result<(), EncodeError> {
        Ok(self.writer.u8(NIL)?)
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), EncodeError> {
        Ok(self.writer.u8(if b { TRUE } else { FALSE })?)
    }

    /// Unsigned family: positive fixint, then uint8..uint64, minimal width.
    pub fn write_uint(&mut self, uint: u64) -> Result<(), EncodeError> {
        if uint <= POS_FIXINT_MAX as u64 {
            self.writer.u8(uint as u8)?;
        } else if uint <= 0xff {
            self.writer.u16(((UINT8 as u16) << 8) | uint as u16)?;
        } else if uint <= 0xffff {
            self.writer.u8u16(UINT16, uint as u16)?;
        } else if uint <= 0xffff_ffff {
            self.writer.u8u32(UINT32, uint as u32)?;
        } else {
            self.writer.u8u64(UINT64, uint)?;
        }
        Ok(())
    }

    /// Signed family: negative fixint, then int8..int64, minimal width.
    ///
    /// Non-negative values stay in the signed ladder (starting at int8)
    /// rather than borrowing the positive fixint form, which belongs to the
    /// unsigned family and would decode as `UInt`.
    pub fn write_int(&mut self, int: i64) -> Result<(), EncodeError> {
        if (-32..0).contains(&int) {
            // negative fixint: 0xe0..0xff
            self.writer.u8(int as u8)?;
        } else if (-0x80..0x80).contains(&int) {
            self.writer.u16(((INT8 as u16) << 8) | (int as u8 as u16))?;
        } else if (-0x8000..0x8000).contains(&int) {
            self.writer.u8u16(INT16, int as u16)?;
        } else if (-0x8000_0000..0x8000_0000).contains(&int) {
            self.writer.u8u32(INT32, int as u32)?;
        } else {
            self.writer.u8u64(INT64, int as u64)?;
        }
        Ok(())
    }

    /// Floats downgrade to float32 only when the value survives a
    /// round-trip through single precision bit-for-bit; NaN always stays
    /// float64 so the output never depends on how the host casts NaN
    /// payloads.
    pub fn write_float(&mut self, float: f64) -> Result<(), EncodeError> {
        let narrow = float as f32;
        if !float.is_nan() && (narrow as f64).to_bits() == float.to_bits() {
            self.writer.u8f32(FLOAT32, narrow)?;
        } else {
            self.writer.u8f64(FLOAT64, float)?;
        }
        Ok(())
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= 0x1f {
            self.writer.u8(FIXSTR | length as u8)?;
        } else if length <= 0xff {
            self.writer.u16(((STR8 as u16) << 8) | length as u16)?;
        } else if length <= 0xffff {
            self.writer.u8u16(STR16, length as u16)?;
        } else if length <= MAX_LENGTH {
            self.writer.u8u32(STR32, length as u32)?;
        } else {
            return Err(EncodeError::SizeTooLarge(length));
        }
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        self.write_str_hdr(s.len())?;
        self.writer.utf8(s)?;
        Ok(())
    }

    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= 0xff {
            self.writer.u16(((BIN8 as u16) << 8) | length as u16)?;
        } else if length <= 0xffff {
            self.writer.u8u16(BIN16, length as u16)?;
        } else if length <= MAX_LENGTH {
            self.writer.u8u32(BIN32, length as u32)?;
        } else {
            return Err(EncodeError::SizeTooLarge(length));
        }
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), EncodeError> {
        self.write_bin_hdr(buf.len())?;
        self.writer.buf(buf)?;
        Ok(())
    }

    /// Writes an array header only; the caller must follow with exactly
    /// `length` values.
    pub fn write_array_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= 0xf {
            self.writer.u8(FIXARRAY | length as u8)?;
        } else if length <= 0xffff {
            self.writer.u8u16(ARRAY16, length as u16)?;
        } else if length <= MAX_LENGTH {
            self.writer.u8u32(ARRAY32, length as u32)?;
        } else {
            return Err(EncodeError::SizeTooLarge(length));
        }
        Ok(())
    }

    /// Writes a map header only; the caller must follow with exactly
    /// `length` key-value pairs.
    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        if length <= 0xf {
            self.writer.u8(FIXMAP | length as u8)?;
        } else if length <= 0xffff {
            self.writer.u8u16(MAP16, length as u16)?;
        } else if length <= MAX_LENGTH {
            self.writer.u8u32(MAP32, length as u32)?;
        } else {
            return Err(EncodeError::SizeTooLarge(length));
        }
        Ok(())
    }
}
