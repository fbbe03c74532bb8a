//! `ZiProtoDecoder` — cursor-based decoder over a borrowed byte slice.

use ziproto_buffers::Reader;

use crate::constants::*;
use crate::{DecodeError, Value};

/// Decodes ZiProto bytes into [`Value`] trees.
///
/// The decoder borrows its input and owns only the read position. One
/// [`ZiProtoDecoder::read_any`] call consumes exactly the bytes of one
/// value and leaves the cursor on the first unconsumed byte, so callers
/// can detect trailing data via [`ZiProtoDecoder::position`] or decode a
/// stream of consecutive values by calling `read_any` repeatedly. Every
/// read is bounds-checked; malformed or truncated input fails with a
/// typed [`DecodeError`], never a panic.
pub struct ZiProtoDecoder<'a> {
    reader: Reader<'a>,
}

impl<'a> ZiProtoDecoder<'a> {
    /// Creates a decoder over the given input slice.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(input),
        }
    }

    /// Index of the next unread byte.
    pub fn position(&self) -> usize {
        self.reader.x
    }

    /// Number of unread bytes remaining.
    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    /// Reads one value, recursing into containers.
    pub fn read_any(&mut self) -> Result<Value, DecodeError> {
        let byte = self.reader.u8()?;

        // positive fixint: 0x00..0x7f
        if byte <= POS_FIXINT_MAX {
            return Ok(Value::UInt(byte as u64));
        }
        // negative fixint: 0xe0..0xff -> -32..-1
        if byte >= NEG_FIXINT_MIN {
            return Ok(Value::Int(byte as i8 as i64));
        }
        // fixmap: 0x80..0x8f
        if (FIXMAP..FIXARRAY).contains(&byte) {
            return self.read_map(byte as usize & 0xf);
        }
        // fixarray: 0x90..0x9f
        if (FIXARRAY..FIXSTR).contains(&byte) {
            return self.read_arr(byte as usize & 0xf);
        }
        // fixstr: 0xa0..0xbf
        if (FIXSTR..NIL).contains(&byte) {
            return self.read_str(byte as usize & 0x1f);
        }

        match byte {
            NIL => Ok(Value::Nil),
            FALSE => Ok(Value::Bool(false)),
            TRUE => Ok(Value::Bool(true)),
            BIN8 => {
                let n = self.reader.u8()? as usize;
                Ok(Value::Bin(self.reader.buf(n)?.to_vec()))
            }
            BIN16 => {
                let n = self.reader.u16()? as usize;
                Ok(Value::Bin(self.reader.buf(n)?.to_vec()))
            }
            BIN32 => {
                let n = self.reader.u32()? as usize;
                Ok(Value::Bin(self.reader.buf(n)?.to_vec()))
            }
            FLOAT32 => Ok(Value::Float(self.reader.f32()? as f64)),
            FLOAT64 => Ok(Value::Float(self.reader.f64()?)),
            UINT8 => Ok(Value::UInt(self.reader.u8()? as u64)),
            UINT16 => Ok(Value::UInt(self.reader.u16()? as u64)),
            UINT32 => Ok(Value::UInt(self.reader.u32()? as u64)),
            UINT64 => Ok(Value::UInt(self.reader.u64()?)),
            INT8 => Ok(Value::Int(self.reader.i8()? as i64)),
            INT16 => Ok(Value::Int(self.reader.i16()? as i64)),
            INT32 => Ok(Value::Int(self.reader.i32()? as i64)),
            INT64 => Ok(Value::Int(self.reader.i64()?)),
            STR8 => {
                let n = self.reader.u8()? as usize;
                self.read_str(n)
            }
            STR16 => {
                let n = self.reader.u16()? as usize;
                self.read_str(n)
            }
            STR32 => {
                let n = self.reader.u32()? as usize;
                self.read_str(n)
            }
            ARRAY16 => {
                let n = self.reader.u16()? as usize;
                self.read_arr(n)
            }
            ARRAY32 => {
                let n = self.reader.u32()? as usize;
                self.read_arr(n)
            }
            MAP16 => {
                let n = self.reader.u16()? as usize;
                self.read_map(n)
            }
            MAP32 => {
                let n = self.reader.u32()? as usize;
                self.read_map(n)
            }
            _ => Err(DecodeError::InvalidTag(byte)),
        }
    }

    fn read_str(&mut self, size: usize) -> Result<Value, DecodeError> {
        Ok(Value::Str(self.reader.utf8(size)?.to_string()))
    }

    fn read_arr(&mut self, count: usize) -> Result<Value, DecodeError> {
        // Each element costs at least one byte, so capping preallocation by
        // the remaining input keeps forged 32-bit counts from allocating
        // gigabytes before the inevitable EOF.
        let mut arr = Vec::with_capacity(count.min(self.reader.size()));
        for _ in 0..count {
            arr.push(self.read_any()?);
        }
        Ok(Value::Array(arr))
    }

    fn read_map(&mut self, count: usize) -> Result<Value, DecodeError> {
        let mut pairs = Vec::with_capacity(count.min(self.reader.size() / 2));
        for _ in 0..count {
            let key = self.read_any()?;
            let val = self.read_any()?;
            pairs.push((key, val));
        }
        Ok(Value::Map(pairs))
    }
}
