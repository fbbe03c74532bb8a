//! ZiProto wire tag constants.
//!
//! The format uses the one-byte tag space below. Everything outside it
//! (`0xc1`, `0xc7..0xc9`, `0xd4..0xd8`) is reserved and rejected by the
//! decoder.

/// Largest value that fits in a positive fixint tag.
pub const POS_FIXINT_MAX: u8 = 0x7f;
/// Tag base for fixmap; the low nibble carries the pair count (0-15).
pub const FIXMAP: u8 = 0x80;
/// Tag base for fixarray; the low nibble carries the element count (0-15).
pub const FIXARRAY: u8 = 0x90;
/// Tag base for fixstr; the low 5 bits carry the byte length (0-31).
pub const FIXSTR: u8 = 0xa0;

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// First negative fixint tag; `0xe0..=0xff` map to -32..-1.
pub const NEG_FIXINT_MIN: u8 = 0xe0;

/// Format ceiling for byte lengths and container counts (4 GiB - 1).
pub const MAX_LENGTH: usize = u32::MAX as usize;
