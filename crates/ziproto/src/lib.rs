//! ZiProto binary serialization codec.
//!
//! ZiProto is a compact, self-describing wire format: a MessagePack-style
//! tag layout without the extension family. Values are scalars (nil,
//! bool, unsigned/signed integers, floats, binary, UTF-8 strings) and
//! ordered containers (arrays and maps), encoded with minimal-width tags
//! and big-endian payloads.
//!
//! The main entry points are [`encode_value`] / [`decode_value`]; the
//! reusable [`ZiProtoEncoder`] and borrowing [`ZiProtoDecoder`] sit
//! underneath them. [`ZiProtoEncoderStable`] adds canonical map ordering,
//! and [`ZiProtoJsonCodec`] bridges to `serde_json::Value`.
//!
//! ```
//! use ziproto::{decode_value, encode_value, Value};
//!
//! let value = Value::Array(vec![Value::UInt(1), Value::Str("hi".into())]);
//! let bytes = encode_value(&value).unwrap();
//! assert_eq!(bytes, [0x92, 0x01, 0xa2, b'h', b'i']);
//! let (back, consumed) = decode_value(&bytes).unwrap();
//! assert_eq!(back, value);
//! assert_eq!(consumed, bytes.len());
//! ```

pub mod constants;

mod codec;
mod decoder;
mod encoder;
mod encoder_stable;
mod error;
mod util;
mod value;

pub use codec::ZiProtoJsonCodec;
pub use decoder::ZiProtoDecoder;
pub use encoder::ZiProtoEncoder;
pub use encoder_stable::ZiProtoEncoderStable;
pub use error::{DecodeError, EncodeError};
pub use util::{decode_value, encode_value};
pub use value::Value;
