//! [`Value`] — the value model the ZiProto encoders and decoder operate on.

/// A single ZiProto value.
///
/// `UInt` and `Int` are distinct cases even though both are integers: the
/// wire format cannot infer signedness from a decoded bit pattern alone,
/// so the producer picks the family and the decoder reports back which
/// family a tag belonged to. `Map` preserves insertion order and does not
/// deduplicate keys; keys may be any `Value`, not just strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil
    Nil,
    /// Boolean value
    Bool(bool),
    /// Unsigned integer (positive fixint / uint8..uint64 family)
    UInt(u64),
    /// Signed integer (negative fixint / int8..int64 family)
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Binary data
    Bin(Vec<u8>),
    /// UTF-8 string (lengths on the wire are byte counts)
    Str(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Ordered key-value pairs
    Map(Vec<(Value, Value)>),
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Nil => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::UInt(u) => serde_json::json!(u),
            Value::Int(i) => serde_json::json!(i),
            // JSON has no NaN or infinities; json!(f) yields null for them.
            Value::Float(f) => serde_json::json!(f),
            Value::Bin(b) => {
                use base64::engine::general_purpose::STANDARD;
                use base64::Engine as _;
                let b64 = STANDARD.encode(&b);
                serde_json::Value::String(format!("data:application/octet-stream;base64,{b64}"))
            }
            Value::Str(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(pairs) => serde_json::Value::Object(
                pairs
                    .into_iter()
                    .map(|(k, v)| (json_key(k), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// JSON object keys must be strings; non-string map keys are stringified.
fn json_key(key: Value) -> String {
    match key {
        Value::Str(s) => s,
        other => serde_json::Value::from(other).to_string(),
    }
}
