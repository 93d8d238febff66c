//! Decoded column values and conversions into Rust types

use crate::error::{Error, Result};

/// A decoded cell
///
/// The set of variants is closed so row transforms can match exhaustively.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// SQL NULL, a null LOB handle, or a zero-length LOB
    #[default]
    Null,
    Bool(bool),
    /// Signed integer
    SignedInt(i64),
    /// Unsigned integer (BIGINT UNSIGNED and similar)
    UnsignedInt(u64),
    Double(f64),
    /// Character data, including materialized CLOB/NCLOB columns
    Text(String),
    /// Binary data, including materialized BLOB columns
    Bytes(Vec<u8>),
    /// Driver-specific scalar (DECIMAL, DATE, ...) in its textual form
    Other(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOL",
            Value::SignedInt(_) => "SIGNED INT",
            Value::UnsignedInt(_) => "UNSIGNED INT",
            Value::Double(_) => "DOUBLE",
            Value::Text(_) => "TEXT",
            Value::Bytes(_) => "BYTES",
            Value::Other(_) => "OTHER",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Other(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::SignedInt(v) => Some(v),
            Value::UnsignedInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Convert into a Rust type, see [`FromValue`]
    pub fn get<T: FromValue>(self) -> Result<T> {
        T::from_value(self)
    }
}

fn mismatch<T>(value: &Value) -> Error {
    Error::BadUsageError(format!(
        "Cannot decode {} to {}",
        value.kind(),
        std::any::type_name::<T>()
    ))
}

/// Conversion from a decoded [`Value`] into a Rust type
///
/// Implementations return `Error::BadUsageError` for incompatible variants or
/// values that do not fit the target type.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

macro_rules! impl_from_value_int {
    ($($t:ty),+) => {
        $(
            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self> {
                    let out_of_range = |v: &dyn std::fmt::Display| {
                        Error::BadUsageError(format!(
                            "Value {} out of range for {}",
                            v,
                            stringify!($t)
                        ))
                    };
                    match value {
                        Value::SignedInt(v) => <$t>::try_from(v).map_err(|_e| out_of_range(&v)),
                        Value::UnsignedInt(v) => <$t>::try_from(v).map_err(|_e| out_of_range(&v)),
                        Value::Bool(v) => Ok(<$t>::from(v)),
                        value => Err(mismatch::<$t>(&value)),
                    }
                }
            }
        )+
    };
}

impl_from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::SignedInt(v) => Ok(v != 0),
            Value::UnsignedInt(v) => Ok(v != 0),
            value => Err(mismatch::<bool>(&value)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Double(v) => Ok(v),
            Value::SignedInt(v) => Ok(v as f64),
            Value::UnsignedInt(v) => Ok(v as f64),
            value => Err(mismatch::<f64>(&value)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) | Value::Other(s) => Ok(s),
            Value::Bytes(bytes) => String::from_utf8(bytes).map_err(|e| {
                Error::BadUsageError(format!("Cannot decode BYTES to String: {}", e))
            }),
            value => Err(mismatch::<String>(&value)),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b),
            Value::Text(s) => Ok(s.into_bytes()),
            value => Err(mismatch::<Vec<u8>>(&value)),
        }
    }
}

// ============================================================================
// Conversions into Value
// ============================================================================

macro_rules! impl_value_from {
    ($variant:ident: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )+
    };
}

impl_value_from!(SignedInt: i8, i16, i32, i64, u8, u16, u32);
impl_value_from!(UnsignedInt: u64);
impl_value_from!(Double: f32, f64);
impl_value_from!(Bool: bool);
impl_value_from!(Text: String, &str);
impl_value_from!(Bytes: Vec<u8>, &[u8]);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
