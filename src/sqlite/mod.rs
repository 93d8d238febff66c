//! The driver contract implemented on `rusqlite`.
//!
//! SQLite keeps large objects inline, so LOB columns are classified from the
//! declared column type (`CLOB`, `NCLOB`, `BLOB`) and streamed from the
//! fetched value.

mod conn;
mod cursor;

pub use conn::{Conn, SqliteStatement};
pub use cursor::SqliteCursor;

use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use simdutf8::basic::from_utf8;

use crate::value::Value;

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            Value::SignedInt(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Value::UnsignedInt(v) => {
                let v = i64::try_from(*v)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                ToSqlOutput::Owned(SqlValue::Integer(v))
            }
            Value::Double(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Value::Text(s) | Value::Other(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Bytes(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

/// Copy a SQLite value out of the current row
///
/// TEXT that is not valid UTF-8 is returned as `Bytes`.
pub(crate) fn value_from_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::SignedInt(v),
        ValueRef::Real(v) => Value::Double(v),
        ValueRef::Text(bytes) => match from_utf8(bytes) {
            Ok(text) => Value::Text(text.to_owned()),
            Err(_) => Value::Bytes(bytes.to_vec()),
        },
        ValueRef::Blob(bytes) => Value::Bytes(bytes.to_vec()),
    }
}
