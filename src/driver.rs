//! The connection / statement / cursor contract this crate consumes.
//!
//! Drivers implement these traits; everything in [`crate::decode`] and
//! [`crate::sync`] is written against them. Column and parameter indices are
//! 1-based throughout, matching the usual relational client API shape.

use std::io::Read;
use std::ops::{Deref, DerefMut};

use auto_impl::auto_impl;

use crate::constant::ColumnType;
use crate::error::{Error, Result};
use crate::value::Value;

/// A large-object stream. Dropping it releases the stream.
pub type LobStream<'a> = Box<dyn Read + 'a>;

/// Column metadata of a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub label: String,
    pub column_type: ColumnType,
}

impl ColumnInfo {
    pub fn new(label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            label: label.into(),
            column_type,
        }
    }
}

/// Explicit release of a driver resource
pub trait Close {
    /// Release the resource. Called at most once by this crate.
    fn close(&mut self) -> Result<()>;
}

impl<T: Close + ?Sized> Close for &mut T {
    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<T: Close + ?Sized> Close for Box<T> {
    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// An open connection that can prepare statements
pub trait Connection {
    type Statement<'c>: Statement
    where
        Self: 'c;

    fn prepare(&mut self, sql: &str) -> Result<Self::Statement<'_>>;
}

/// A prepared statement
pub trait Statement: Close {
    type Cursor<'s>: Cursor
    where
        Self: 's;

    type GeneratedKeys<'s>: Cursor
    where
        Self: 's;

    /// Bind `value` to the 1-based placeholder `index`
    fn bind(&mut self, index: usize, value: &Value) -> Result<()>;

    /// Number of placeholders, if the driver knows it
    fn parameter_count(&self) -> Option<usize> {
        None
    }

    /// Execute as an update and return the number of affected rows
    fn execute_update(&mut self) -> Result<u64>;

    /// Execute as a query and return a cursor positioned before the first row
    fn execute_query(&mut self) -> Result<Self::Cursor<'_>>;

    /// Keys generated by the last `execute_update`
    fn generated_keys(&mut self) -> Result<Self::GeneratedKeys<'_>>;
}

/// A forward-only cursor over result rows
///
/// Starts positioned before the first row. Once [`Cursor::advance`] returns
/// `false` it keeps returning `false`.
#[auto_impl(&mut, Box)]
pub trait Cursor: Close {
    fn advance(&mut self) -> Result<bool>;

    fn column_count(&self) -> usize;

    fn column_type(&self, index: usize) -> Result<ColumnType>;

    fn column_label(&self, index: usize) -> Result<&str>;

    /// Generic accessor for the current row
    fn object(&mut self, index: usize) -> Result<Value>;

    /// Character stream of a CLOB column; `None` for a null handle
    fn clob(&mut self, index: usize) -> Result<Option<LobStream<'_>>>;

    /// Character stream of an NCLOB column; `None` for a null handle
    fn nclob(&mut self, index: usize) -> Result<Option<LobStream<'_>>> {
        self.clob(index)
    }

    /// Byte stream of a BLOB column; `None` for a null handle
    fn blob(&mut self, index: usize) -> Result<Option<LobStream<'_>>>;
}

/// Map a 1-based column index to a slot in `0..count`
pub fn column_slot(index: usize, count: usize) -> Result<usize> {
    if index == 0 || index > count {
        return Err(Error::BadUsageError(format!(
            "Column index {} out of range 1..={}",
            index, count
        )));
    }
    Ok(index - 1)
}

/// Stream over an already materialized value, for drivers that fetch LOBs inline
pub fn inline_lob_stream(value: &Value) -> Result<Option<LobStream<'_>>> {
    match value {
        Value::Null => Ok(None),
        Value::Text(s) | Value::Other(s) => Ok(Some(Box::new(s.as_bytes()))),
        Value::Bytes(b) => Ok(Some(Box::new(b.as_slice()))),
        value => Err(Error::BadUsageError(format!(
            "Cannot stream {} as a large object",
            value.kind()
        ))),
    }
}

/// Guard that closes a resource when dropped
///
/// On the success path call [`Scoped::close`] so release errors propagate. A
/// guard dropped without it (an early return or `?`) still closes the
/// resource and logs a failure instead of replacing the error in flight.
pub struct Scoped<T: Close> {
    inner: T,
    closed: bool,
}

impl<T: Close> Scoped<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.inner.close()
    }
}

impl<T: Close> Deref for Scoped<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Close> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Close> Drop for Scoped<T> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(err) = self.inner.close() {
            tracing::warn!(%err, "failed to release resource");
        }
    }
}
