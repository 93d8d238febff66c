//! Turning cursor positions into values and rows.

use std::io::{self, Read};

use simdutf8::basic::from_utf8;

use crate::constant::ColumnType;
use crate::driver::{Cursor, LobStream};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;

/// One column of the next row, or the lack of a next row
///
/// `has_value` is false when the cursor was exhausted; `value` is then `Null`
/// and carries no meaning. This separates "no row" from "a row whose column is
/// NULL".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub has_value: bool,
    pub value: Value,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(value: Value) -> Self {
        Self {
            has_value: true,
            value,
        }
    }

    /// `None` for an exhausted cursor, otherwise the value (which may be `Null`)
    pub fn into_option(self) -> Option<Value> {
        self.has_value.then_some(self.value)
    }
}

impl From<Cell> for (bool, Value) {
    fn from(cell: Cell) -> Self {
        (cell.has_value, cell.value)
    }
}

/// Decode column `index` (1-based) of the current row
///
/// LOB columns are materialized through their streams: null handles and
/// zero-length objects both decode to `Value::Null`. Every stream is dropped
/// before this returns.
pub fn read_cell<C: Cursor + ?Sized>(cursor: &mut C, index: usize) -> Result<Value> {
    match cursor.column_type(index)? {
        ColumnType::Clob => read_text(cursor.clob(index)?),
        ColumnType::NClob => read_text(cursor.nclob(index)?),
        ColumnType::Blob => read_bytes(cursor.blob(index)?),
        ColumnType::Other => cursor.object(index),
    }
}

fn drain(stream: Option<LobStream<'_>>) -> Result<Option<Vec<u8>>> {
    let Some(mut stream) = stream else {
        return Ok(None);
    };
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok((!buf.is_empty()).then_some(buf))
}

fn read_bytes(stream: Option<LobStream<'_>>) -> Result<Value> {
    Ok(drain(stream)?.map_or(Value::Null, Value::Bytes))
}

fn read_text(stream: Option<LobStream<'_>>) -> Result<Value> {
    let Some(buf) = drain(stream)? else {
        return Ok(Value::Null);
    };
    let text = from_utf8(&buf).map_err(|e| {
        Error::StreamReadError(io::Error::new(io::ErrorKind::InvalidData, e))
    })?;
    Ok(Value::Text(text.to_owned()))
}

/// Advance and decode the whole row, keyed by column label
///
/// Returns `None` once the cursor is exhausted, and keeps returning `None` on
/// later calls.
pub fn next_row<C: Cursor + ?Sized>(cursor: &mut C) -> Result<Option<Row>> {
    if !cursor.advance()? {
        return Ok(None);
    }
    let count = cursor.column_count();
    let mut row = Row::with_capacity(count);
    for i in 1..=count {
        let value = read_cell(cursor, i)?;
        row.insert(cursor.column_label(i)?, value);
    }
    Ok(Some(row))
}

/// Call `f` for every remaining row
pub fn for_each_row<C, F>(cursor: &mut C, mut f: F) -> Result<()>
where
    C: Cursor + ?Sized,
    F: FnMut(Row) -> Result<()>,
{
    while let Some(row) = next_row(cursor)? {
        f(row)?;
    }
    Ok(())
}

/// Advance and decode only column `index`
pub fn next_cell<C: Cursor + ?Sized>(cursor: &mut C, index: usize) -> Result<Cell> {
    if !cursor.advance()? {
        return Ok(Cell::empty());
    }
    read_cell(cursor, index).map(Cell::new)
}

/// Call `f` with column `index` of every remaining row
pub fn for_each_cell<C, F>(cursor: &mut C, index: usize, mut f: F) -> Result<()>
where
    C: Cursor + ?Sized,
    F: FnMut(Value) -> Result<()>,
{
    loop {
        let cell = next_cell(cursor, index)?;
        if !cell.has_value {
            return Ok(());
        }
        f(cell.value)?;
    }
}

/// Pull-based row iteration
///
/// ```ignore
/// for row in rowmap::decode::rows(&mut cursor) {
///     let row = row?;
/// }
/// ```
pub fn rows<C: Cursor + ?Sized>(cursor: &mut C) -> Rows<'_, C> {
    Rows {
        cursor,
        done: false,
    }
}

/// Iterator returned by [`rows`]. Fused after exhaustion or the first error.
pub struct Rows<'a, C: Cursor + ?Sized> {
    cursor: &'a mut C,
    done: bool,
}

impl<C: Cursor + ?Sized> Iterator for Rows<'_, C> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_row(&mut *self.cursor) {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<C: Cursor + ?Sized> std::iter::FusedIterator for Rows<'_, C> {}
