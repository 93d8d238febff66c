use std::sync::Arc;

use crate::constant::ColumnType;
use crate::driver::{Close, ColumnInfo, Cursor, LobStream, column_slot, inline_lob_stream};
use crate::error::{Error, Result};
use crate::value::Value;

use super::value_from_ref;

/// Cursor over a running SQLite query
///
/// Each `advance` copies the row out of SQLite, so accessors can be called in
/// any order and any number of times until the next `advance`.
pub struct SqliteCursor<'s> {
    rows: rusqlite::Rows<'s>,
    columns: Arc<[ColumnInfo]>,
    current: Option<Vec<Value>>,
}

impl<'s> SqliteCursor<'s> {
    pub(crate) fn new(rows: rusqlite::Rows<'s>, columns: Arc<[ColumnInfo]>) -> Self {
        Self {
            rows,
            columns,
            current: None,
        }
    }

    fn current_value(&self, index: usize) -> Result<&Value> {
        let slot = column_slot(index, self.columns.len())?;
        let row = self.current.as_ref().ok_or_else(|| {
            Error::BadUsageError("Cursor is not positioned on a row".to_string())
        })?;
        Ok(&row[slot])
    }
}

impl Close for SqliteCursor<'_> {
    fn close(&mut self) -> Result<()> {
        self.current = None;
        Ok(())
    }
}

impl Cursor for SqliteCursor<'_> {
    fn advance(&mut self) -> Result<bool> {
        let Some(row) = self.rows.next()? else {
            self.current = None;
            return Ok(false);
        };
        let mut values = Vec::with_capacity(self.columns.len());
        for i in 0..self.columns.len() {
            values.push(value_from_ref(row.get_ref(i)?));
        }
        self.current = Some(values);
        Ok(true)
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Declared type, except that a number stored in a LOB column reports
    /// `Other` and decodes as that number
    fn column_type(&self, index: usize) -> Result<ColumnType> {
        let slot = column_slot(index, self.columns.len())?;
        match self.current.as_ref().map(|row| &row[slot]) {
            Some(Value::SignedInt(_) | Value::Double(_)) => Ok(ColumnType::Other),
            _ => Ok(self.columns[slot].column_type),
        }
    }

    fn column_label(&self, index: usize) -> Result<&str> {
        let slot = column_slot(index, self.columns.len())?;
        Ok(&self.columns[slot].label)
    }

    fn object(&mut self, index: usize) -> Result<Value> {
        self.current_value(index).cloned()
    }

    fn clob(&mut self, index: usize) -> Result<Option<LobStream<'_>>> {
        inline_lob_stream(self.current_value(index)?)
    }

    fn blob(&mut self, index: usize) -> Result<Option<LobStream<'_>>> {
        inline_lob_stream(self.current_value(index)?)
    }
}
