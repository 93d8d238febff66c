//! A cursor over rows held in memory.
//!
//! Drivers use it for small synthetic result sets such as generated keys. LOB
//! columns are streamed from the stored `Text`/`Bytes` values.

use std::collections::VecDeque;

use crate::constant::ColumnType;
use crate::driver::{Close, ColumnInfo, Cursor, LobStream, column_slot, inline_lob_stream};
use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    columns: Vec<ColumnInfo>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
    closed: bool,
}

impl MemoryCursor {
    pub fn new(columns: Vec<ColumnInfo>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// Append a row. Short rows are padded with `Null`, long rows truncated.
    pub fn push_row(&mut self, mut values: Vec<Value>) {
        values.resize(self.columns.len(), Value::Null);
        self.rows.push_back(values);
    }

    pub fn with_row(mut self, values: Vec<Value>) -> Self {
        self.push_row(values);
        self
    }

    /// Rows not yet reached by `advance`
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn current_value(&self, index: usize) -> Result<&Value> {
        let slot = column_slot(index, self.columns.len())?;
        let row = self.current.as_ref().ok_or_else(|| {
            Error::BadUsageError("Cursor is not positioned on a row".to_string())
        })?;
        Ok(&row[slot])
    }
}

impl Close for MemoryCursor {
    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.rows.clear();
        self.current = None;
        Ok(())
    }
}

impl Cursor for MemoryCursor {
    fn advance(&mut self) -> Result<bool> {
        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_type(&self, index: usize) -> Result<ColumnType> {
        let slot = column_slot(index, self.columns.len())?;
        Ok(self.columns[slot].column_type)
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
