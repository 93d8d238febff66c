//! Blocking statement execution and queries over any [`Connection`].
//!
//! Every call is a single attempt on the caller's connection: the statement and
//! cursor it opens are released before it returns, cursor first, whether the
//! call succeeds or fails.

use crate::constant::is_insert;
use crate::decode::{self, Cell};
use crate::driver::{Connection, Cursor, Scoped, Statement};
use crate::error::{Error, Result};
use crate::params::{Params, bind_params};
use crate::row::{FromRow, Row};
use crate::value::Value;

/// Statement execution and query helpers, available on every [`Connection`]
pub trait ConnExt: Connection {
    /// Execute an update
    ///
    /// # Returns
    /// * the generated key, when `sql` starts with `INSERT` (case-insensitive)
    /// * the number of affected rows otherwise
    ///
    /// # Errors
    /// * `Error::GeneratedKeyUnavailable` - an insert produced no key
    /// * `Error::BindingError` / `Error::ExecutionError` - from the driver
    #[tracing::instrument(skip_all, fields(sql = sql, params = params.len()))]
    fn execute<P: Params>(&mut self, sql: &str, params: P) -> Result<i64> {
        let mut stmt = Scoped::new(self.prepare(sql)?);
        bind_params(&mut *stmt, &params)?;
        let affected = stmt.execute_update()?;
        tracing::debug!(affected, "executed update");

        let result = if is_insert(sql) {
            let mut keys = Scoped::new(stmt.generated_keys()?);
            let key = read_generated_key(&mut *keys)?;
            keys.close()?;
            tracing::debug!(key, "generated key");
            key
        } else {
            i64::try_from(affected).map_err(|e| {
                Error::BadUsageError(format!("Affected row count {} overflows: {}", affected, e))
            })?
        };

        stmt.close()?;
        Ok(result)
    }

    /// Run a query and hand the cursor to `action`
    ///
    /// `action` may fail; the cursor and statement are released before its
    /// error propagates.
    #[tracing::instrument(skip_all, fields(sql = sql, params = params.len()))]
    fn query_result<P, T, F>(&mut self, sql: &str, params: P, action: F) -> Result<T>
    where
        P: Params,
        F: FnOnce(&mut dyn Cursor) -> Result<T>,
    {
        let mut stmt = Scoped::new(self.prepare(sql)?);
        bind_params(&mut *stmt, &params)?;
        let mut rs = Scoped::new(stmt.execute_query()?);
        let result = action(&mut *rs)?;
        rs.close()?;
        stmt.close()?;
        Ok(result)
    }

    /// Collect every row through `transform`. Zero rows give an empty `Vec`.
    fn query_rows<P, T, F>(&mut self, sql: &str, params: P, mut transform: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(Row) -> Result<T>,
    {
        self.query_result(sql, params, |cursor| {
            let mut result = Vec::new();
            decode::for_each_row(cursor, |row| {
                result.push(transform(row)?);
                Ok(())
            })?;
            tracing::trace!(rows = result.len(), "collected rows");
            Ok(result)
        })
    }

    /// Transform the first row, if any. Further rows are not read.
    fn query_row<P, T, F>(&mut self, sql: &str, params: P, transform: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(Row) -> Result<T>,
    {
        self.query_result(sql, params, |cursor| {
            decode::next_row(cursor)?.map(transform).transpose()
        })
    }

    /// First column of the first row
    ///
    /// `has_value` is false when the query returned no rows, so a NULL in the
    /// first row is told apart from an empty result.
    fn query_cell<P: Params>(&mut self, sql: &str, params: P) -> Result<Cell> {
        self.query_result(sql, params, |cursor| decode::next_cell(cursor, 1))
    }

    /// [`ConnExt::query_rows`] with [`FromRow::from_row`] as the transform
    fn query_rows_as<T: FromRow, P: Params>(&mut self, sql: &str, params: P) -> Result<Vec<T>> {
        self.query_rows(sql, params, T::from_row)
    }

    /// [`ConnExt::query_row`] with [`FromRow::from_row`] as the transform
    fn query_row_as<T: FromRow, P: Params>(&mut self, sql: &str, params: P) -> Result<Option<T>> {
        self.query_row(sql, params, T::from_row)
    }
}

impl<C: Connection> ConnExt for C {}

fn read_generated_key<C: Cursor + ?Sized>(keys: &mut C) -> Result<i64> {
    let cell = decode::next_cell(keys, 1)?;
    if !cell.has_value {
        return Err(Error::GeneratedKeyUnavailable);
    }
    match cell.value {
        Value::Null => Err(Error::GeneratedKeyUnavailable),
        value => value.get::<i64>(),
    }
}
