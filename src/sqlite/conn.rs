use std::sync::Arc;

use rusqlite::OpenFlags;

use crate::constant::ColumnType;
use crate::driver::{Close, ColumnInfo, Connection, Statement};
use crate::error::{Error, Result};
use crate::memory::MemoryCursor;
use crate::opts::{Mode, Opts};
use crate::value::Value;

use super::cursor::SqliteCursor;

/// Label of the single column in a generated-keys cursor
pub const GENERATED_KEY_LABEL: &str = "last_insert_rowid()";

/// A SQLite connection
pub struct Conn {
    inner: rusqlite::Connection,
}

impl Conn {
    /// Open a connection from connection options or a `sqlite:` URL
    ///
    /// ```ignore
    /// let conn = Conn::new("sqlite::memory:")?;
    /// let conn = Conn::new(Opts::file("app.db"))?;
    /// ```
    pub fn new<O: TryInto<Opts>>(opts: O) -> Result<Self>
    where
        Error: From<O::Error>,
    {
        let opts: Opts = opts.try_into()?;
        let flags = open_flags(opts.mode);

        let inner = match &opts.path {
            Some(path) => rusqlite::Connection::open_with_flags(path, flags)?,
            None => rusqlite::Connection::open_in_memory_with_flags(flags)?,
        };
        inner.busy_timeout(opts.busy_timeout)?;

        if let Some(init_command) = &opts.init_command {
            inner.execute_batch(init_command)?;
        }

        tracing::debug!(path = ?opts.path, mode = ?opts.mode, "opened connection");
        Ok(Self { inner })
    }

    /// Run several `;`-separated statements without parameters or results
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.inner.execute_batch(sql)?;
        Ok(())
    }

    pub fn as_inner(&self) -> &rusqlite::Connection {
        &self.inner
    }

    pub fn into_inner(self) -> rusqlite::Connection {
        self.inner
    }
}

/// Wrap an already-open connection
impl From<rusqlite::Connection> for Conn {
    fn from(inner: rusqlite::Connection) -> Self {
        Self { inner }
    }
}

fn open_flags(mode: Mode) -> OpenFlags {
    let base = OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    match mode {
        Mode::ReadOnly => base | OpenFlags::SQLITE_OPEN_READ_ONLY,
        Mode::ReadWrite => base | OpenFlags::SQLITE_OPEN_READ_WRITE,
        Mode::ReadWriteCreate => {
            base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        }
    }
}

impl Connection for Conn {
    type Statement<'c>
        = SqliteStatement<'c>
    where
        Self: 'c;

    fn prepare(&mut self, sql: &str) -> Result<SqliteStatement<'_>> {
        let stmt = self.inner.prepare(sql)?;
        let columns = stmt
            .columns()
            .iter()
            .map(|col| ColumnInfo::new(col.name(), ColumnType::from_decl_type(col.decl_type())))
            .collect();
        Ok(SqliteStatement {
            conn: &self.inner,
            stmt,
            columns,
            generated_key: None,
        })
    }
}

/// A prepared SQLite statement, finalized on drop
pub struct SqliteStatement<'c> {
    conn: &'c rusqlite::Connection,
    stmt: rusqlite::Statement<'c>,
    columns: Arc<[ColumnInfo]>,
    generated_key: Option<i64>,
}

impl Close for SqliteStatement<'_> {
    fn close(&mut self) -> Result<()> {
        tracing::trace!("released statement");
        Ok(())
    }
}

impl Statement for SqliteStatement<'_> {
    type Cursor<'s>
        = SqliteCursor<'s>
    where
        Self: 's;

    type GeneratedKeys<'s>
        = MemoryCursor
    where
        Self: 's;

    fn bind(&mut self, index: usize, value: &Value) -> Result<()> {
        self.stmt
            .raw_bind_parameter(index, value)
            .map_err(|e| Error::BindingError {
                index,
                message: e.to_string(),
            })
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(self.stmt.parameter_count())
    }

    fn execute_update(&mut self) -> Result<u64> {
        let previous = self.conn.last_insert_rowid();
        let changed = self.stmt.raw_execute()?;
        // WITHOUT ROWID tables and skipped inserts leave the rowid untouched
        let rowid = self.conn.last_insert_rowid();
        self.generated_key = (changed > 0 && rowid != previous).then_some(rowid);
        Ok(changed as u64)
    }

    fn execute_query(&mut self) -> Result<SqliteCursor<'_>> {
        let columns = Arc::clone(&self.columns);
        Ok(SqliteCursor::new(self.stmt.raw_query(), columns))
    }

    fn generated_keys(&mut self) -> Result<MemoryCursor> {
        let mut keys = MemoryCursor::new(vec![ColumnInfo::new(
            GENERATED_KEY_LABEL,
            ColumnType::Other,
        )]);
        if let Some(key) = self.generated_key {
            keys.push_row(vec![Value::SignedInt(key)]);
        }
        Ok(keys)
    }
}
