//! Map database cursors into ordered rows.
//!
//! The crate consumes a small driver contract ([`driver::Connection`],
//! [`driver::Statement`], [`driver::Cursor`]) and builds on it:
//!
//! - [`decode`] turns cursor positions into [`value::Value`]s, [`row::Row`]s
//!   and [`decode::Cell`]s, materializing CLOB/NCLOB/BLOB columns
//! - [`sync::ConnExt`] executes statements (returning generated keys for
//!   inserts) and runs queries with guaranteed cursor/statement release
//!
//! ```ignore
//! use rowmap::sqlite::Conn;
//! use rowmap::sync::ConnExt;
//!
//! let mut conn = Conn::new("sqlite::memory:")?;
//! conn.execute("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)", ())?;
//! let id = conn.execute("INSERT INTO t(name) VALUES (?)", ["alice"])?;
//! let names = conn.query_rows("SELECT name FROM t", (), |row| row.try_get::<String>("name"))?;
//! ```

pub mod constant;
pub mod decode;
pub mod driver;
pub mod error;
pub mod memory;
mod opts;
pub mod params;
pub mod row;
pub mod sync;
pub mod value;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use opts::{Mode, Opts};

#[cfg(feature = "derive")]
pub mod r#macro {
    pub use rowmap_derive::FromRow;
}

#[cfg(test)]
mod constant_test;
#[cfg(test)]
mod row_test;
#[cfg(test)]
mod value_test;
