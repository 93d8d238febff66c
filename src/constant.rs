/// Column classifier used to pick a decode strategy
///
/// Only large objects get special treatment; every other column goes through
/// the cursor's generic accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Character large object
    Clob,
    /// National character large object
    NClob,
    /// Binary large object
    Blob,
    Other,
}

impl ColumnType {
    /// Classify a declared SQL type such as `CLOB`, `nclob(1M)` or `MEDIUMBLOB`
    pub fn from_decl_type(decl: Option<&str>) -> Self {
        let Some(decl) = decl else {
            return ColumnType::Other;
        };
        let decl = decl.to_ascii_uppercase();
        if decl.contains("NCLOB") {
            ColumnType::NClob
        } else if decl.contains("CLOB") {
            ColumnType::Clob
        } else if decl.contains("BLOB") {
            ColumnType::Blob
        } else {
            ColumnType::Other
        }
    }

    pub fn is_lob(self) -> bool {
        !matches!(self, ColumnType::Other)
    }
}

/// Returns true when `sql` is treated as an INSERT statement.
///
/// This is a prefix test on the left-trimmed text, not a parse: `INSERT OR
/// IGNORE`, `insert into` and `  Insert` all match, while a CTE ending in an
/// insert does not.
pub fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .as_bytes()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"INSERT"))
}
