use crate::constant::{ColumnType, is_insert};

#[test]
fn classify_decl_types() {
    assert_eq!(ColumnType::from_decl_type(Some("CLOB")), ColumnType::Clob);
    assert_eq!(ColumnType::from_decl_type(Some("clob")), ColumnType::Clob);
    assert_eq!(ColumnType::from_decl_type(Some("NCLOB")), ColumnType::NClob);
    assert_eq!(ColumnType::from_decl_type(Some("BLOB")), ColumnType::Blob);
    assert_eq!(ColumnType::from_decl_type(Some("MEDIUMBLOB")), ColumnType::Blob);
    assert_eq!(ColumnType::from_decl_type(Some("TEXT")), ColumnType::Other);
    assert_eq!(ColumnType::from_decl_type(Some("INTEGER")), ColumnType::Other);
    assert_eq!(ColumnType::from_decl_type(None), ColumnType::Other);
}

#[test]
fn lob_flag() {
    assert!(ColumnType::Clob.is_lob());
    assert!(ColumnType::NClob.is_lob());
    assert!(ColumnType::Blob.is_lob());
    assert!(!ColumnType::Other.is_lob());
}

#[test]
fn insert_prefix_detection() {
    assert!(is_insert("INSERT INTO t(name) VALUES (?)"));
    assert!(is_insert("insert into t values (1)"));
    assert!(is_insert("  \n\tInsert Or Ignore INTO t VALUES (1)"));
    assert!(is_insert("INSERT"));

    assert!(!is_insert("UPDATE t SET name = ?"));
    assert!(!is_insert("SELECT 'INSERT'"));
    assert!(!is_insert("WITH x AS (SELECT 1) INSERT INTO t SELECT * FROM x"));
    assert!(!is_insert("INSER"));
    assert!(!is_insert(""));
}

#[test]
fn insert_prefix_does_not_split_multibyte_chars() {
    assert!(!is_insert("ÄÄÄ INSERT"));
    assert!(!is_insert("插入"));
}
