use indexmap::IndexMap;
use pretty_assertions::assert_eq;

use crate::error::Error;
use crate::row::{FromRow, Row};
use crate::value::Value;

fn sample() -> Row {
    [
        ("id", Value::SignedInt(1)),
        ("name", Value::from("alice")),
        ("email", Value::Null),
    ]
    .into_iter()
    .collect()
}

#[test]
fn keeps_column_order() {
    let row = sample();
    assert_eq!(row.labels().collect::<Vec<_>>(), vec!["id", "name", "email"]);
    assert_eq!(row.get_index(1), Some(("name", &Value::from("alice"))));
    assert_eq!(row.get_index(3), None);
}

#[test]
fn reinsert_keeps_position_and_last_value() {
    let mut row = sample();
    let old = row.insert("id", Value::SignedInt(9));
    assert_eq!(old, Some(Value::SignedInt(1)));
    assert_eq!(row.labels().collect::<Vec<_>>(), vec!["id", "name", "email"]);
    assert_eq!(row.get("id"), Some(&Value::SignedInt(9)));
}

#[test]
fn labels_are_case_sensitive() {
    let row = sample();
    assert!(row.contains("name"));
    assert!(!row.contains("NAME"));
}

#[test]
fn typed_access() {
    let mut row = sample();
    assert_eq!(row.try_get::<i64>("id").unwrap(), 1);
    assert_eq!(row.try_get::<Option<String>>("email").unwrap(), None);
    assert!(matches!(
        row.try_get::<i64>("missing"),
        Err(Error::MissingColumn(ref label)) if label == "missing"
    ));

    assert_eq!(row.take::<String>("name").unwrap(), "alice");
    assert!(!row.contains("name"));
    assert_eq!(row.len(), 2);
}

#[test]
fn tuples_map_by_position() {
    let (id, name, email) = <(i64, String, Option<String>)>::from_row(sample()).unwrap();
    assert_eq!(id, 1);
    assert_eq!(name, "alice");
    assert_eq!(email, None);

    let (id,) = <(u32,)>::from_row(sample()).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn tuple_wider_than_row_is_rejected() {
    let result = <(i64, String, Option<String>, i64)>::from_row(sample());
    assert!(matches!(result, Err(Error::BadUsageError(_))));
}

#[test]
fn identity_conversions() {
    assert_eq!(Row::from_row(sample()).unwrap(), sample());
    let map = IndexMap::<String, Value>::from_row(sample()).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(Row::from(map), sample());
}

#[test]
fn iterates_pairs() {
    let row = sample();
    let pairs: Vec<(String, Value)> = row.clone().into_iter().collect();
    assert_eq!(pairs[0], ("id".to_string(), Value::SignedInt(1)));
    assert_eq!((&row).into_iter().count(), 3);
    assert_eq!(row.values().filter(|v| v.is_null()).count(), 1);
    assert!(!row.is_empty());
    assert!(Row::new().is_empty());
}
