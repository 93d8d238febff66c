use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};

use crate::error::{Error, Result};
use crate::value::{FromValue, Value};

/// A decoded row: column labels mapped to values in column order
///
/// Labels keep the case the driver returned. Inserting a label twice keeps its
/// first position and the last value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a column, returning the value it replaced
    pub fn insert(&mut self, label: impl Into<String>, value: Value) -> Option<Value> {
        self.columns.insert(label.into(), value)
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.columns.get(label)
    }

    /// Value at a 0-based position
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.columns
            .get_index(index)
            .map(|(label, value)| (label.as_str(), value))
    }

    /// Remove a column and convert it
    pub fn take<T: FromValue>(&mut self, label: &str) -> Result<T> {
        let value = self
            .columns
            .swap_remove(label)
            .ok_or_else(|| Error::MissingColumn(label.to_string()))?;
        T::from_value(value)
    }

    /// Clone a column and convert it
    pub fn try_get<T: FromValue>(&self, label: &str) -> Result<T> {
        let value = self
            .get(label)
            .ok_or_else(|| Error::MissingColumn(label.to_string()))?;
        T::from_value(value.clone())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.columns.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.values()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.columns.iter()
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.columns
    }
}

impl From<IndexMap<String, Value>> for Row {
    fn from(columns: IndexMap<String, Value>) -> Self {
        Self { columns }
    }
}

impl<L: Into<String>> FromIterator<(L, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (L, Value)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (label, value) in iter {
            row.insert(label, value);
        }
        row
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Conversion from a [`Row`] into a caller type
///
/// Implemented for `Row` itself, for tuples (by column position) and, with
/// the `derive` feature, for structs via `#[derive(FromRow)]` (by label).
pub trait FromRow: Sized {
    fn from_row(row: Row) -> Result<Self>;
}

impl FromRow for Row {
    fn from_row(row: Row) -> Result<Self> {
        Ok(row)
    }
}

impl FromRow for IndexMap<String, Value> {
    fn from_row(row: Row) -> Result<Self> {
        Ok(row.into_map())
    }
}

macro_rules! impl_from_row_tuple {
    ($n:expr; $($T:ident),+) => {
        impl<$($T: FromValue),+> FromRow for ($($T,)+) {
            fn from_row(row: Row) -> Result<Self> {
                if row.len() < $n {
                    return Err(Error::BadUsageError(format!(
                        "Row has {} columns, tuple needs {}",
                        row.len(),
                        $n
                    )));
                }
                let mut values = row.into_iter().map(|(_, value)| value);
                Ok(($(
                    $T::from_value(values.next().unwrap_or_default())?,
                )+))
            }
        }
    };
}

impl_from_row_tuple!(1; A);
impl_from_row_tuple!(2; A, B);
impl_from_row_tuple!(3; A, B, C);
impl_from_row_tuple!(4; A, B, C, D);
impl_from_row_tuple!(5; A, B, C, D, E);
impl_from_row_tuple!(6; A, B, C, D, E, F);
impl_from_row_tuple!(7; A, B, C, D, E, F, G);
impl_from_row_tuple!(8; A, B, C, D, E, F, G, H);
impl_from_row_tuple!(9; A, B, C, D, E, F, G, H, I);
impl_from_row_tuple!(10; A, B, C, D, E, F, G, H, I, J);
impl_from_row_tuple!(11; A, B, C, D, E, F, G, H, I, J, K);
impl_from_row_tuple!(12; A, B, C, D, E, F, G, H, I, J, K, L);
