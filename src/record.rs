//! Model instances

use crate::error::Error;
use crate::error::Result;
use crate::pattern::Pattern;
use crate::value::FromValue;
use crate::value::IntoValue;
use crate::value::Value;

/// A model instance: an ordered set of column/value pairs.
///
/// A record holds exactly the fields it was built from, whether those came
/// from a result row or from the caller. It is not checked against the
/// model's column list and keeps no link back to the row it was read from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Pairs row values with column names by position.
    pub(crate) fn from_row(columns: &[String], values: Vec<Value>) -> Self {
        let fields = columns.iter().cloned().zip(values).collect();
        Self { fields }
    }

    /// Sets a field, replacing the value of an existing one in place.
    pub fn insert<V: IntoValue>(&mut self, column: impl Into<String>, value: V) {
        let column = column.into();
        let value = value.into_value();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(field) => field.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let idx = self.fields.iter().position(|(c, _)| c == column)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn get_value(&self, column: &str) -> Option<&Value> {
        self.fields.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    /// Reads `column` as `T`.
    ///
    /// # Errors
    ///
    /// [`Error::ColumnNotFound`] when the record has no such field, or the
    /// conversion error from [`FromValue`].
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        let value = self.get_value(column).ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
        T::from_value(value.clone())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get_value(column).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the record into a pattern with the same entries, e.g. to
    /// re-insert it or to filter on it.
    pub fn into_pattern(self) -> Pattern {
        self.fields.into_iter().collect()
    }

    pub fn into_typed<T: FromRecord>(self) -> Result<T> {
        T::from_record(&self)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<K: Into<String>, V: IntoValue> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type IntoIter = std::vec::IntoIter<(String, Value)>;
    type Item = (String, Value);

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Typed construction from a [`Record`], generated by `#[derive(Table)]`.
pub trait FromRecord: Sized {
    fn from_record(record: &Record) -> Result<Self>;
}

impl FromRecord for Record {
    fn from_record(record: &Record) -> Result<Self> {
        Ok(record.clone())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        use serde_json::json;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            let value = match value {
                Value::Integer(i) => json!(i),
                Value::Real(r) => json!(r),
                Value::Text(t) => json!(t),
                Value::Blob(b) => json!(b),
                Value::Null => json!(null),
            };
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}
