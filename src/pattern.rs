//! Column to value mappings used for filters and set lists

use crate::value::IntoValue;
use crate::value::Value;

/// An ordered mapping from column name to value.
///
/// As a filter every entry is an equality test and entries are combined
/// with `AND`; an empty pattern matches every row. As a set list every
/// entry assigns a column.
///
/// ```ignore
/// let pattern = Pattern::new().with("name", "Alice").with("age", 30);
/// let alice = users.one(&pattern).await?;
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pattern {
    entries: Vec<(String, Value)>,
}

impl Pattern {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder form of [`Pattern::insert`].
    pub fn with<V: IntoValue>(mut self, column: impl Into<String>, value: V) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets `column` to `value`. An existing entry keeps its position.
    pub fn insert<V: IntoValue>(&mut self, column: impl Into<String>, value: V) {
        let column = column.into();
        let value = value.into_value();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(c, _)| c == column)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: IntoValue> FromIterator<(K, V)> for Pattern {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pattern = Pattern::new();
        for (column, value) in iter {
            pattern.insert(column, value);
        }
        pattern
    }
}

impl IntoIterator for Pattern {
    type IntoIter = std::vec::IntoIter<(String, Value)>;
    type Item = (String, Value);

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Conversion into a [`Pattern`], generated by `#[derive(Table)]`.
pub trait IntoPattern {
    fn into_pattern(self) -> Pattern;
}

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Pattern {
        self
    }
}

/// Builds a [`Pattern`] from `column => value` pairs.
///
/// ```ignore
/// let filter = pattern! { "name" => "Alice", "age" => 30 };
/// ```
#[macro_export]
macro_rules! pattern {
    () => {
        $crate::Pattern::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {
        $crate::Pattern::new()$(.with($column, $value))+
    };
}
