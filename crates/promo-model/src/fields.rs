use serde::{Deserialize, Serialize};

/// Column/value pairs of one recovered data row, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value unless the column is already present.
    ///
    /// A header that repeats a column name keeps the first occurrence.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        if self.contains(&column) {
            return;
        }
        self.entries.push((column, value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `column`, or an empty string when the column is absent.
    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (column, value) in iter {
            map.insert(column, value);
        }
        map
    }
}
