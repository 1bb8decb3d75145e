use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use bytes::Bytes;

use crate::MySqlColumn;

/// A single row of a result set.
///
/// Values are the raw byte strings that arrived on the wire; `None` marks
/// a SQL `NULL`. The protocol performs no type coercion; interpretation
/// is up to the caller, guided by [`MySqlColumn::type_id`].
pub struct MySqlRow {
    pub(crate) values: Vec<Option<Bytes>>,
    pub(crate) columns: Arc<[MySqlColumn]>,
    pub(crate) column_names: Arc<HashMap<String, usize>>,
}

impl MySqlRow {
    /// The column set this row belongs to.
    pub fn columns(&self) -> &[MySqlColumn] {
        &self.columns
    }

    /// Number of values in this row; always equal to the number of
    /// columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index`; `None` for SQL `NULL`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.values[index].as_deref()
    }

    /// Look up a value by the column's original (unaliased) name.
    ///
    /// Returns `None` when no such column exists or the value is `NULL`.
    pub fn get_by_name(&self, name: &str) -> Option<&[u8]> {
        self.column_index(name).and_then(|index| self.get(index))
    }

    /// The ordinal of the column with the given original name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.get(name).copied()
    }

    /// Iterate the values in column order.
    pub fn values(&self) -> impl Iterator<Item = Option<&[u8]>> {
        self.values.iter().map(|value| value.as_deref())
    }
}

impl Debug for MySqlRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();

        for (column, value) in self.columns.iter().zip(&self.values) {
            map.entry(&column.org_name(), &value.as_deref().map(String::from_utf8_lossy));
        }

        map.finish()
    }
}
