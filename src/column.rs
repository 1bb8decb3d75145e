use crate::protocol::{ColumnDefinition, ColumnFlags};
use crate::{MySqlTypeId, Result};

/// Metadata for one column of a result set.
///
/// One column set exists per result set and is shared, read-only, by every
/// [`MySqlRow`][crate::MySqlRow] produced for it.
#[derive(Debug)]
pub struct MySqlColumn {
    ordinal: usize,
    catalog: String,
    schema: String,
    table: String,
    org_table: String,
    name: String,
    org_name: String,
    charset: u16,
    max_size: u32,
    type_id: MySqlTypeId,
    flags: ColumnFlags,
    decimals: u8,
}

impl MySqlColumn {
    pub(crate) fn new(ordinal: usize, def: ColumnDefinition) -> Self {
        Self {
            ordinal,
            catalog: def.catalog,
            schema: def.schema,
            table: def.table,
            org_table: def.org_table,
            name: def.name,
            org_name: def.org_name,
            charset: def.charset,
            max_size: def.max_size,
            type_id: MySqlTypeId(def.type_id),
            flags: def.flags,
            decimals: def.decimals,
        }
    }

    /// The position of this column in its result set, starting at 0.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The column name, after any `AS` aliasing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column name as declared in the table.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// The table name, after any aliasing.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The physical table name.
    pub fn org_table(&self) -> &str {
        &self.org_table
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    /// The character-set id of this column.
    pub fn charset(&self) -> u16 {
        self.charset
    }

    /// The declared maximum display length.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn type_id(&self) -> MySqlTypeId {
        self.type_id
    }

    pub fn flags(&self) -> ColumnFlags {
        self.flags
    }

    /// Number of decimals, for numeric columns.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The symbolic name of the declared type, e.g. `var_string`.
    pub fn type_name(&self) -> Result<&'static str> {
        self.type_id.name()
    }
}
