use crate::ast::join::TableJoin;
use std::fmt;

/// One entry of a SELECT list: `{table_alias}.{column_name} [AS {output_alias}]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection {
    /// Either the source table name or the alias of a join.
    pub table_alias: String,
    pub column_name: String,
    pub output_alias: Option<String>,
}

impl ColumnProjection {
    /// A source-table column projected under its own name.
    pub fn plain(table: &str, column: &str) -> Self {
        Self {
            table_alias: table.to_string(),
            column_name: column.to_string(),
            output_alias: None,
        }
    }
}

impl fmt::Display for ColumnProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table_alias, self.column_name)?;
        if let Some(alias) = &self.output_alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// Columns and joins resolved for one (source table, projection) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexColumnData {
    pub columns: Vec<ColumnProjection>,
    pub joins: Vec<TableJoin>,
}
