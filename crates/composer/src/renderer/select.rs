//! Assembles a SELECT statement from resolved columns, joins and a filter.

use crate::{
    ast::{
        column::{ColumnProjection, ComplexColumnData},
        filter::FilterResult,
        join::TableJoin,
    },
    error::ComposeError,
    renderer::{Render, Renderer},
};

#[derive(Debug, Clone)]
pub struct SelectStatement<'a> {
    pub source_table: &'a str,
    pub data: &'a ComplexColumnData,
    pub filter: Option<FilterResult>,
}

impl Render for SelectStatement<'_> {
    fn render(&self, r: &mut Renderer) -> Result<(), ComposeError> {
        if self.data.columns.is_empty() {
            return Err(ComposeError::InvalidState(format!(
                "no columns resolved for {}",
                self.source_table
            )));
        }

        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        for (i, col) in self.data.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r)?;
        }

        // 2. FROM
        r.sql.push_str(" FROM ");
        r.push_ident(self.source_table);
        if let Some(hint) = r.dialect.lock_hint() {
            r.sql.push(' ');
            r.sql.push_str(hint);
        }

        // 3. JOIN
        for join in &self.data.joins {
            r.sql.push(' ');
            join.render(r)?;
        }

        // 4. WHERE
        if let Some(filter) = &self.filter
            && !filter.sql.is_empty()
        {
            r.sql.push_str(" WHERE ");
            r.sql.push_str(&filter.sql);
            r.params.extend(filter.parameters.clone());
        }
        Ok(())
    }
}

impl Render for ColumnProjection {
    fn render(&self, r: &mut Renderer) -> Result<(), ComposeError> {
        r.push_ident(&self.table_alias);
        r.sql.push('.');
        r.push_ident(&self.column_name);
        if let Some(alias) = &self.output_alias {
            r.sql.push_str(" AS ");
            r.push_ident(alias);
        }
        Ok(())
    }
}

impl Render for TableJoin {
    fn render(&self, r: &mut Renderer) -> Result<(), ComposeError> {
        let sql = r.dialect.render_join(self)?;
        r.sql.push_str(&sql);
        Ok(())
    }
}
