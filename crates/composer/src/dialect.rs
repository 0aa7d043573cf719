//! Defines the `Dialect` trait for database-specific SQL syntax.

use crate::{ast::join::TableJoin, error::ComposeError};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - SQL Server uses brackets: `[my_column]`
    /// - PostgreSQL uses double quotes: `"my_column"`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Token placed in front of a named bound parameter.
    fn param_prefix(&self) -> &'static str;

    /// Table hint rendered after a table reference, if the dialect takes one.
    fn lock_hint(&self) -> Option<&'static str>;

    /// Returns the name of the dialect (e.g., "SQL Server", "PostgreSQL").
    fn name(&self) -> String;

    /// Renders a complete join clause:
    /// `{JOIN} {right} AS {alias} [hint] ON ({alias}.{right_col} = {left}.{left_col})`.
    fn render_join(&self, join: &TableJoin) -> Result<String, ComposeError> {
        let keywords = join.join_type.keywords().ok_or_else(|| {
            ComposeError::InvalidState(format!(
                "join type must be set for join {}",
                join.segment
            ))
        })?;

        let alias = self.quote_identifier(&join.alias);
        let mut sql = format!(
            "{keywords} {} AS {alias}",
            self.quote_identifier(&join.right_table)
        );
        if let Some(hint) = self.lock_hint() {
            sql.push(' ');
            sql.push_str(hint);
        }
        sql.push_str(&format!(
            " ON ({alias}.{} = {}.{})",
            self.quote_identifier(&join.right_column),
            self.quote_identifier(&join.left_table),
            self.quote_identifier(&join.left_column)
        ));
        Ok(sql)
    }
}

#[derive(Debug, Clone)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{}]", ident.replace(']', "]]"))
    }

    fn param_prefix(&self) -> &'static str {
        "@"
    }

    fn lock_hint(&self) -> Option<&'static str> {
        Some("WITH (NOLOCK)")
    }

    fn name(&self) -> String {
        "SQL Server".into()
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn param_prefix(&self) -> &'static str {
        // Named parameters, as accepted by the host's data-access layer
        "@"
    }

    fn lock_hint(&self) -> Option<&'static str> {
        None
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

static SQL_SERVER: SqlServer = SqlServer;
static POSTGRES: Postgres = Postgres;

pub fn sql_server() -> &'static dyn Dialect {
    &SQL_SERVER
}

pub fn postgres() -> &'static dyn Dialect {
    &POSTGRES
}

/// Looks a dialect up by name, case-insensitively.
pub fn resolve(name: &str) -> Result<&'static dyn Dialect, ComposeError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sqlserver" | "mssql" => Ok(sql_server()),
        "postgres" | "postgresql" => Ok(postgres()),
        _ => Err(ComposeError::UnsupportedDialect(name.to_string())),
    }
}
