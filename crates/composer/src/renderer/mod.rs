//! Defines the core rendering trait and context for converting composed
//! structures to SQL.

use crate::{dialect::Dialect, error::ComposeError};
use model::core::value::Value;
use std::collections::HashMap;

pub mod filter;
pub mod select;

/// A trait for any node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> Result<(), ComposeError>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the named parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: HashMap<String, Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: HashMap::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, HashMap<String, Value>) {
        (self.sql, self.params)
    }

    pub fn push_ident(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }
}
