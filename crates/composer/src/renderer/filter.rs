//! Compiles a [`FilterGroup`] tree into a parameterized WHERE fragment.

use crate::{
    ast::filter::{FilterGroup, FilterItem, FilterResult, LogicalOperator},
    dialect::Dialect,
    error::ComposeError,
};
use model::core::value::Value;
use std::collections::HashMap;
use tracing::trace;

/// Per-call compiler state. Parameter names are numbered across the whole
/// tree, depth first, so they never repeat within one result.
pub struct FilterCompiler<'a> {
    dialect: &'a dyn Dialect,
    param_name_prefix: &'a str,
    quote_fields: bool,
    next_param: usize,
    parameters: HashMap<String, Value>,
}

impl<'a> FilterCompiler<'a> {
    pub fn new(dialect: &'a dyn Dialect, param_name_prefix: &'a str, quote_fields: bool) -> Self {
        Self {
            dialect,
            param_name_prefix,
            quote_fields,
            next_param: 0,
            parameters: HashMap::new(),
        }
    }

    /// Compiles `root`. Fails when the root carries no items, no nested
    /// groups and no operator.
    pub fn compile(mut self, root: &FilterGroup) -> Result<FilterResult, ComposeError> {
        if root.is_empty() {
            return Err(ComposeError::InvalidArgument(
                "filter group must not be empty".to_string(),
            ));
        }

        let sql = self.render_group(root);
        trace!(sql = sql.as_str(), params = self.parameters.len(), "Compiled filter");

        Ok(FilterResult {
            sql,
            parameters: self.parameters,
        })
    }

    fn render_group(&mut self, group: &FilterGroup) -> String {
        if group.nested_groups.is_empty() {
            self.render_items(group)
        } else {
            self.render_nested(group)
        }
    }

    fn render_nested(&mut self, group: &FilterGroup) -> String {
        let Some(op) = group.logical.keyword() else {
            return String::new();
        };

        let children: Vec<&FilterGroup> = group
            .nested_groups
            .iter()
            .filter(|g| g.logical != LogicalOperator::None)
            .collect();

        let fragments: Vec<String> = children
            .into_iter()
            .map(|child| self.render_group(child))
            .filter(|sql| !sql.is_empty())
            .collect();

        let fragments = if fragments.len() > 1 {
            fragments.into_iter().map(|sql| format!("({sql})")).collect()
        } else {
            fragments
        };

        fragments.join(format!(" {op} ").as_str()).trim_end().to_string()
    }

    fn render_items(&mut self, group: &FilterGroup) -> String {
        let Some(op) = group.logical.keyword() else {
            return String::new();
        };

        let alias = group.table_alias.as_deref();
        let conditions: Vec<String> = group
            .items
            .iter()
            .filter_map(|item| {
                let symbol = item.comparison.symbol()?;
                Some(self.render_item(item, symbol, alias))
            })
            .collect();

        conditions.join(format!(" {op} ").as_str()).trim_end().to_string()
    }

    fn render_item(&mut self, item: &FilterItem, symbol: &str, alias: Option<&str>) -> String {
        let name = format!("{}{}", self.param_name_prefix, self.next_param);
        self.next_param += 1;
        self.parameters.insert(name.clone(), item.value.clone());

        let field = match alias {
            Some(alias) => format!("{}.{}", self.ident(alias), self.ident(&item.field_name)),
            None => self.ident(&item.field_name),
        };
        format!("{field} {symbol} {}{name}", self.dialect.param_prefix())
    }

    fn ident(&self, ident: &str) -> String {
        if self.quote_fields {
            self.dialect.quote_identifier(ident)
        } else {
            ident.to_string()
        }
    }
}
