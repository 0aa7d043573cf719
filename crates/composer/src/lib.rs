//! Composes the SELECT list, joins and WHERE clause of a query from
//! annotated projection types and filter trees.
//!
//! Projection fields may carry a join path such as
//! `[UserAccount:Id:AuthorId].DisplayName`, which is resolved into a
//! deduplicated set of aliased joins plus a qualified column.

use crate::{
    ast::{
        column::ComplexColumnData,
        filter::{FilterGroup, FilterResult},
        join::TableJoin,
    },
    composer::QueryComposer,
    error::ComposeError,
    projection::Projection,
};
use lazy_static::lazy_static;
use std::sync::Arc;

pub mod ast;
pub mod builder;
pub mod composer;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod projection;
pub mod renderer;
pub mod settings;

lazy_static! {
    static ref DEFAULT_COMPOSER: QueryComposer = QueryComposer::default();
}

/// Columns and joins for selecting `P` from `source_table`, memoized for the
/// lifetime of the process.
pub fn build_complex_columns<P: Projection>(source_table: &str) -> Option<Arc<ComplexColumnData>> {
    DEFAULT_COMPOSER.complex_columns::<P>(source_table)
}

/// Compiles a filter tree with the default settings.
pub fn build_filter(root: Option<&FilterGroup>) -> Result<FilterResult, ComposeError> {
    let root = root.ok_or_else(|| {
        ComposeError::InvalidArgument("filter group must not be null".to_string())
    })?;
    DEFAULT_COMPOSER.filter(root)
}

/// Renders `join` for the dialect named `dialect_name`.
pub fn render_join(join: &TableJoin, dialect_name: &str) -> Result<String, ComposeError> {
    dialect::resolve(dialect_name)?.render_join(join)
}
