//! Resolves projection fields into SELECT columns and the joins they need.

use crate::{
    ast::{
        column::{ColumnProjection, ComplexColumnData},
        join::{JoinType, TableJoin},
    },
    builder::{alias::allocate_alias, path},
    projection::{ProjectionField, ProjectionShape},
};
use tracing::{debug, warn};

/// Joins discovered while building one projection.
///
/// A join segment seen twice, by exact text, is resolved once and its alias
/// reused by every later path that mentions it.
#[derive(Debug)]
pub struct JoinGraph<'a> {
    source_table: &'a str,
    join_type: JoinType,
    joins: Vec<TableJoin>,
}

impl<'a> JoinGraph<'a> {
    pub fn new(source_table: &'a str, join_type: JoinType) -> Self {
        Self {
            source_table,
            join_type,
            joins: Vec::new(),
        }
    }

    pub fn into_joins(self) -> Vec<TableJoin> {
        self.joins
    }

    /// Resolves `join_path` for the field `field_name`.
    ///
    /// Returns `None` for a malformed path. Joins resolved before the failing
    /// segment stay in the graph and are reused by later fields.
    pub fn resolve(&mut self, field_name: &str, join_path: &str) -> Option<ColumnProjection> {
        let segments = path::segments(join_path);
        let (column, hops) = segments.split_last()?;

        if column.trim().is_empty() || path::is_join_segment(column) {
            return None;
        }
        if let Some(first) = hops.first()
            && !path::is_join_segment(first)
        {
            return None;
        }

        let mut current = self.source_table.to_string();
        for segment in hops {
            current = self.resolve_segment(segment, &current)?;
        }

        Some(ColumnProjection {
            table_alias: current,
            column_name: column.to_string(),
            output_alias: Some(field_name.to_string()),
        })
    }

    /// Returns the alias for `segment`, joining it onto `left_table` when it
    /// has not been seen yet.
    fn resolve_segment(&mut self, segment: &str, left_table: &str) -> Option<String> {
        if let Some(existing) = self.joins.iter().find(|j| j.segment == segment) {
            return Some(existing.alias.clone());
        }

        let spec = path::parse_join_segment(segment)?;
        let alias = allocate_alias(&spec.right_table, &self.joins)?;
        debug!(
            segment,
            left_table,
            alias = alias.as_str(),
            "Allocated join alias"
        );

        self.joins.push(TableJoin::from_spec(
            spec,
            left_table,
            alias.as_str(),
            self.join_type,
        ));
        Some(alias)
    }
}

/// Resolves every field of `shape` against `source_table`.
///
/// Returns `None` for a blank source table or a shape without fields. Fields
/// whose join path is malformed are left out of the result.
pub fn build_complex_columns(
    source_table: &str,
    shape: &ProjectionShape,
    join_type: JoinType,
) -> Option<ComplexColumnData> {
    if source_table.trim().is_empty() || shape.fields.is_empty() {
        return None;
    }

    let mut graph = JoinGraph::new(source_table, join_type);
    let mut columns = Vec::with_capacity(shape.fields.len());

    for field in shape.fields {
        match resolve_field(&mut graph, source_table, field) {
            Some(column) => columns.push(column),
            None => warn!(
                projection = shape.name,
                field = field.name,
                path = field.join_path.unwrap_or_default(),
                "Dropping field with malformed join path"
            ),
        }
    }

    Some(ComplexColumnData {
        columns,
        joins: graph.into_joins(),
    })
}

fn resolve_field(
    graph: &mut JoinGraph<'_>,
    source_table: &str,
    field: &ProjectionField,
) -> Option<ColumnProjection> {
    match field.join_path {
        Some(join_path) => graph.resolve(field.name, join_path),
        None => Some(ColumnProjection::plain(source_table, field.name)),
    }
}
