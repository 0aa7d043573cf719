//! Entry point tying the builder, cache, dialect and renderers together.

use crate::{
    ast::{
        column::ComplexColumnData,
        filter::{FilterGroup, FilterResult},
        join::TableJoin,
    },
    builder::{
        cache::{BuildCache, CacheKey},
        columns::build_complex_columns,
    },
    dialect::{self, Dialect},
    error::ComposeError,
    projection::Projection,
    renderer::{Render, Renderer, filter::FilterCompiler, select::SelectStatement},
    settings::ComposerSettings,
};
use model::core::value::Value;
use std::{any::TypeId, collections::HashMap, sync::Arc};
use tracing::debug;

pub struct QueryComposer {
    settings: ComposerSettings,
    dialect: &'static dyn Dialect,
    cache: BuildCache,
}

impl Default for QueryComposer {
    fn default() -> Self {
        Self {
            settings: ComposerSettings::default(),
            dialect: dialect::sql_server(),
            cache: BuildCache::new(),
        }
    }
}

impl QueryComposer {
    pub fn new(settings: ComposerSettings) -> Result<Self, ComposeError> {
        settings.validate()?;
        let dialect = dialect::resolve(&settings.dialect)?;
        Ok(Self {
            settings,
            dialect,
            cache: BuildCache::new(),
        })
    }

    /// Resolves the columns and joins needed to select `P` from
    /// `source_table`. Results are cached per (table, projection) pair and
    /// shared between callers.
    pub fn complex_columns<P: Projection>(
        &self,
        source_table: &str,
    ) -> Option<Arc<ComplexColumnData>> {
        let key = CacheKey::new(source_table, TypeId::of::<P>());
        if let Some(hit) = self.cache.get(&key) {
            debug!(source_table, projection = P::shape().name, "Column cache hit");
            return Some(hit);
        }

        debug!(source_table, projection = P::shape().name, "Column cache miss");
        let data = Arc::new(build_complex_columns(
            source_table,
            P::shape(),
            self.settings.default_join_type,
        )?);
        self.cache.insert(key, Arc::clone(&data));
        Some(data)
    }

    pub fn filter(&self, root: &FilterGroup) -> Result<FilterResult, ComposeError> {
        FilterCompiler::new(
            self.dialect,
            &self.settings.param_name_prefix,
            self.settings.quote_filter_fields,
        )
        .compile(root)
    }

    pub fn render_join(&self, join: &TableJoin) -> Result<String, ComposeError> {
        self.dialect.render_join(join)
    }

    /// Renders `SELECT ... FROM source_table ... [WHERE ...]` for `P`.
    ///
    /// Returns `Ok(None)` when no projection can be built (blank table, a
    /// projection without fields, or every field dropped for a malformed
    /// join path).
    pub fn select<P: Projection>(
        &self,
        source_table: &str,
        filter: Option<&FilterGroup>,
    ) -> Result<Option<(String, HashMap<String, Value>)>, ComposeError> {
        let Some(data) = self
            .complex_columns::<P>(source_table)
            .filter(|data| !data.columns.is_empty())
        else {
            return Ok(None);
        };
        let filter = filter.map(|root| self.filter(root)).transpose()?;

        let stmt = SelectStatement {
            source_table,
            data: &data,
            filter,
        };
        let mut renderer = Renderer::new(self.dialect);
        stmt.render(&mut renderer)?;
        Ok(Some(renderer.finish()))
    }

    pub fn cached_shapes(&self) -> usize {
        self.cache.len()
    }
}
