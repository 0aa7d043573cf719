//! Static descriptions of projection types.
//!
//! A projection is a model type whose fields map onto columns of a source
//! table, optionally reached through a chain of joins. The field list is
//! declared once per type, normally with [`projection!`](crate::projection!).

/// One projected field and its optional join path annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionField {
    pub name: &'static str,
    pub join_path: Option<&'static str>,
}

impl ProjectionField {
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            join_path: None,
        }
    }

    pub const fn joined(name: &'static str, join_path: &'static str) -> Self {
        Self {
            name,
            join_path: Some(join_path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionShape {
    pub name: &'static str,
    pub fields: &'static [ProjectionField],
}

/// Implemented by types that can be selected through the composer.
pub trait Projection: 'static {
    fn shape() -> &'static ProjectionShape;
}
