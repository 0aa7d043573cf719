//! Defines the join nodes produced by resolving join paths.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    #[default]
    None,
    Inner,
    Left,
    Right,
    FullOuter,
}

impl JoinType {
    /// SQL keywords for the join, or `None` while the type is unset.
    pub fn keywords(&self) -> Option<&'static str> {
        match self {
            JoinType::None => None,
            JoinType::Inner => Some("INNER JOIN"),
            JoinType::Left => Some("LEFT JOIN"),
            JoinType::Right => Some("RIGHT JOIN"),
            JoinType::FullOuter => Some("FULL OUTER JOIN"),
        }
    }
}

/// A parsed `[RightTable:RightColumn:LeftColumn]` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    pub right_table: String,
    pub right_column: String,
    pub left_column: String,
    /// The segment text exactly as written. Joins are deduplicated on this,
    /// not on the parsed triple.
    pub segment: String,
}

/// A resolved join carrying its allocated alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableJoin {
    pub join_type: JoinType,
    /// Source table name or the alias of the previous join in the chain.
    pub left_table: String,
    pub left_column: String,
    pub right_table: String,
    pub right_column: String,
    pub alias: String,
    pub segment: String,
}

impl TableJoin {
    pub fn from_spec(
        spec: JoinSpec,
        left_table: impl Into<String>,
        alias: impl Into<String>,
        join_type: JoinType,
    ) -> Self {
        Self {
            join_type,
            left_table: left_table.into(),
            left_column: spec.left_column,
            right_table: spec.right_table,
            right_column: spec.right_column,
            alias: alias.into(),
            segment: spec.segment,
        }
    }
}
