//! Defines the filter tree compiled into a WHERE clause.

use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    None,
    And,
    Or,
}

impl LogicalOperator {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            LogicalOperator::None => None,
            LogicalOperator::And => Some("AND"),
            LogicalOperator::Or => Some("OR"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonType {
    #[default]
    None,
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonType {
    /// Dialect independent operator text. `None` marks an inert item.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            ComparisonType::None => None,
            ComparisonType::Equal => Some("="),
            ComparisonType::NotEqual => Some("!="),
            ComparisonType::Less => Some("<"),
            ComparisonType::LessOrEqual => Some("<="),
            ComparisonType::Greater => Some(">"),
            ComparisonType::GreaterOrEqual => Some(">="),
        }
    }
}

/// A leaf comparison: `{field_name} {op} {parameter}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterItem {
    pub field_name: String,
    pub comparison: ComparisonType,
    pub value: Value,
}

impl FilterItem {
    pub fn new(field: &str, comparison: ComparisonType, value: impl Into<Value>) -> Self {
        Self {
            field_name: field.to_string(),
            comparison,
            value: value.into(),
        }
    }

    pub fn equal(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, ComparisonType::Equal, value)
    }

    pub fn not_equal(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, ComparisonType::NotEqual, value)
    }

    pub fn less(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, ComparisonType::Less, value)
    }

    pub fn less_or_equal(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, ComparisonType::LessOrEqual, value)
    }

    pub fn greater(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, ComparisonType::Greater, value)
    }

    pub fn greater_or_equal(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, ComparisonType::GreaterOrEqual, value)
    }
}

/// A node of the filter tree.
///
/// A group is meant to hold either `items` or `nested_groups`. When both
/// are populated only the nested groups are rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterGroup {
    pub logical: LogicalOperator,
    pub items: Vec<FilterItem>,
    pub nested_groups: Vec<FilterGroup>,
    /// Qualifier prepended to every item's field name.
    pub table_alias: Option<String>,
}

impl FilterGroup {
    /// A leaf group joining `items` with AND.
    pub fn and(items: Vec<FilterItem>) -> Self {
        Self {
            logical: LogicalOperator::And,
            items,
            ..Default::default()
        }
    }

    /// A leaf group joining `items` with OR.
    pub fn or(items: Vec<FilterItem>) -> Self {
        Self {
            logical: LogicalOperator::Or,
            items,
            ..Default::default()
        }
    }

    /// A composite group joining `groups` with `logical`.
    pub fn nested(logical: LogicalOperator, groups: Vec<FilterGroup>) -> Self {
        Self {
            logical,
            nested_groups: groups,
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.table_alias = Some(alias.to_string());
        self
    }

    /// No items, no nested groups and no operator.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.nested_groups.is_empty()
            && self.logical == LogicalOperator::None
    }
}

/// A compiled WHERE fragment and the values bound to its parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterResult {
    pub sql: String,
    pub parameters: HashMap<String, Value>,
}
