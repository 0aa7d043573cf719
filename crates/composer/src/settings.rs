//! Runtime settings for a [`QueryComposer`](crate::composer::QueryComposer).

use crate::{ast::join::JoinType, error::ComposeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerSettings {
    /// Name of the target dialect, e.g. `sqlserver` or `postgres`.
    pub dialect: String,

    /// Join type stamped on every join resolved from a join path.
    pub default_join_type: JoinType,

    /// Stem of generated filter parameter names (`FilterValue0`, ...).
    pub param_name_prefix: String,

    /// Pass filter field names and aliases through identifier quoting.
    pub quote_filter_fields: bool,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            dialect: "sqlserver".to_string(),
            default_join_type: JoinType::Left,
            param_name_prefix: "FilterValue".to_string(),
            quote_filter_fields: false,
        }
    }
}

impl ComposerSettings {
    /// Parses settings from a JSON document. Missing keys fall back to the
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self, ComposeError> {
        let settings: ComposerSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.default_join_type == JoinType::None {
            return Err(ComposeError::Config(
                "default_join_type must not be 'none'".to_string(),
            ));
        }
        if self.param_name_prefix.trim().is_empty() {
            return Err(ComposeError::Config(
                "param_name_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
