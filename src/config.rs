use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FilterError;

/// Default upper bound on expression length, in bytes.
pub const DEFAULT_MAX_EXPRESSION_LEN: usize = 4096;

/// Default upper bound on nesting of parentheses, `NOT` chains and calls.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Limits applied by [`crate::FilterParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    pub max_expression_len: usize,
    pub max_depth: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            max_expression_len: DEFAULT_MAX_EXPRESSION_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A Bases view config as handed over by the front-matter loader.
///
/// Only `filter` is read here; every other key is kept as-is.
///
/// ```text
/// filter: taggedWith(file, "project") AND status != "done"
/// view: table
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub filter: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FilterConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        FilterConfig {
            filter: Some(filter.into()),
            extra: Map::new(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, FilterError> {
        serde_yaml::from_str(yaml).map_err(|e| FilterError::Config(e.to_string()))
    }

    pub fn from_json(value: Value) -> Result<Self, FilterError> {
        serde_json::from_value(value).map_err(|e| FilterError::Config(e.to_string()))
    }
}
