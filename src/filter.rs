//! Entry point tying the lexer, parser and validator together.
//!
//! Callers get a [`FilterResult`] back instead of a stage-specific error, so
//! a view can show why a filter was rejected without matching on the error
//! taxonomy. Use [`FilterParser::try_parse`] to keep the typed error.
//!
//! ```
//! use bases_filter::parse;
//!
//! let result = parse(r#"taggedWith(file, "project") AND priority > 2"#);
//! assert!(result.success);
//!
//! let result = parse("taggedWith(file)");
//! assert!(!result.success);
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    ast::Node,
    config::{FilterConfig, FilterOptions},
    error::FilterError,
    lexer::tokenize,
    parser::Parser,
    validator::validate,
};

/// Outcome of parsing one filter expression.
///
/// A successful result with no `ast` means "no filter": every note matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    pub success: bool,
    /// Always serialized: `null` both on failure and for a config without
    /// a filter, so readers can tell them apart only by `success`.
    pub ast: Option<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub expression: String,
}

impl FilterResult {
    pub fn ok(ast: Node, expression: impl Into<String>) -> Self {
        FilterResult {
            success: true,
            ast: Some(ast),
            error: None,
            expression: expression.into(),
        }
    }

    pub fn match_all() -> Self {
        FilterResult {
            success: true,
            ast: None,
            error: None,
            expression: String::new(),
        }
    }

    pub fn failure(error: &FilterError, expression: impl Into<String>) -> Self {
        FilterResult {
            success: false,
            ast: None,
            error: Some(error.to_string()),
            expression: expression.into(),
        }
    }
}

/// Runs expressions through tokenize, parse and validate.
///
/// Holds only its limits; every call builds its own lexer and parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterParser {
    options: FilterOptions,
}

impl FilterParser {
    pub fn new(options: FilterOptions) -> Self {
        FilterParser { options }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn try_parse(&self, expression: &str) -> Result<Node, FilterError> {
        if expression.trim().is_empty() {
            return Err(FilterError::Empty);
        }
        if expression.len() > self.options.max_expression_len {
            return Err(FilterError::TooLong {
                len: expression.len(),
                max: self.options.max_expression_len,
            });
        }

        let tokens = tokenize(expression)?;
        trace!(count = tokens.len(), "tokenized filter expression");

        let ast = Parser::new(tokens)
            .with_max_depth(self.options.max_depth)
            .parse()?;
        validate(&ast)?;
        Ok(ast)
    }

    pub fn parse(&self, expression: &str) -> FilterResult {
        match self.try_parse(expression) {
            Ok(ast) => {
                debug!(expression, nodes = ast.node_count(), "parsed filter");
                FilterResult::ok(ast, expression)
            }
            Err(e) => {
                debug!(expression, stage = e.stage(), error = %e, "rejected filter");
                FilterResult::failure(&e, expression)
            }
        }
    }

    /// Parses the `filter` field of a view config. A config without one
    /// matches every note.
    pub fn parse_from_yaml(&self, config: &FilterConfig) -> FilterResult {
        match &config.filter {
            Some(filter) => self.parse(filter),
            None => {
                debug!("config has no filter, matching all notes");
                FilterResult::match_all()
            }
        }
    }

    /// Like [`FilterParser::parse_from_yaml`], starting from YAML text.
    pub fn parse_yaml_str(&self, yaml: &str) -> FilterResult {
        match FilterConfig::from_yaml_str(yaml) {
            Ok(config) => self.parse_from_yaml(&config),
            Err(e) => {
                debug!(stage = e.stage(), error = %e, "rejected filter config");
                FilterResult::failure(&e, "")
            }
        }
    }
}

/// Parses with default limits.
pub fn parse(expression: &str) -> FilterResult {
    FilterParser::default().parse(expression)
}

/// Parses a config's `filter` field with default limits.
pub fn parse_from_yaml(config: &FilterConfig) -> FilterResult {
    FilterParser::default().parse_from_yaml(config)
}
