use thiserror::Error;

use crate::ast::{DataType, TokenKind, TokenValue};

/// Tokenizer failure. Offsets are byte offsets into the expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at position {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unexpected '{ch}' at position {offset} (did you mean '{ch}{ch}'?)")]
    IncompleteOperator { ch: char, offset: usize },

    #[error("unterminated string starting with {quote} at position {offset}")]
    UnterminatedString { quote: char, offset: usize },

    #[error("invalid number '{text}' at position {offset}")]
    InvalidNumber { text: String, offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedChar { offset, .. }
            | LexError::IncompleteOperator { offset, .. }
            | LexError::UnterminatedString { offset, .. }
            | LexError::InvalidNumber { offset, .. } => *offset,
        }
    }
}

/// Grammar violation found while building the tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected {expected}, got {kind} {value} at position {offset}")]
    UnexpectedToken {
        expected: &'static str,
        kind: TokenKind,
        value: TokenValue,
        offset: usize,
    },

    #[error("unexpected {kind} {value} at position {offset} after complete expression")]
    TrailingInput {
        kind: TokenKind,
        value: TokenValue,
        offset: usize,
    },

    #[error("expression nested deeper than {max} levels at position {offset}")]
    TooDeep { max: usize, offset: usize },
}

/// A tree that is well formed but not acceptable to the evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unsupported operator '{operator}' in {node}")]
    UnsupportedOperator {
        node: &'static str,
        operator: String,
    },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("function '{name}' requires {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("malformed {node}: {reason}")]
    Malformed {
        node: &'static str,
        reason: String,
    },

    #[error("literal declared as {declared:?} holds a {actual:?} value")]
    LiteralTypeMismatch { declared: DataType, actual: DataType },
}

/// Any failure of the filter pipeline, as seen by the facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("filter expression must be a non-empty string")]
    Empty,

    #[error("filter expression is {len} bytes, maximum is {max}")]
    TooLong { len: usize, max: usize },

    #[error("syntax error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid filter: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid filter config: {0}")]
    Config(String),
}

impl FilterError {
    /// Pipeline stage that produced the error, for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            FilterError::Empty | FilterError::TooLong { .. } => "input",
            FilterError::Lex(_) => "lexer",
            FilterError::Parse(_) => "parser",
            FilterError::Validation(_) => "validator",
            FilterError::Config(_) => "config",
        }
    }
}
