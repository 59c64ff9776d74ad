//! # Bases Filter Language - Abstract Syntax Tree
//!
//! This module defines the tokens and tree nodes of the filter language used
//! by Bases views to select notes by metadata, tags, folders and links.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Tree nodes (operators, calls, identifiers, literals)
//! - **[operators]** - Operator spellings and the whitelist the validator uses
//!
//! ## Quick Start
//!
//! ```text
//! taggedWith(file, "project") AND NOT status == "done"
//! ```
//!
//! Selects notes tagged `project` whose `status` property is not `"done"`.
//!
//! ## Precedence
//!
//! From loosest to tightest: `OR`, `AND`, `NOT`, comparison, primary.
//! Comparisons do not chain, so `a == b == c` is rejected.
//!
//! ## Examples
//!
//! ```text
//! title == "My Note"
//! (priority > 2 OR flagged) AND inFolder(file, "work")
//! name startsWith 'Meeting' && !archived
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{DataType, LiteralValue, Node};
pub use tokens::{Token, TokenKind, TokenValue};
