pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod validator;

pub use ast::{DataType, LiteralValue, Node, Token, TokenKind, TokenValue};
pub use config::{FilterConfig, FilterOptions};
pub use error::{FilterError, LexError, ParseError, ValidationError};
pub use filter::{FilterParser, FilterResult, parse, parse_from_yaml};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse_tokens};
pub use syntax::{FunctionInfo, OperatorInfo, SyntaxInfo, syntax_info};
pub use validator::validate;
