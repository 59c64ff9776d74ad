use std::fmt;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Comparison
    /// Equality, spelled `=` or `==`
    Equals,
    /// Inequality (`!=`)
    NotEquals,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,

    // Logical
    /// Logical AND, spelled `AND` or `&&`
    ///
    /// # Examples
    /// ```text
    /// status == "done" AND priority > 2
    /// status == "done" && priority > 2
    /// ```
    And,
    /// Logical OR, spelled `OR` or `||`
    Or,
    /// Logical negation, spelled `NOT` or `!`
    ///
    /// # Examples
    /// ```text
    /// NOT archived
    /// !archived
    /// ```
    Not,

    // String predicates
    /// Substring test (`contains`)
    Contains,
    /// Prefix test (`startsWith`)
    StartsWith,

    // Literals
    /// `true` or `false`
    Boolean,
    /// Quoted string, single or double quotes
    String,
    /// Digits with an optional fractional part
    Number,

    /// Property or function name
    ///
    /// Starts with a letter, followed by letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// title
    /// file
    /// due_date
    /// ```
    Identifier,

    // Delimiters
    /// Left parenthesis for grouping or function calls
    LeftParen,
    /// Right parenthesis
    RightParen,
    /// Comma between function arguments
    Comma,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Contains => "CONTAINS",
            TokenKind::StartsWith => "STARTS_WITH",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Payload carried by a [`Token`].
///
/// Operators and punctuation carry the text they were spelled with, string
/// literals carry their decoded contents, identifiers their name.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Only used by [`TokenKind::Eof`]
    None,
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{:?}", s),
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Boolean(b) => write!(f, "{}", b),
            TokenValue::None => f.write_str("end of input"),
        }
    }
}

/// A classified lexical unit with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, offset: usize) -> Self {
        Token {
            kind,
            value,
            offset,
        }
    }

    pub fn text(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Token::new(kind, TokenValue::Text(text.into()), offset)
    }

    pub fn eof(offset: usize) -> Self {
        Token::new(TokenKind::Eof, TokenValue::None, offset)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
