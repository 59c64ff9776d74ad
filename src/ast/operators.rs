use crate::ast::TokenKind;

/// Canonical spelling of the equality operator.
pub const EQ: &str = "==";
pub const NOT_EQ: &str = "!=";
pub const GT: &str = ">";
pub const GT_EQ: &str = ">=";
pub const LT: &str = "<";
pub const LT_EQ: &str = "<=";
pub const CONTAINS: &str = "contains";
pub const STARTS_WITH: &str = "startsWith";

/// Canonical spelling of logical conjunction in a `BinaryOp` node.
pub const AND: &str = "AND";
/// Canonical spelling of logical disjunction in a `BinaryOp` node.
pub const OR: &str = "OR";

/// Keyword spelling of negation in a `UnaryOp` node.
pub const NOT: &str = "NOT";
/// Symbolic spelling of negation, accepted wherever `NOT` is.
pub const BANG: &str = "!";

/// Comparison operators, in the order they are listed in help text.
pub const COMPARISON_OPERATORS: [&str; 8] =
    [EQ, NOT_EQ, GT, LT, GT_EQ, LT_EQ, CONTAINS, STARTS_WITH];

/// Maps a comparison token to the operator text stored in the tree.
///
/// `=` and `==` both lex as [`TokenKind::Equals`] and both map to `"=="`.
pub fn comparison_operator(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Equals => Some(EQ),
        TokenKind::NotEquals => Some(NOT_EQ),
        TokenKind::Greater => Some(GT),
        TokenKind::GreaterEqual => Some(GT_EQ),
        TokenKind::Less => Some(LT),
        TokenKind::LessEqual => Some(LT_EQ),
        TokenKind::Contains => Some(CONTAINS),
        TokenKind::StartsWith => Some(STARTS_WITH),
        _ => None,
    }
}

pub fn is_binary_operator(op: &str) -> bool {
    op == AND || op == OR || COMPARISON_OPERATORS.contains(&op)
}

pub fn is_unary_operator(op: &str) -> bool {
    op == NOT || op == BANG
}
