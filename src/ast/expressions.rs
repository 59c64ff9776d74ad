use serde::{Deserialize, Serialize};

/// Abstract Syntax Tree node for a parsed filter expression.
///
/// Serializes with a `type` tag, which is the shape the note evaluator reads:
///
/// ```text
/// {"type":"BinaryOp","operator":"==","left":{"type":"Identifier","name":"title"},
///  "right":{"type":"Literal","value":"My Note","dataType":"string"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Comparison or logical connective
    ///
    /// # Examples
    /// ```text
    /// priority >= 2
    /// done AND flagged
    /// ```
    BinaryOp {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Prefix negation (`NOT x` or `!x`)
    UnaryOp { operator: String, operand: Box<Node> },

    /// Call to one of the built-in note predicates
    ///
    /// # Example
    /// ```text
    /// taggedWith(file, "project")
    /// ```
    FunctionCall { name: String, arguments: Vec<Node> },

    /// Note property, resolved by the evaluator
    Identifier { name: String },

    /// Typed constant
    #[serde(rename_all = "camelCase")]
    Literal {
        value: LiteralValue,
        data_type: DataType,
    },
}

/// Value held by a [`Node::Literal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl LiteralValue {
    pub fn data_type(&self) -> DataType {
        match self {
            LiteralValue::Boolean(_) => DataType::Boolean,
            LiteralValue::Number(_) => DataType::Number,
            LiteralValue::String(_) => DataType::String,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
}

impl Node {
    pub fn binary(operator: impl Into<String>, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: impl Into<String>, operand: Node) -> Self {
        Node::UnaryOp {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn literal(value: LiteralValue) -> Self {
        Node::Literal {
            data_type: value.data_type(),
            value,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::literal(LiteralValue::String(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Node::literal(LiteralValue::Number(value))
    }

    pub fn boolean(value: bool) -> Self {
        Node::literal(LiteralValue::Boolean(value))
    }

    /// Variant name, as written in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::BinaryOp { .. } => "BinaryOp",
            Node::UnaryOp { .. } => "UnaryOp",
            Node::FunctionCall { .. } => "FunctionCall",
            Node::Identifier { .. } => "Identifier",
            Node::Literal { .. } => "Literal",
        }
    }

    /// Length of the longest root-to-leaf path; a leaf has height 1.
    pub fn height(&self) -> usize {
        match self {
            Node::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
            Node::UnaryOp { operand, .. } => 1 + operand.height(),
            Node::FunctionCall { arguments, .. } => {
                1 + arguments.iter().map(Node::height).max().unwrap_or(0)
            }
            Node::Identifier { .. } | Node::Literal { .. } => 1,
        }
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        match self {
            Node::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Node::UnaryOp { operand, .. } => 1 + operand.node_count(),
            Node::FunctionCall { arguments, .. } => {
                1 + arguments.iter().map(Node::node_count).sum::<usize>()
            }
            Node::Identifier { .. } | Node::Literal { .. } => 1,
        }
    }
}
