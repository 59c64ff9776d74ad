use crate::{
    ast::{
        LiteralValue, Node,
        operators::{is_binary_operator, is_unary_operator},
    },
    error::ValidationError,
    syntax,
};

/// Checks that every node in the tree uses a supported operator or function
/// with the right number of children.
///
/// Takes the tree by reference and never changes it, so validating an already
/// validated tree again gives the same answer.
pub fn validate(node: &Node) -> Result<(), ValidationError> {
    match node {
        Node::BinaryOp {
            operator,
            left,
            right,
        } => {
            if !is_binary_operator(operator) {
                return Err(ValidationError::UnsupportedOperator {
                    node: node.kind(),
                    operator: operator.clone(),
                });
            }
            validate(left)?;
            validate(right)
        }
        Node::UnaryOp { operator, operand } => {
            if !is_unary_operator(operator) {
                return Err(ValidationError::UnsupportedOperator {
                    node: node.kind(),
                    operator: operator.clone(),
                });
            }
            validate(operand)
        }
        Node::FunctionCall { name, arguments } => {
            let function = syntax::function(name)
                .ok_or_else(|| ValidationError::UnknownFunction { name: name.clone() })?;

            if arguments.len() != function.arity {
                return Err(ValidationError::ArityMismatch {
                    name: name.clone(),
                    expected: function.arity,
                    got: arguments.len(),
                });
            }
            arguments.iter().try_for_each(validate)
        }
        Node::Identifier { name } => {
            if name.is_empty() {
                return Err(ValidationError::Malformed {
                    node: node.kind(),
                    reason: "empty name".to_string(),
                });
            }
            Ok(())
        }
        Node::Literal { value, data_type } => {
            let actual = value.data_type();
            if actual != *data_type {
                return Err(ValidationError::LiteralTypeMismatch {
                    declared: *data_type,
                    actual,
                });
            }
            match value {
                LiteralValue::Number(n) if !n.is_finite() => {
                    Err(ValidationError::Malformed {
                        node: node.kind(),
                        reason: format!("non-finite number {}", n),
                    })
                }
                _ => Ok(()),
            }
        }
    }
}

#[test]
fn test_nested_call_arguments_are_validated() {
    let ast = Node::call(
        "taggedWith",
        vec![
            Node::identifier("file"),
            Node::binary("~=", Node::identifier("a"), Node::string("b")),
        ],
    );
    assert_eq!(
        validate(&ast),
        Err(ValidationError::UnsupportedOperator {
            node: "BinaryOp",
            operator: "~=".to_string(),
        })
    );
}

#[test]
fn test_bang_is_accepted_as_not() {
    let ast = Node::unary("!", Node::identifier("archived"));
    assert_eq!(validate(&ast), Ok(()));
}
