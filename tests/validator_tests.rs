// tests/validator_tests.rs

use bases_filter::ast::{DataType, LiteralValue, Node};
use bases_filter::error::ValidationError;
use bases_filter::validator::validate;
use bases_filter::{parse_tokens, tokenize};

fn parsed(input: &str) -> Node {
    parse_tokens(tokenize(input).unwrap()).unwrap()
}

// ============================================================================
// Accepted trees
// ============================================================================

#[test]
fn test_valid_expressions() {
    let inputs = vec![
        "title == 'x'",
        "a OR b AND NOT c",
        "priority >= 3 && !archived || flagged",
        "name startsWith 'Meet' AND tags contains 'x'",
        "taggedWith(file, 'project')",
        "inFolder(file, 'work') OR hasLink(file, 'Home') OR linksTo(file, 'Index')",
        "taggedWith(file, a OR b)",
        "(((a)))",
        "true",
    ];

    for input in inputs {
        assert_eq!(validate(&parsed(input)), Ok(()), "Failed for input: {}", input);
    }
}

#[test]
fn test_validation_is_repeatable() {
    let ast = parsed("taggedWith(file, 'p') AND NOT done == true");
    let before = ast.clone();
    assert_eq!(validate(&ast), Ok(()));
    assert_eq!(validate(&ast), Ok(()));
    assert_eq!(ast, before);
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_arity_too_few() {
    assert_eq!(
        validate(&parsed("taggedWith(file)")),
        Err(ValidationError::ArityMismatch {
            name: "taggedWith".to_string(),
            expected: 2,
            got: 1,
        })
    );
}

#[test]
fn test_arity_too_many() {
    assert_eq!(
        validate(&parsed("linksTo(file, 'a', 'b')")),
        Err(ValidationError::ArityMismatch {
            name: "linksTo".to_string(),
            expected: 2,
            got: 3,
        })
    );
}

#[test]
fn test_arity_message() {
    let msg = validate(&parsed("inFolder()")).unwrap_err().to_string();
    assert_eq!(msg, "function 'inFolder' requires 2 arguments, got 0");
}

#[test]
fn test_unknown_function() {
    assert_eq!(
        validate(&parsed("deleteNote(file, 'x')")),
        Err(ValidationError::UnknownFunction {
            name: "deleteNote".to_string()
        })
    );
}

#[test]
fn test_function_names_are_case_sensitive() {
    assert!(matches!(
        validate(&parsed("TaggedWith(file, 'x')")),
        Err(ValidationError::UnknownFunction { .. })
    ));
}

#[test]
fn test_error_inside_nested_operand() {
    assert!(matches!(
        validate(&parsed("a AND NOT (b OR hasLink(file))")),
        Err(ValidationError::ArityMismatch { got: 1, .. })
    ));
}

// ============================================================================
// Hand-built and deserialized trees
// ============================================================================

#[test]
fn test_unsupported_binary_operator() {
    let ast = Node::binary("+", Node::number(1.0), Node::number(2.0));
    assert_eq!(
        validate(&ast),
        Err(ValidationError::UnsupportedOperator {
            node: "BinaryOp",
            operator: "+".to_string(),
        })
    );
}

#[test]
fn test_logical_symbols_are_not_node_operators() {
    // The parser always stores AND/OR; the symbolic spellings stay in the lexer
    let ast = Node::binary("&&", Node::identifier("a"), Node::identifier("b"));
    assert!(matches!(
        validate(&ast),
        Err(ValidationError::UnsupportedOperator { .. })
    ));
}

#[test]
fn test_unsupported_unary_operator() {
    let ast = Node::unary("-", Node::number(1.0));
    assert_eq!(
        validate(&ast),
        Err(ValidationError::UnsupportedOperator {
            node: "UnaryOp",
            operator: "-".to_string(),
        })
    );
}

#[test]
fn test_empty_identifier() {
    assert!(matches!(
        validate(&Node::identifier("")),
        Err(ValidationError::Malformed {
            node: "Identifier",
            ..
        })
    ));
}

#[test]
fn test_literal_type_mismatch() {
    let ast = Node::Literal {
        value: LiteralValue::String("5".to_string()),
        data_type: DataType::Number,
    };
    assert_eq!(
        validate(&ast),
        Err(ValidationError::LiteralTypeMismatch {
            declared: DataType::Number,
            actual: DataType::String,
        })
    );
}

#[test]
fn test_non_finite_number() {
    assert!(matches!(
        validate(&Node::number(f64::NAN)),
        Err(ValidationError::Malformed { node: "Literal", .. })
    ));
}

#[test]
fn test_deserialized_tree() {
    let ast: Node = serde_json::from_str(
        r#"{
            "type": "BinaryOp",
            "operator": "startsWith",
            "left": {"type": "Identifier", "name": "title"},
            "right": {"type": "Literal", "value": "Daily", "dataType": "string"}
        }"#,
    )
    .unwrap();
    assert_eq!(validate(&ast), Ok(()));

    let ast: Node = serde_json::from_str(
        r#"{"type": "FunctionCall", "name": "hasLink", "arguments": []}"#,
    )
    .unwrap();
    assert!(matches!(
        validate(&ast),
        Err(ValidationError::ArityMismatch { got: 0, .. })
    ));
}
