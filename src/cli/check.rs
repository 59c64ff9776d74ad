//! Check filter expressions and view configs

use super::CliError;
use crate::{FilterOptions, FilterParser, FilterResult};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter expression to check
    pub expression: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only report whether the filter is valid
    pub syntax_only: bool,
    /// Parser limits
    pub limits: FilterOptions,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Filter parsed and validated
    SyntaxValid,
    /// Full parse result as JSON text, pretty-printed if requested
    Success(String),
}

fn render(result: FilterResult, options: &CheckOptions) -> Result<CheckResult, CliError> {
    if !result.success {
        return Err(CliError::Filter(result.error.unwrap_or_default()));
    }
    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    let json = if options.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(CheckResult::Success(json))
}

/// Execute a check of a single filter expression
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = options.expression.as_deref().ok_or(CliError::NoInput)?;
    let result = FilterParser::new(options.limits).parse(expression);
    render(result, options)
}

/// Execute a check of the `filter` field of a YAML view config
pub fn execute_yaml(yaml: &str, options: &CheckOptions) -> Result<CheckResult, CliError> {
    let result = FilterParser::new(options.limits).parse_yaml_str(yaml);
    render(result, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_expression_is_no_input() {
        let err = execute_check(&CheckOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::NoInput));
    }

    #[test]
    fn syntax_only_reports_valid() {
        let options = CheckOptions {
            expression: Some("a OR b".to_string()),
            syntax_only: true,
            ..Default::default()
        };
        assert!(matches!(
            execute_check(&options).unwrap(),
            CheckResult::SyntaxValid
        ));
    }

    #[test]
    fn yaml_without_filter_matches_all() {
        let options = CheckOptions::default();
        match execute_yaml("view: table\n", &options).unwrap() {
            CheckResult::Success(text) => {
                let json: serde_json::Value = serde_json::from_str(&text).unwrap();
                assert_eq!(json["success"], true);
                assert!(json["ast"].is_null());
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn pretty_flag_controls_layout() {
        let mut options = CheckOptions {
            expression: Some("a == 1".to_string()),
            ..Default::default()
        };
        let compact = match execute_check(&options).unwrap() {
            CheckResult::Success(text) => text,
            other => panic!("expected Success, got {:?}", other),
        };
        assert!(!compact.contains('\n'));

        options.pretty = true;
        let pretty = match execute_check(&options).unwrap() {
            CheckResult::Success(text) => text,
            other => panic!("expected Success, got {:?}", other),
        };
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
            serde_json::from_str::<serde_json::Value>(&compact).unwrap()
        );
    }

    #[test]
    fn failure_carries_message() {
        let options = CheckOptions {
            expression: Some("a & b".to_string()),
            ..Default::default()
        };
        let err = execute_check(&options).unwrap_err();
        assert!(err.to_string().contains("'&'"));
    }
}
