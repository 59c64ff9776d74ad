//! Static description of the filter language, for help panels and
//! autocompletion. The function table is also where the validator looks up
//! arities.

use serde::Serialize;

use crate::ast::operators;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionInfo {
    pub name: &'static str,
    pub arity: usize,
    pub signature: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorInfo {
    pub symbol: &'static str,
    /// Other accepted spellings
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Everything `syntax_info` exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxInfo {
    pub operators: Vec<OperatorInfo>,
    pub functions: Vec<FunctionInfo>,
    pub examples: Vec<&'static str>,
}

pub static FUNCTIONS: [FunctionInfo; 4] = [
    FunctionInfo {
        name: "taggedWith",
        arity: 2,
        signature: "taggedWith(file, tag)",
        description: "Note has the given tag",
    },
    FunctionInfo {
        name: "inFolder",
        arity: 2,
        signature: "inFolder(file, path)",
        description: "Note lives in the given folder",
    },
    FunctionInfo {
        name: "hasLink",
        arity: 2,
        signature: "hasLink(file, target)",
        description: "Note contains a link to the target",
    },
    FunctionInfo {
        name: "linksTo",
        arity: 2,
        signature: "linksTo(file, target)",
        description: "Note links to the target note",
    },
];

pub static OPERATORS: [OperatorInfo; 11] = [
    OperatorInfo {
        symbol: operators::EQ,
        aliases: &["="],
        description: "Equal to",
    },
    OperatorInfo {
        symbol: operators::NOT_EQ,
        aliases: &[],
        description: "Not equal to",
    },
    OperatorInfo {
        symbol: operators::GT,
        aliases: &[],
        description: "Greater than",
    },
    OperatorInfo {
        symbol: operators::LT,
        aliases: &[],
        description: "Less than",
    },
    OperatorInfo {
        symbol: operators::GT_EQ,
        aliases: &[],
        description: "Greater than or equal to",
    },
    OperatorInfo {
        symbol: operators::LT_EQ,
        aliases: &[],
        description: "Less than or equal to",
    },
    OperatorInfo {
        symbol: operators::CONTAINS,
        aliases: &[],
        description: "Text or list contains the value",
    },
    OperatorInfo {
        symbol: operators::STARTS_WITH,
        aliases: &[],
        description: "Text starts with the value",
    },
    OperatorInfo {
        symbol: operators::AND,
        aliases: &["&&"],
        description: "Both conditions hold",
    },
    OperatorInfo {
        symbol: operators::OR,
        aliases: &["||"],
        description: "Either condition holds",
    },
    OperatorInfo {
        symbol: operators::NOT,
        aliases: &[operators::BANG],
        description: "Condition does not hold",
    },
];

pub static EXAMPLES: [&str; 5] = [
    r#"title == "My Note""#,
    r#"taggedWith(file, "project") AND inFolder(file, "work")"#,
    r#"priority >= 3 OR status == "urgent""#,
    r#"NOT hasLink(file, "Archive")"#,
    r#"(title contains "meeting" OR title startsWith "1:1") AND NOT done"#,
];

pub fn function(name: &str) -> Option<&'static FunctionInfo> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

pub fn syntax_info() -> SyntaxInfo {
    SyntaxInfo {
        operators: OPERATORS.to_vec(),
        functions: FUNCTIONS.to_vec(),
        examples: EXAMPLES.to_vec(),
    }
}
