//! Help text for the `syntax` command

use std::fmt::Write;

use crate::SyntaxInfo;

/// Renders syntax info as plain text for a terminal
pub fn render_syntax_help(info: &SyntaxInfo) -> String {
    let mut out = String::from("BASES FILTER SYNTAX\n\nOPERATORS\n\n");

    for op in &info.operators {
        let aliases = if op.aliases.is_empty() {
            String::new()
        } else {
            format!(" (also {})", op.aliases.join(", "))
        };
        let _ = writeln!(out, "  {:<12}{}{}", op.symbol, op.description, aliases);
    }

    out.push_str("\nFUNCTIONS\n\n");
    for f in &info.functions {
        let _ = writeln!(out, "  {:<26}{}", f.signature, f.description);
    }

    out.push_str("\nEXAMPLES\n\n");
    for example in &info.examples {
        let _ = writeln!(out, "  {}", example);
    }
    out
}
