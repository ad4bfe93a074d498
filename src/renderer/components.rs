/// Helper for translating operators into pseudocode tokens
pub struct OperatorRenderer;

impl OperatorRenderer {
    /// `&&` and `||` are spelled out; anything else passes through.
    pub fn logical(operator: &str) -> &str {
        match operator {
            "&&" => "AND",
            "||" => "OR",
            other => other,
        }
    }

    /// Loose and strict comparison collapse to one token each; the
    /// coercing/non-coercing distinction is deliberately dropped.
    pub fn binary(operator: &str) -> &str {
        match operator {
            "==" | "===" => "=",
            "!=" | "!==" => "<>",
            other => other,
        }
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    /// Prefix every line of `text` with `level * width` spaces.
    ///
    /// Level 0 is the identity; the number of lines never changes.
    pub fn indent_lines(text: &str, level: usize, width: usize) -> String {
        let prefix = " ".repeat(level * width);
        text.split('\n')
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
