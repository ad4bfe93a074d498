use std::str::FromStr;

/// Casing applied to identifier names (and only to identifier names —
/// keywords, operators and literal text are never touched).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CasePolicy {
    /// Pass names through unchanged.
    #[default]
    None,
    Lowercase,
    Uppercase,
    /// First character upper-cased, remainder lower-cased.
    Capitalize,
}

impl CasePolicy {
    pub fn apply(&self, name: &str) -> String {
        match self {
            CasePolicy::None => name.to_string(),
            CasePolicy::Lowercase => name.to_lowercase(),
            CasePolicy::Uppercase => name.to_uppercase(),
            CasePolicy::Capitalize => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => {
                        let rest = chars.as_str().to_lowercase();
                        let mut cased = String::with_capacity(name.len());
                        cased.extend(first.to_uppercase());
                        cased.push_str(&rest);
                        cased
                    }
                    None => String::new(),
                }
            }
        }
    }
}

impl FromStr for CasePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CasePolicy::None),
            "lowercase" => Ok(CasePolicy::Lowercase),
            "uppercase" => Ok(CasePolicy::Uppercase),
            "capitalize" => Ok(CasePolicy::Capitalize),
            other => Err(anyhow::anyhow!(
                "unknown casing policy '{other}' (expected none, lowercase, uppercase or capitalize)"
            )),
        }
    }
}

/// Configuration for rendering operations, read once and threaded
/// through every render call.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    pub case: CasePolicy,
    /// Token joining the arguments of an output (`PRINT`) line.
    pub arg_separator: String,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            indent_width: 4,
            case: CasePolicy::None,
            arg_separator: " + ".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for syntax tree nodes.
pub trait Render {
    fn render(&self, config: &RenderConfig) -> String;
}
