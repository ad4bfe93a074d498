use crate::ast::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use tracing::warn;

/// Callee recognized as "read one value from the user".
const INPUT_CALLEE: &str = "prompt";

/// Callees recognized as "display a value". Matched against the
/// rendered callee after lower-casing, so the casing policy cannot hide
/// an output call.
const OUTPUT_CALLEES: [&str; 5] = [
    "alert",
    "console.log",
    "console.info",
    "console.error",
    "console.warning",
];

impl Render for Node {
    fn render(&self, config: &RenderConfig) -> String {
        match self {
            Node::Literal { value, raw } => render_literal(value, raw),
            Node::Identifier { name } => config.case.apply(name),
            Node::Logical {
                operator,
                left,
                right,
            } => format!(
                "{} {} {}",
                left.render(config),
                OperatorRenderer::logical(operator),
                right.render(config)
            ),
            Node::Binary {
                operator,
                left,
                right,
            } => format!(
                "{} {} {}",
                left.render(config),
                OperatorRenderer::binary(operator),
                right.render(config)
            ),
            Node::While { test, body } => format!(
                "WHILE {}\n{}\nENDWHILE",
                test.render(config),
                body.render(config)
            ),
            Node::If {
                test,
                consequent,
                alternate,
            } => render_conditional(test, consequent, alternate.as_deref(), false, config),
            Node::Block { body } => body
                .iter()
                .map(|stmt| {
                    IndentationHelper::indent_lines(&stmt.render(config), 1, config.indent_width)
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Node::ExpressionStatement { expression } => expression.render(config),
            Node::Update { operator, argument } => match operator.as_str() {
                "++" => format!("INCREMENT {}", argument.render(config)),
                "--" => format!("DECREMENT {}", argument.render(config)),
                other => {
                    warn!(operator = other, "unknown update operator");
                    unsupported(&format!("update operator {}", other))
                }
            },
            Node::Assignment {
                operator,
                left,
                right,
            } => {
                if matches!(**left, Node::Identifier { .. }) && is_input_call(right) {
                    format!("INPUT {}", left.render(config))
                } else {
                    // Assignment operators are kept verbatim (=, +=, ...).
                    format!(
                        "{} {} {}",
                        left.render(config),
                        operator,
                        right.render(config)
                    )
                }
            }
            Node::VariableDeclaration { declarations } => declarations
                .iter()
                .map(|decl| render_declarator(decl, config))
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Call { callee, arguments } => render_call(callee, arguments, config),
            Node::Member { object, property } => {
                format!("{}.{}", object.render(config), property.render(config))
            }
            Node::Template {
                quasis,
                expressions,
            } => render_template(quasis, expressions, config),
            Node::Unknown { kind, raw } => {
                warn!(kind = %kind, node = %raw, "unsupported syntax construct");
                unsupported(kind)
            }
        }
    }
}

/// Inline marker for a construct the renderer does not understand. The
/// document keeps rendering; the detail goes to the tracing channel.
fn unsupported(what: &str) -> String {
    format!("<<{} not supported>>", what)
}

fn render_literal(value: &serde_json::Value, raw: &str) -> String {
    match value {
        serde_json::Value::Bool(true) => "TRUE".to_string(),
        serde_json::Value::Bool(false) => "FALSE".to_string(),
        _ => raw.to_string(),
    }
}

/// Is this a call to the recognized input operation?
fn is_input_call(node: &Node) -> bool {
    match node {
        Node::Call { callee, .. } => {
            matches!(&**callee, Node::Identifier { name } if name == INPUT_CALLEE)
        }
        _ => false,
    }
}

/// Render one `IF` / `ELSE IF` chain as a single flat block.
///
/// `continuation` selects the header template: a conditional found as
/// another conditional's alternate renders `ELSE IF ... THEN` and emits
/// no terminator of its own. The terminator comes from the outermost
/// call only, so a chain of any depth closes with exactly one `ENDIF`.
fn render_conditional(
    test: &Node,
    consequent: &Node,
    alternate: Option<&Node>,
    continuation: bool,
    config: &RenderConfig,
) -> String {
    let keyword = if continuation { "ELSE IF" } else { "IF" };
    let mut output = format!(
        "{} {} THEN\n{}",
        keyword,
        test.render(config),
        consequent.render(config)
    );

    if let Some(alternate) = alternate {
        match alternate {
            Node::If {
                test,
                consequent,
                alternate,
            } => {
                output.push('\n');
                output.push_str(&render_conditional(
                    test,
                    consequent,
                    alternate.as_deref(),
                    true,
                    config,
                ));
            }
            other => {
                output.push_str("\nELSE\n");
                output.push_str(&other.render(config));
            }
        }
    }

    if !continuation {
        output.push_str("\nENDIF");
    }
    output
}

fn render_declarator(decl: &Declarator, config: &RenderConfig) -> String {
    match &decl.init {
        Some(init) if is_input_call(init) => format!("INPUT {}", decl.id.render(config)),
        Some(init) => format!("{} = {}", decl.id.render(config), init.render(config)),
        None => decl.id.render(config),
    }
}

fn render_call(callee: &Node, arguments: &[Node], config: &RenderConfig) -> String {
    let callee_text = callee.render(config);
    let args: Vec<String> = arguments.iter().map(|arg| arg.render(config)).collect();

    if OUTPUT_CALLEES.contains(&callee_text.to_lowercase().as_str()) {
        format!("PRINT {}", args.join(&config.arg_separator))
    } else {
        format!("{}({})", callee_text, args.join(", "))
    }
}

/// Fragments and embedded expressions in source order, joined with the
/// concatenation token. Empty fragments (adjacent interpolations, or a
/// template starting/ending on an expression) are skipped.
fn render_template(
    quasis: &[TemplateElement],
    expressions: &[Node],
    config: &RenderConfig,
) -> String {
    let mut parts = Vec::new();
    for (i, quasi) in quasis.iter().enumerate() {
        if !quasi.text().is_empty() {
            parts.push(format!("\"{}\"", quasi.text()));
        }
        if let Some(expression) = expressions.get(i) {
            parts.push(expression.render(config));
        }
    }
    parts.join(" + ")
}
