use anyhow::{Context, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::ast::types::*;

/// Decode a serialized syntax tree (esprima JSON) into a `Program`.
///
/// Malformed JSON or a known node kind with broken fields is a boundary
/// error; an *unknown* node kind is not — it decodes to `Node::Unknown`
/// so the renderer can degrade that one construct instead of failing the
/// whole document.
pub fn parse_program(input: &str) -> Result<Program> {
    serde_json::from_str(input).context("failed to decode syntax tree document")
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        node_from_value(value).map_err(D::Error::custom)
    }
}

// Field carriers for the kind-specific payloads. Decoding dispatches on
// the "type" tag first, then pulls the matching fields out of the raw
// value; nested nodes recurse through the `Deserialize` impl above.

#[derive(Deserialize)]
struct LiteralFields {
    #[serde(default)]
    value: Value,
    raw: String,
}

#[derive(Deserialize)]
struct IdentifierFields {
    name: String,
}

#[derive(Deserialize)]
struct BinaryFields {
    operator: String,
    left: Node,
    right: Node,
}

#[derive(Deserialize)]
struct WhileFields {
    test: Node,
    body: Node,
}

#[derive(Deserialize)]
struct IfFields {
    test: Node,
    consequent: Node,
    #[serde(default)]
    alternate: Option<Node>,
}

#[derive(Deserialize)]
struct BlockFields {
    body: Vec<Node>,
}

#[derive(Deserialize)]
struct ExpressionStatementFields {
    expression: Node,
}

#[derive(Deserialize)]
struct UpdateFields {
    operator: String,
    argument: Node,
}

#[derive(Deserialize)]
struct VariableDeclarationFields {
    declarations: Vec<Declarator>,
}

#[derive(Deserialize)]
struct CallFields {
    callee: Node,
    arguments: Vec<Node>,
}

#[derive(Deserialize)]
struct MemberFields {
    object: Node,
    property: Node,
}

#[derive(Deserialize)]
struct TemplateFields {
    quasis: Vec<TemplateElement>,
    expressions: Vec<Node>,
}

fn node_from_value(value: Value) -> Result<Node, String> {
    let Some(kind) = value.get("type").and_then(Value::as_str) else {
        return Err("syntax node is missing its \"type\" tag".to_string());
    };
    let kind = kind.to_string();

    fn fields<T: serde::de::DeserializeOwned>(kind: &str, value: Value) -> Result<T, String> {
        serde_json::from_value(value).map_err(|err| format!("invalid {kind} node: {err}"))
    }

    match kind.as_str() {
        "Literal" => {
            let f: LiteralFields = fields(&kind, value)?;
            Ok(Node::Literal {
                value: f.value,
                raw: f.raw,
            })
        }
        "Identifier" => {
            let f: IdentifierFields = fields(&kind, value)?;
            Ok(Node::Identifier { name: f.name })
        }
        "LogicalExpression" => {
            let f: BinaryFields = fields(&kind, value)?;
            Ok(Node::Logical {
                operator: f.operator,
                left: Box::new(f.left),
                right: Box::new(f.right),
            })
        }
        "BinaryExpression" => {
            let f: BinaryFields = fields(&kind, value)?;
            Ok(Node::Binary {
                operator: f.operator,
                left: Box::new(f.left),
                right: Box::new(f.right),
            })
        }
        "WhileStatement" => {
            let f: WhileFields = fields(&kind, value)?;
            Ok(Node::While {
                test: Box::new(f.test),
                body: Box::new(f.body),
            })
        }
        "IfStatement" => {
            let f: IfFields = fields(&kind, value)?;
            Ok(Node::If {
                test: Box::new(f.test),
                consequent: Box::new(f.consequent),
                alternate: f.alternate.map(Box::new),
            })
        }
        "BlockStatement" => {
            let f: BlockFields = fields(&kind, value)?;
            Ok(Node::Block { body: f.body })
        }
        "ExpressionStatement" => {
            let f: ExpressionStatementFields = fields(&kind, value)?;
            Ok(Node::ExpressionStatement {
                expression: Box::new(f.expression),
            })
        }
        "UpdateExpression" => {
            let f: UpdateFields = fields(&kind, value)?;
            Ok(Node::Update {
                operator: f.operator,
                argument: Box::new(f.argument),
            })
        }
        "AssignmentExpression" => {
            let f: BinaryFields = fields(&kind, value)?;
            Ok(Node::Assignment {
                operator: f.operator,
                left: Box::new(f.left),
                right: Box::new(f.right),
            })
        }
        "VariableDeclaration" => {
            let f: VariableDeclarationFields = fields(&kind, value)?;
            Ok(Node::VariableDeclaration {
                declarations: f.declarations,
            })
        }
        "CallExpression" => {
            let f: CallFields = fields(&kind, value)?;
            Ok(Node::Call {
                callee: Box::new(f.callee),
                arguments: f.arguments,
            })
        }
        "MemberExpression" => {
            let f: MemberFields = fields(&kind, value)?;
            Ok(Node::Member {
                object: Box::new(f.object),
                property: Box::new(f.property),
            })
        }
        "TemplateLiteral" => {
            let f: TemplateFields = fields(&kind, value)?;
            Ok(Node::Template {
                quasis: f.quasis,
                expressions: f.expressions,
            })
        }
        _ => Ok(Node::Unknown { kind, raw: value }),
    }
}
