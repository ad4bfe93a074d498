use serde::Deserialize;
use serde_json::Value;

/// A whole parsed program as produced by the external parser.
///
/// Only `body` matters for rendering; the parser's extra bookkeeping
/// fields (`sourceType`, spans, ...) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

/// One `id = init` binding of a variable declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Declarator {
    pub id: Node,
    /// `None` for a bare declaration (`let x;`).
    #[serde(default)]
    pub init: Option<Node>,
}

/// A literal fragment of a template string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateElement {
    pub value: TemplateElementValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateElementValue {
    pub raw: String,
    #[serde(default)]
    pub cooked: Option<String>,
}

impl TemplateElement {
    /// The fragment text, preferring the parser's unescaped form.
    pub fn text(&self) -> &str {
        self.value.cooked.as_deref().unwrap_or(&self.value.raw)
    }
}

/// One node of the syntax tree, tagged with its kind.
///
/// The variant set is closed; anything else the parser emits decodes to
/// `Unknown`, which keeps the kind tag and the raw JSON for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal {
        value: Value,
        raw: String,
    },
    Identifier {
        name: String,
    },
    Logical {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    Binary {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    While {
        test: Box<Node>,
        body: Box<Node>,
    },
    If {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    Block {
        body: Vec<Node>,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    Update {
        operator: String,
        argument: Box<Node>,
    },
    Assignment {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    VariableDeclaration {
        declarations: Vec<Declarator>,
    },
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    Member {
        object: Box<Node>,
        property: Box<Node>,
    },
    Template {
        quasis: Vec<TemplateElement>,
        expressions: Vec<Node>,
    },
    Unknown {
        kind: String,
        raw: Value,
    },
}
