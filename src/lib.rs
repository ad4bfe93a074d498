//! Renders a parsed program's syntax tree as structured English
//! pseudocode, suitable for teaching or documentation.
//!
//! The input is the serialized syntax tree produced by an external
//! parser (esprima JSON); parsing source text is out of scope here.
//! [`parse_program`] decodes the tree, [`ProgramRenderer`] turns it
//! into a `BEGIN`/`END`-wrapped text document.

pub mod ast;
pub mod renderer;

pub use ast::*;
pub use renderer::*;
