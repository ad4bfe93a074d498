use crate::ast::Program;
use crate::renderer::components::IndentationHelper;
use crate::renderer::traits::*;

/// Top-level driver: renders a whole program between `BEGIN` and `END`.
pub struct ProgramRenderer;

impl ProgramRenderer {
    pub fn render(&self, program: &Program, config: &RenderConfig) -> String {
        let body: Vec<String> = program
            .body
            .iter()
            .map(|stmt| {
                IndentationHelper::indent_lines(&stmt.render(config), 1, config.indent_width)
            })
            .collect();

        format!("BEGIN\n{}\nEND", body.join("\n"))
    }
}
