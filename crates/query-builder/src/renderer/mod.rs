//! Defines the core rendering trait and context for converting AST to DQL.

pub mod predicate;
pub mod select;

/// A trait for any AST node that can be rendered into a DQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the DQL text while an AST is rendered.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the final DQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Renders a single node into a fresh string.
    pub fn render_to_string(node: &dyn Render) -> String {
        let mut renderer = Renderer::new();
        node.render(&mut renderer);
        renderer.finish()
    }
}
