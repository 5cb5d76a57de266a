//! The output formats: [PlainRenderer] for plain text and [TexRenderer] for TeX.

mod plain_renderer;
pub use plain_renderer::PlainRenderer;

mod tex_renderer;
pub use tex_renderer::TexRenderer;
