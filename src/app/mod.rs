// Rendering collaborators: consume query state, never fetch on their own.

pub mod sections;
pub mod text_renderer;

pub use sections::{
    retry_failed_sections, section_view, star_glyphs, Retry, SectionView, ServiceIcon,
};
pub use text_renderer::{render_page, render_sections, SectionRenderer, TextRenderer};
