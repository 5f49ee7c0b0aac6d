//! Text annotation

pub mod annotator;
pub mod markdown;
pub mod render;

// Re-export main types
pub use annotator::{extract, segment, segments, ExtractionResult, Segment, Segments};
pub use markdown::extract_markdown;
pub use render::{render, render_html, render_markdown, LinkRoutes, RenderFormat};
