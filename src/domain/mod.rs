//! Domain layer - Tag normalization and text annotation

pub mod tags;
pub mod text;

pub use text::{ExtractionResult, LinkRoutes, RenderFormat, Segment};
