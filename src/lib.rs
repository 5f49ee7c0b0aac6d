//! annotext - Text annotation toolkit
//!
//! Normalizes user-typed tags into storage slugs and annotates free text with
//! hashtag, mention and link segments ready for rendering.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::tags::{normalize, to_display};
pub use domain::text::{extract, segment, ExtractionResult, Segment};
pub use error::AnnotextError;
