//! Tag system

pub mod normalizer;

// Re-export main functions
pub use normalizer::{is_arabic, normalize, normalize_all, to_display};
