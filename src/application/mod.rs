//! Application layer - Use cases and orchestration

pub mod annotate;
pub mod index;
pub mod init;
pub mod manage_config;
pub mod normalize_tags;

pub use annotate::AnnotateService;
pub use index::{IndexReport, IndexService};
pub use manage_config::ConfigService;
pub use normalize_tags::{display_tags, normalize_tags};
