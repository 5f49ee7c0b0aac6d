//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod input;
pub mod workspace;

pub use config::Config;
pub use input::read_input;
pub use workspace::{DocumentEntry, FileSystemWorkspace, WorkspaceRepository};
