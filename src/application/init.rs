//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path with default config.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::default();
    workspace.save_config(&config)?;

    info!(path = %path.display(), "initialized workspace");
    Ok(config)
}
