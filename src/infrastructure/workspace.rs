//! File system workspace

use crate::error::{AnnotextError, Result};
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "ANNOTEXT_ROOT";

/// A document file found inside a workspace
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocumentEntry {
    /// Path relative to the workspace root, `/`-separated
    pub path: String,
}

impl DocumentEntry {
    pub fn new(path: String) -> Self {
        DocumentEntry { path }
    }

    pub fn is_markdown(&self) -> bool {
        let lower = self.path.to_ascii_lowercase();
        lower.ends_with(".md") || lower.ends_with(".markdown")
    }
}

/// Abstract workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .annotext/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .annotext/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .annotext directory exists
    fn is_initialized(&self) -> bool;

    /// Create .annotext directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover the workspace root.
    /// ANNOTEXT_ROOT wins when set, otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            }
            return Err(AnnotextError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'annotext init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                WORKSPACE_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(AnnotextError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Read a document by its workspace-relative path
    pub fn read_document(&self, entry: &DocumentEntry) -> Result<String> {
        fs::read_to_string(self.root.join(&entry.path)).map_err(AnnotextError::Io)
    }

    /// All documents the config accepts, sorted by path.
    /// Hidden directories (including .annotext) are skipped.
    pub fn list_documents(&self, config: &Config) -> Vec<DocumentEntry> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut documents: Vec<DocumentEntry> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| config.accepts_file(name))
            })
            .filter_map(|entry| {
                let rel = entry.path().strip_prefix(&self.root).ok()?;
                Self::normalize_relative_path(rel).map(DocumentEntry::new)
            })
            .collect();

        documents.sort();
        documents
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

impl WorkspaceRepository for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(AnnotextError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }
}
