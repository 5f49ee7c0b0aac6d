//! Config management use case

use crate::error::{AnnotextError, Result};
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};

/// Keys accepted by `annotext config`
pub const CONFIG_KEYS: &[&str] = &["tag_route", "profile_route", "extensions", "created"];

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "tag_route" => Ok(config.tag_route),
            "profile_route" => Ok(config.profile_route),
            "extensions" => Ok(config.extensions.join(",")),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "tag_route" => config.tag_route = value.to_string(),
            "profile_route" => config.profile_route = value.to_string(),
            "extensions" => {
                config.extensions = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_string())
                    .filter(|ext| !ext.is_empty())
                    .collect();
            }
            "created" => {
                return Err(AnnotextError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        config.validate()?;
        self.workspace.save_config(&config)
    }

    /// Load the full config
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn unknown_key(key: &str) -> AnnotextError {
    AnnotextError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        init(temp.path()).unwrap();
        ConfigService::new(FileSystemWorkspace::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("tag_route").unwrap(), "/explore?tag={tag}");
        assert_eq!(service.get("extensions").unwrap(), "md,txt");
    }

    #[test]
    fn test_set_and_get_route() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("profile_route", "/u/{username}").unwrap();
        assert_eq!(service.get("profile_route").unwrap(), "/u/{username}");
    }

    #[test]
    fn test_set_extensions_strips_dots() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("extensions", ".md, .markdown,,txt").unwrap();
        assert_eq!(service.list().unwrap().extensions, vec!["md", "markdown", "txt"]);
    }

    #[test]
    fn test_set_route_without_placeholder_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("tag_route", "/explore").is_err());
        assert_eq!(service.get("tag_route").unwrap(), "/explore?tag={tag}");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("created", "2025-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let err = service.get("editor").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }
}
