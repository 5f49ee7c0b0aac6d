//! Configuration management

use crate::domain::text::render::{
    DEFAULT_PROFILE_ROUTE, DEFAULT_TAG_ROUTE, TAG_PLACEHOLDER, USERNAME_PLACEHOLDER,
};
use crate::domain::LinkRoutes;
use crate::error::{AnnotextError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the workspace marker directory
pub const WORKSPACE_DIR: &str = ".annotext";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Route template for hashtag links, containing `{tag}`
    #[serde(default = "default_tag_route")]
    pub tag_route: String,

    /// Route template for mention links, containing `{username}`
    #[serde(default = "default_profile_route")]
    pub profile_route: String,

    /// File extensions scanned by `index` (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    pub created: DateTime<Utc>,
}

fn default_tag_route() -> String {
    DEFAULT_TAG_ROUTE.to_string()
}

fn default_profile_route() -> String {
    DEFAULT_PROFILE_ROUTE.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "txt".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_route: default_tag_route(),
            profile_route: default_profile_route(),
            extensions: default_extensions(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .annotext/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AnnotextError::NotWorkspace(path.to_path_buf())
            } else {
                AnnotextError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AnnotextError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .annotext/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Routes used when rendering links
    pub fn routes(&self) -> LinkRoutes {
        LinkRoutes::new(self.tag_route.clone(), self.profile_route.clone())
    }

    /// Whether a file name has one of the configured extensions
    pub fn accepts_file(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// Check that route templates carry their placeholders
    pub fn validate(&self) -> Result<()> {
        if !self.tag_route.contains(TAG_PLACEHOLDER) {
            return Err(AnnotextError::Config(format!(
                "tag_route must contain {}: '{}'",
                TAG_PLACEHOLDER, self.tag_route
            )));
        }
        if !self.profile_route.contains(USERNAME_PLACEHOLDER) {
            return Err(AnnotextError::Config(format!(
                "profile_route must contain {}: '{}'",
                USERNAME_PLACEHOLDER, self.profile_route
            )));
        }
        Ok(())
    }
}
