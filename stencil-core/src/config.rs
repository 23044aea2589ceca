//! Project configuration (`stencil.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, Storage};

/// Default configuration file name, looked up at the project root.
pub const CONFIG_FILE: &str = "stencil.toml";

/// Parsed `stencil.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,
    /// Spaces per indentation level in emitted code; 0 means tabs.
    pub indent: u8,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "app".to_string(),
            indent: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub modules: PathBuf,
    pub services: PathBuf,
    pub components: PathBuf,
    pub models: PathBuf,
    pub scss: PathBuf,
    pub route_file: PathBuf,
    pub import_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            modules: "src/app/modules".into(),
            services: "src/app/service".into(),
            components: "src/client/app/components".into(),
            models: "src/client/app/cmn/models".into(),
            scss: "src/scss".into(),
            route_file: "src/app/config/route.ts".into(),
            import_file: "src/app/config/import.ts".into(),
        }
    }
}

impl Config {
    /// Load the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(storage: &dyn Storage, path: &Path) -> Result<Self> {
        if !storage.exists(path) {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = storage.read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse configuration text; `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
