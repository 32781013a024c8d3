//! Configuration handling for promptforge builds.
//! This module provides the declarative build configuration model and its
//! YAML loading routine.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "promptforge.yaml";

/// Top-level build configuration.
///
/// Loaded once at startup and passed by reference to every component, so
/// tests can construct synthetic configurations without touching the
/// filesystem.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Directory holding small reusable include templates
    pub templates_dir: PathBuf,
    /// Directory holding the canonical base content folders
    pub base_dir: PathBuf,
    /// Directory holding target-specific overrides, additions and
    /// passthrough items
    pub targets_dir: PathBuf,
    /// Output directory the build writes into
    pub dist_dir: PathBuf,

    /// Dotted extensions of files eligible for template rendering
    #[serde(default = "default_template_extensions")]
    pub template_extensions: Vec<String>,

    /// Target name to target settings, in declaration order
    pub targets: IndexMap<String, TargetConfig>,

    /// Folder names copied verbatim into the output root, for every build
    #[serde(default)]
    pub passthrough_folders: Vec<String>,

    /// File names copied verbatim into the output root, for every build
    #[serde(default)]
    pub passthrough_files: Vec<String>,
}

fn default_template_extensions() -> Vec<String> {
    vec![".md".to_string()]
}

/// Per-target build settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    /// Base folder name to output folder name; absent entries keep the
    /// base folder name. Mappings must be injective within a target or
    /// override checks for the colliding folders are indistinguishable.
    #[serde(default)]
    pub folder_mappings: IndexMap<String, String>,

    /// Base folder name to replacement suffix for `.md` files
    /// (e.g. ".agent.md" turns `foo.md` into `foo.agent.md`)
    #[serde(default)]
    pub file_suffix_rules: IndexMap<String, String>,

    /// Base folders this target consumes
    #[serde(default)]
    pub include_base_folders: Vec<String>,
}

impl BuildConfig {
    /// Returns true if the file's extension is in the configured
    /// template-extensions list.
    pub fn is_template_eligible(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self
                .template_extensions
                .iter()
                .any(|eligible| eligible.trim_start_matches('.') == ext),
            None => false,
        }
    }
}

/// Loads the build configuration from a YAML file.
///
/// # Arguments
/// * `config_path` - Path to the configuration file
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist or does not parse
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<BuildConfig> {
    let config_path = config_path.as_ref();
    if !config_path.exists() || !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "configuration file not found: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = fs::read_to_string(config_path).map_err(Error::IoError)?;

    serde_yaml::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("invalid configuration: {}", e)))
}
