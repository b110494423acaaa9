use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StencilError};
use crate::project::MANIFEST_FILE;
use crate::template::{BuiltinStore, DirectoryStore, TemplateStore};

/// User-level configuration loaded from `~/.config/stencil/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// File marking the project root.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Directory holding `<schematic>/<name>.tera` files that replace the
    /// built-in templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    #[serde(default)]
    pub defaults: GenerateDefaults,
}

/// Defaults for the `generate` flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDefaults {
    #[serde(default = "default_true")]
    pub style: bool,
    #[serde(default = "default_true")]
    pub format: bool,
    #[serde(default)]
    pub test: bool,
}

fn default_manifest() -> String {
    MANIFEST_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        Self {
            style: true,
            format: true,
            test: false,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            templates_dir: None,
            defaults: GenerateDefaults::default(),
        }
    }
}

impl UserConfig {
    pub fn template_store(&self) -> Box<dyn TemplateStore> {
        match &self.templates_dir {
            Some(dir) => {
                debug!("using templates from {}", dir.display());
                Box::new(DirectoryStore::new(dir))
            }
            None => Box::new(BuiltinStore),
        }
    }
}

/// Get the path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stencil").join("config.toml"))
}

/// Load user configuration from the XDG config directory, falling back to
/// defaults when there is no config file.
pub fn load_user_config() -> Result<UserConfig> {
    match config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => Ok(UserConfig::default()),
    }
}

pub fn load_config_file(path: &Path) -> Result<UserConfig> {
    debug!("loading config from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| StencilError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| StencilError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}
