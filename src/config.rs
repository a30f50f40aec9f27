//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/landtree/landtree.toml`
//! 3. Local config: `<dir>/.landtree.toml` (usually the working directory)
//! 4. Environment variables: `LANDTREE_*` prefix
//!
//! Command-line options are applied on top by the CLI layer.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Output layout for rendered trees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// ` | | - ` indented lines
    #[default]
    Lines,
    /// Box-drawing tree
    Boxed,
}

impl RenderStyle {
    pub fn parse(s: &str) -> Result<Self, ApplicationError> {
        match s {
            "lines" => Ok(RenderStyle::Lines),
            "boxed" => Ok(RenderStyle::Boxed),
            other => Err(ApplicationError::Config {
                message: format!("unknown style '{}' (expected 'lines' or 'boxed')", other),
            }),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Lines => write!(f, "lines"),
            RenderStyle::Boxed => write!(f, "boxed"),
        }
    }
}

/// Raw settings for intermediate parsing (every field optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    pub companies_file: Option<String>,
    pub lands_file: Option<String>,
    pub mode: Option<String>,
    pub style: Option<RenderStyle>,
}

/// Unified configuration for landtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding both CSV files (default: ./data)
    pub data_dir: PathBuf,
    /// Company relations file name, relative to `data_dir`
    pub companies_file: String,
    /// Land ownership file name, relative to `data_dir`
    pub lands_file: String,
    /// Mode used when none is given on the command line
    pub mode: Option<String>,
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            companies_file: "company_relations.csv".into(),
            lands_file: "land_ownership.csv".into(),
            mode: None,
            style: RenderStyle::default(),
        }
    }
}

/// Get the XDG config directory for landtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "landtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("landtree.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".landtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    pub fn companies_path(&self) -> PathBuf {
        self.data_dir.join(&self.companies_file)
    }

    pub fn lands_path(&self) -> PathBuf {
        self.data_dir.join(&self.lands_file)
    }

    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_dir.to_string_lossy().as_ref());
        self.data_dir = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            companies_file: overlay
                .companies_file
                .clone()
                .unwrap_or_else(|| self.companies_file.clone()),
            lands_file: overlay
                .lands_file
                .clone()
                .unwrap_or_else(|| self.lands_file.clone()),
            mode: overlay.mode.clone().or_else(|| self.mode.clone()),
            style: overlay.style.unwrap_or(self.style),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory searched for `.landtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply LANDTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("LANDTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_dir") {
            settings.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("companies_file") {
            settings.companies_file = val;
        }
        if let Ok(val) = config.get_string("lands_file") {
            settings.lands_file = val;
        }
        if let Ok(val) = config.get_string("mode") {
            settings.mode = Some(val);
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = RenderStyle::parse(&val)?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# landtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/landtree/landtree.toml
#   Local:  ./.landtree.toml
#   Env:    LANDTREE_* environment variables
#   CLI:    --data-dir, --mode=..., --style=...

# Directory holding the CSV files
# data_dir = "data"

# File names inside data_dir
# companies_file = "company_relations.csv"
# lands_file = "land_ownership.csv"

# Default mode when --mode is not given: "expanded" or "from_root"
# mode = "from_root"

# Output layout: "lines" or "boxed"
# style = "lines"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
