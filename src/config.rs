//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/routeroot/routeroot.toml`
//! 3. Local config: `<project_dir>/.routeroot.toml`
//! 4. Environment variables: `ROUTEROOT_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How rendered frames are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML-like markup, outlets transparent
    #[default]
    Markup,
    /// Structural tree, outlets visible
    Tree,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markup => f.write_str("markup"),
            OutputFormat::Tree => f.write_str("tree"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markup" => Ok(OutputFormat::Markup),
            "tree" => Ok(OutputFormat::Tree),
            other => Err(ApplicationError::Config {
                message: format!("unknown output format: {}", other),
            }),
        }
    }
}

/// Error boundary composed around the root.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoundarySettings {
    /// Catch failed render passes instead of aborting
    pub enabled: bool,
    /// Text shown in place of a failed pass (nothing when unset)
    pub fallback: Option<String>,
}

/// Raw boundary settings; `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawBoundarySettings {
    pub enabled: Option<bool>,
    pub fallback: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub routes_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub boundary: RawBoundarySettings,
}

/// Unified configuration for routeroot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Route file, relative paths resolve against the project directory
    pub routes_file: PathBuf,
    /// Output format for rendered frames
    pub format: OutputFormat,
    pub boundary: BoundarySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            routes_file: PathBuf::from("routes.toml"),
            format: OutputFormat::default(),
            boundary: BoundarySettings::default(),
        }
    }
}

/// Get the XDG config directory for routeroot.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "routeroot").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("routeroot.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".routeroot.toml")
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

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string, leaving it as is on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            routes_file: overlay
                .routes_file
                .clone()
                .unwrap_or_else(|| self.routes_file.clone()),
            format: overlay.format.unwrap_or(self.format),
            boundary: BoundarySettings {
                enabled: overlay.boundary.enabled.unwrap_or(self.boundary.enabled),
                fallback: overlay
                    .boundary
                    .fallback
                    .clone()
                    .or_else(|| self.boundary.fallback.clone()),
            },
        }
    }

    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.routes_file.to_string_lossy().as_ref());
        self.routes_file = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory for local config
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), project_dir)
    }

    /// Same as [`Settings::load`] with an explicit global config location.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(project) = project_dir {
            let local_path = local_config_path(project);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply ROUTEROOT_* environment variables as explicit overrides.
    ///
    /// Nested keys use `__`: `ROUTEROOT_BOUNDARY__ENABLED=true`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ROUTEROOT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("routes_file") {
            settings.routes_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_bool("boundary.enabled") {
            settings.boundary.enabled = val;
        }
        if let Ok(val) = config.get_string("boundary.fallback") {
            settings.boundary.fallback = Some(val);
        }

        Ok(settings)
    }

    /// Render as TOML, as shown by `config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }

    /// Template printed by `config template`.
    pub fn template() -> &'static str {
        r#"# routeroot configuration

# Route file, relative to the project directory
# routes_file = "routes.toml"

# Output format: "markup" or "tree"
# format = "markup"

[boundary]
# Show fallback output instead of failing a render pass
# enabled = false
# fallback = "Something went wrong"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.routes_file, PathBuf::from("routes.toml"));
        assert_eq!(settings.format, OutputFormat::Markup);
        assert!(!settings.boundary.enabled);
    }

    #[test]
    fn test_merge_keeps_unspecified_values() {
        let base = Settings::default();
        let overlay = RawSettings {
            format: Some(OutputFormat::Tree),
            ..RawSettings::default()
        };
        let merged = base.merge_with(&overlay);
        assert_eq!(merged.format, OutputFormat::Tree);
        assert_eq!(merged.routes_file, base.routes_file);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TREE".parse::<OutputFormat>().unwrap(), OutputFormat::Tree);
        assert!("json".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_template_parses() {
        let raw: RawSettings = toml::from_str(Settings::template()).unwrap();
        assert!(raw.routes_file.is_none());
    }
}
