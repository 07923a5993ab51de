//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! yamlresume has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Overrides for the current directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$YAMLRESUME_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/yamlresume/config.toml`
//! 3. `~/.yamlresume/config.toml`
//!
//! # Project Config Location
//!
//! `.yamlresume.toml` in the directory yamlresume runs from.
//!
//! # Example
//!
//! ```no_run
//! use yamlresume::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("."))).unwrap();
//! println!("LaTeX engine: {}", config.latex());
//! ```

pub mod schema;

pub use schema::{ConfigFile, DevSection, ToolchainSection};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Default renderer executable.
pub const DEFAULT_RENDERER: &str = "yamlresume-core";

/// Default LaTeX engine.
pub const DEFAULT_LATEX: &str = "xelatex";

/// Default arguments for the LaTeX engine.
pub const DEFAULT_LATEX_ARGS: &[&str] = &["-halt-on-error", "-interaction=nonstopmode"];

/// Default dev-loop poll interval.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".yamlresume.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: project over global over defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigFile,
    /// Project configuration (if present)
    pub project: Option<ConfigFile>,
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads `.yamlresume.toml` from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be read or parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_from(Self::find_global(), project_dir)
    }

    /// Load configuration from an explicit global file path.
    pub fn load_from(
        global_path: Option<PathBuf>,
        project_dir: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let global = match &global_path {
            Some(path) => Self::read_config_file(path)?,
            None => ConfigFile::default(),
        };

        let project_path = project_dir
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .filter(|path| path.exists());
        let project = match &project_path {
            Some(path) => Some(Self::read_config_file(path)?),
            None => None,
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        tracing::debug!(
            global = ?global_path,
            project = ?project_path,
            "loaded configuration"
        );

        Ok(Config {
            global,
            project,
            global_path,
            project_path,
        })
    }

    /// Locate the global config file, if one exists.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("YAMLRESUME_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("yamlresume/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".yamlresume/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the global file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path of the project file that was loaded, if any.
    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    fn toolchain_value<T>(&self, get: impl Fn(&ToolchainSection) -> Option<T>) -> Option<T> {
        self.project
            .as_ref()
            .and_then(|p| p.toolchain.as_ref())
            .and_then(&get)
            .or_else(|| self.global.toolchain.as_ref().and_then(&get))
    }

    /// Renderer executable.
    ///
    /// Defaults to `yamlresume-core`.
    pub fn renderer(&self) -> String {
        self.toolchain_value(|t| t.renderer.clone())
            .unwrap_or_else(|| DEFAULT_RENDERER.to_string())
    }

    /// LaTeX engine executable.
    ///
    /// Defaults to `xelatex`.
    pub fn latex(&self) -> String {
        self.toolchain_value(|t| t.latex.clone())
            .unwrap_or_else(|| DEFAULT_LATEX.to_string())
    }

    /// Arguments passed to the LaTeX engine.
    pub fn latex_args(&self) -> Vec<String> {
        self.toolchain_value(|t| t.latex_args.clone())
            .unwrap_or_else(|| DEFAULT_LATEX_ARGS.iter().map(|s| s.to_string()).collect())
    }

    /// Dev-loop poll interval.
    ///
    /// Defaults to 500ms.
    pub fn poll_interval(&self) -> Duration {
        let ms = self
            .project
            .as_ref()
            .and_then(|p| p.dev.as_ref())
            .and_then(|d| d.poll_interval_ms)
            .or_else(|| self.global.dev.as_ref().and_then(|d| d.poll_interval_ms))
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}
