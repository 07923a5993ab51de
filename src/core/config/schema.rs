//! core::config::schema
//!
//! Configuration file schema.
//!
//! The global file and the project file share one shape; every field is
//! optional so the project file can override individual values.
//!
//! # Validation
//!
//! Values are validated after parsing: executable names must be non-empty
//! and the dev poll interval must be positive.

use serde::Deserialize;

use super::ConfigError;

/// One configuration file (global or project scope).
///
/// # Example
///
/// ```toml
/// [toolchain]
/// renderer = "yamlresume-core"
/// latex = "xelatex"
/// latex_args = ["-halt-on-error", "-interaction=nonstopmode"]
///
/// [dev]
/// poll_interval_ms = 500
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// External collaborator executables
    pub toolchain: Option<ToolchainSection>,

    /// Settings for the `dev` watch loop
    pub dev: Option<DevSection>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(toolchain) = &self.toolchain {
            for (key, value) in [
                ("toolchain.renderer", toolchain.renderer.as_deref()),
                ("toolchain.latex", toolchain.latex.as_deref()),
            ] {
                if matches!(value, Some(v) if v.trim().is_empty()) {
                    return Err(ConfigError::InvalidValue(format!(
                        "{} must not be empty",
                        key
                    )));
                }
            }
        }

        if let Some(dev) = &self.dev {
            if dev.poll_interval_ms == Some(0) {
                return Err(ConfigError::InvalidValue(
                    "dev.poll_interval_ms must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// `[toolchain]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainSection {
    /// Executable handling validation, rendering, scaffolding and listings
    pub renderer: Option<String>,

    /// Executable compiling TeX to PDF
    pub latex: Option<String>,

    /// Arguments passed to the LaTeX engine before the file name
    pub latex_args: Option<Vec<String>>,
}

/// `[dev]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DevSection {
    /// How often the source file is checked for changes
    pub poll_interval_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            [toolchain]
            renderer = "render-tool"
            latex = "lualatex"
            latex_args = ["-halt-on-error"]

            [dev]
            poll_interval_ms = 250
            "#,
        )
        .unwrap();

        let toolchain = file.toolchain.as_ref().unwrap();
        assert_eq!(toolchain.renderer.as_deref(), Some("render-tool"));
        assert_eq!(toolchain.latex.as_deref(), Some("lualatex"));
        assert_eq!(
            toolchain.latex_args.as_deref(),
            Some(&["-halt-on-error".to_string()][..])
        );
        assert_eq!(file.dev.unwrap().poll_interval_ms, Some(250));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str(
            r#"
            [toolchain]
            compiler = "xelatex"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_executable_is_invalid() {
        let file = ConfigFile {
            toolchain: Some(ToolchainSection {
                latex: Some("  ".to_string()),
                ..Default::default()
            }),
            dev: None,
        };
        assert!(matches!(file.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn zero_poll_interval_is_invalid() {
        let file = ConfigFile {
            toolchain: None,
            dev: Some(DevSection {
                poll_interval_ms: Some(0),
            }),
        };
        assert!(file.validate().is_err());
    }

    #[test]
    fn empty_file_is_valid() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file, ConfigFile::default());
        assert!(file.validate().is_ok());
    }
}
