//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ResumeSource`] - Path to a resume description and its derived outputs
//! - [`BuildOptions`] - Which build stages run
//!
//! # Examples
//!
//! ```
//! use yamlresume::core::types::ResumeSource;
//!
//! assert!(ResumeSource::has_resume_extension("resume.yml"));
//! assert!(ResumeSource::has_resume_extension("CV.JSON"));
//! assert!(!ResumeSource::has_resume_extension("resume.toml"));
//!
//! let source = ResumeSource::new("cv/resume.yaml");
//! assert_eq!(source.tex_path().to_str(), Some("cv/resume.tex"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions recognized as resume descriptions, compared case-insensitively.
pub const RESUME_EXTENSIONS: &[&str] = &["yml", "yaml", "json"];

/// Path to a resume description.
///
/// Construction never touches the filesystem; a missing file surfaces when
/// the toolchain reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResumeSource(PathBuf);

impl ResumeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Whether a name ends with `.yml`, `.yaml` or `.json`, ignoring case.
    ///
    /// Only the shape of the name is checked.
    pub fn has_resume_extension(name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((_, ext)) => RESUME_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known)),
            None => false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// The intermediate TeX document written next to the source.
    pub fn tex_path(&self) -> PathBuf {
        self.0.with_extension("tex")
    }

    /// The PDF produced from the TeX document.
    pub fn pdf_path(&self) -> PathBuf {
        self.0.with_extension("pdf")
    }
}

impl fmt::Display for ResumeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ResumeSource {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Stages of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Compile the TeX document to PDF
    pub pdf: bool,
    /// Validate the source against the resume schema first
    pub validate: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            pdf: true,
            validate: true,
        }
    }
}
