//! toolchain::traits
//!
//! Toolchain trait definition for the external collaborators that do the
//! actual document work.
//!
//! # Design
//!
//! The `Toolchain` trait is async because every collaborator is a child
//! process whose completion is awaited. Operations never inspect resume
//! content themselves; they sequence toolchain calls and report failures.
//!
//! # Example
//!
//! ```ignore
//! use yamlresume::toolchain::Toolchain;
//!
//! async fn check(toolchain: &dyn Toolchain, ctx: &Context) -> Result<(), ToolchainError> {
//!     toolchain.validate(ctx, Path::new("resume.yml")).await
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::engine::Context;

/// Errors from toolchain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolchainError {
    /// The collaborator executable could not be started.
    #[error("failed to run '{program}': {message}")]
    Spawn {
        program: String,
        message: String,
        /// OS error number, when the platform reported one
        errno: Option<i32>,
    },

    /// The collaborator ran and exited unsuccessfully.
    #[error("'{program}' exited with status {code}")]
    Exited { program: String, code: i32 },

    /// The collaborator was terminated without an exit status.
    #[error("'{program}' was terminated before completing")]
    Terminated { program: String },

    /// A file the operation depends on could not be accessed.
    #[error("{}: {message}", path.display())]
    Io {
        path: PathBuf,
        message: String,
        errno: Option<i32>,
    },
}

impl ToolchainError {
    /// The numeric code this failure exposes, if any.
    ///
    /// Spawn and I/O failures expose the OS error number; an unsuccessful
    /// exit exposes the child's exit code.
    pub fn code(&self) -> Option<i32> {
        match self {
            ToolchainError::Spawn { errno, .. } => *errno,
            ToolchainError::Exited { code, .. } => Some(*code),
            ToolchainError::Terminated { .. } => None,
            ToolchainError::Io { errno, .. } => *errno,
        }
    }

    /// Build an I/O failure for `path`.
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        ToolchainError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
            errno: err.raw_os_error(),
        }
    }
}

/// The external collaborators behind every operation.
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Create a starter resume at `target`, optionally from a named template.
    async fn scaffold(
        &self,
        ctx: &Context,
        target: &Path,
        template: Option<&str>,
    ) -> Result<(), ToolchainError>;

    /// Validate `source` against the resume schema.
    async fn validate(&self, ctx: &Context, source: &Path) -> Result<(), ToolchainError>;

    /// Render `source` into the intermediate TeX document at `output`.
    async fn render(&self, ctx: &Context, source: &Path, output: &Path)
        -> Result<(), ToolchainError>;

    /// Compile a TeX document into PDF next to it.
    async fn compile(&self, ctx: &Context, tex: &Path) -> Result<(), ToolchainError>;

    /// Human-readable listing of supported languages.
    async fn languages(&self, ctx: &Context) -> Result<String, ToolchainError>;

    /// Human-readable listing of available templates.
    async fn templates(&self, ctx: &Context) -> Result<String, ToolchainError>;
}
