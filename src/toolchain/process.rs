//! toolchain::process
//!
//! Toolchain backed by external executables.
//!
//! # Invocation
//!
//! ```text
//! <renderer> new <target> [--template <id>] [--verbose]
//! <renderer> validate <source> [--verbose]
//! <renderer> render <source> --output <tex> [--verbose]
//! <renderer> languages [--verbose]
//! <renderer> templates [--verbose]
//! <latex> <latex_args...> <tex file name>      (run in the TeX file's directory)
//! ```
//!
//! Children inherit stderr so their diagnostics reach the user unchanged.

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use super::traits::{Toolchain, ToolchainError};
use crate::core::config::Config;
use crate::engine::Context;

/// Toolchain that shells out to the configured renderer and LaTeX engine.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    renderer: String,
    latex: String,
    latex_args: Vec<String>,
}

impl ProcessToolchain {
    pub fn new(
        renderer: impl Into<String>,
        latex: impl Into<String>,
        latex_args: Vec<String>,
    ) -> Self {
        Self {
            renderer: renderer.into(),
            latex: latex.into(),
            latex_args,
        }
    }

    /// Create a toolchain from the resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.renderer(), config.latex(), config.latex_args())
    }

    /// Build a renderer command for `verb`.
    fn renderer_command(&self, ctx: &Context, verb: &str) -> Command {
        let mut cmd = Command::new(&self.renderer);
        cmd.arg(verb);
        if ctx.verbose {
            cmd.arg("--verbose");
        }
        cmd
    }

    /// Run a command to completion, inheriting all streams.
    async fn run(&self, program: &str, mut cmd: Command) -> Result<(), ToolchainError> {
        tracing::debug!(?cmd, "running collaborator");
        let status = cmd
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| spawn_error(program, &e))?;
        check_status(program, status)
    }

    /// Run a command to completion and return its stdout.
    async fn capture(&self, program: &str, mut cmd: Command) -> Result<String, ToolchainError> {
        tracing::debug!(?cmd, "running collaborator");
        let output = cmd
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| spawn_error(program, &e))?;
        check_status(program, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn spawn_error(program: &str, err: &std::io::Error) -> ToolchainError {
    ToolchainError::Spawn {
        program: program.to_string(),
        message: err.to_string(),
        errno: err.raw_os_error(),
    }
}

fn check_status(program: &str, status: ExitStatus) -> Result<(), ToolchainError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ToolchainError::Exited {
            program: program.to_string(),
            code,
        }),
        None => Err(ToolchainError::Terminated {
            program: program.to_string(),
        }),
    }
}

#[async_trait]
impl Toolchain for ProcessToolchain {
    async fn scaffold(
        &self,
        ctx: &Context,
        target: &Path,
        template: Option<&str>,
    ) -> Result<(), ToolchainError> {
        let mut cmd = self.renderer_command(ctx, "new");
        cmd.arg(target);
        if let Some(template) = template {
            cmd.arg("--template").arg(template);
        }
        self.run(&self.renderer, cmd).await
    }

    async fn validate(&self, ctx: &Context, source: &Path) -> Result<(), ToolchainError> {
        let mut cmd = self.renderer_command(ctx, "validate");
        cmd.arg(source);
        self.run(&self.renderer, cmd).await
    }

    async fn render(
        &self,
        ctx: &Context,
        source: &Path,
        output: &Path,
    ) -> Result<(), ToolchainError> {
        let mut cmd = self.renderer_command(ctx, "render");
        cmd.arg(source).arg("--output").arg(output);
        self.run(&self.renderer, cmd).await
    }

    async fn compile(&self, _ctx: &Context, tex: &Path) -> Result<(), ToolchainError> {
        let file_name = tex.file_name().ok_or_else(|| ToolchainError::Io {
            path: tex.to_path_buf(),
            message: "not a file".to_string(),
            errno: None,
        })?;

        let mut cmd = Command::new(&self.latex);
        cmd.args(&self.latex_args).arg(file_name);
        if let Some(dir) = tex.parent().filter(|d| !d.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }
        self.run(&self.latex, cmd).await
    }

    async fn languages(&self, ctx: &Context) -> Result<String, ToolchainError> {
        let cmd = self.renderer_command(ctx, "languages");
        self.capture(&self.renderer, cmd).await
    }

    async fn templates(&self, ctx: &Context) -> Result<String, ToolchainError> {
        let cmd = self.renderer_command(ctx, "templates");
        self.capture(&self.renderer, cmd).await
    }
}
