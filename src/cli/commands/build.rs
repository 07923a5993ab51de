//! cli::commands::build
//!
//! Build a resume into a TeX document and, optionally, a PDF.
//!
//! # Stages
//!
//! 1. Check the source is readable
//! 2. Validate against the resume schema (skipped with `--no-validate`)
//! 3. Render `<source>.tex` next to the source
//! 4. Compile `<source>.pdf` (skipped with `--no-pdf`)
//!
//! The bare-file shorthand (`yamlresume resume.yml`) runs the same
//! [`build_resume`] action.
//!
//! # Example
//!
//! ```bash
//! yamlresume build resume.yml
//! yamlresume build resume.yml --no-pdf
//! yamlresume build resume.json --no-validate
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use clap::{ArgMatches, Args, FromArgMatches};

use crate::core::types::{BuildOptions, ResumeSource};
use crate::engine::{ActionResult, Context, Operation};
use crate::toolchain::ToolchainError;

/// Options shared by `build` and `dev`.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Resume file to build (.yml, .yaml or .json)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Only generate the TeX file, without compiling a PDF
    #[arg(long = "no-pdf")]
    pub no_pdf: bool,

    /// Skip resume schema validation
    #[arg(long = "no-validate")]
    pub no_validate: bool,
}

impl BuildArgs {
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            pdf: !self.no_pdf,
            validate: !self.no_validate,
        }
    }
}

/// The `build` operation.
pub struct Build;

#[async_trait]
impl Operation for Build {
    fn name(&self) -> &'static str {
        "build"
    }

    fn command(&self) -> clap::Command {
        BuildArgs::augment_args(clap::Command::new(self.name()))
            .about("Build a resume to LaTeX and PDF")
            .after_help(
                "\
EXAMPLES:
    yamlresume build resume.yml
    yamlresume build resume.yml --no-pdf      # stop after resume.tex
    yamlresume build resume.yml --no-validate",
            )
    }

    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
        let args = BuildArgs::from_arg_matches(matches)?;
        build_resume(ctx, &ResumeSource::new(args.source.clone()), args.options()).await
    }
}

/// Build `source` with the given stages.
pub async fn build_resume(
    ctx: &Context,
    source: &ResumeSource,
    options: BuildOptions,
) -> ActionResult {
    tracing::debug!(%source, pdf = options.pdf, validate = options.validate, "building resume");

    tokio::fs::metadata(source.path())
        .await
        .map_err(|e| ToolchainError::io(source.path(), &e))?;

    if options.validate {
        ctx.toolchain.validate(ctx, source.path()).await?;
        tracing::info!(%source, "resume is valid");
    } else {
        tracing::debug!("skipping schema validation");
    }

    let tex = source.tex_path();
    ctx.toolchain.render(ctx, source.path(), &tex).await?;
    ctx.console.success(format!("Generated {}", tex.display()));

    if !options.pdf {
        tracing::debug!("skipping PDF compilation");
        return Ok(());
    }

    ctx.toolchain.compile(ctx, &tex).await?;
    ctx.console.success(format!("Generated {}", source.pdf_path().display()));

    Ok(())
}
