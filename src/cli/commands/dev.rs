//! cli::commands::dev
//!
//! Build a resume, then rebuild it whenever the source changes.
//!
//! # Design
//!
//! The source is polled at `dev.poll_interval_ms`. A change in modification
//! time or size triggers a rebuild. Build failures inside the loop are
//! reported and watching continues; Ctrl-C stops the loop successfully.

use std::time::SystemTime;

use async_trait::async_trait;
use clap::{ArgMatches, Args, FromArgMatches};

use super::build::{build_resume, BuildArgs};
use crate::core::types::{BuildOptions, ResumeSource};
use crate::engine::{ActionResult, Context, Operation};
use crate::toolchain::ToolchainError;

/// The `dev` operation.
pub struct Dev;

#[async_trait]
impl Operation for Dev {
    fn name(&self) -> &'static str {
        "dev"
    }

    fn command(&self) -> clap::Command {
        BuildArgs::augment_args(clap::Command::new(self.name()))
            .about("Build a resume and rebuild on every change")
    }

    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
        let args = BuildArgs::from_arg_matches(matches)?;
        watch(ctx, &ResumeSource::new(args.source.clone()), args.options()).await
    }
}

/// What the watcher compares between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

async fn stamp(source: &ResumeSource) -> Result<FileStamp, ToolchainError> {
    let metadata = tokio::fs::metadata(source.path())
        .await
        .map_err(|e| ToolchainError::io(source.path(), &e))?;
    Ok(FileStamp {
        modified: metadata.modified().ok(),
        len: metadata.len(),
    })
}

/// Run one build and report its failure without ending the loop.
async fn rebuild(ctx: &Context, source: &ResumeSource, options: BuildOptions) {
    if let Err(failure) = build_resume(ctx, source, options).await {
        ctx.console.error(failure.message());
    }
}

/// Rebuild if the source changed since `last`. Returns whether it rebuilt.
async fn poll_once(
    ctx: &Context,
    source: &ResumeSource,
    options: BuildOptions,
    last: &mut FileStamp,
) -> bool {
    match stamp(source).await {
        Ok(current) if current != *last => {
            tracing::info!(%source, "change detected, rebuilding");
            *last = current;
            rebuild(ctx, source, options).await;
            true
        }
        Ok(_) => false,
        Err(err) => {
            // Editors often replace files on save; try again next tick
            tracing::debug!(%err, "source unavailable");
            false
        }
    }
}

/// Build once, then rebuild on change until interrupted.
pub async fn watch(ctx: &Context, source: &ResumeSource, options: BuildOptions) -> ActionResult {
    let mut last = stamp(source).await?;
    rebuild(ctx, source, options).await;

    let interval = ctx.config.poll_interval();
    ctx.console
        .print(format!("Watching {} for changes (Ctrl-C to stop)", source));

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::debug!("interrupted, stopping watcher");
                return Ok(());
            }
            _ = tokio::time::sleep(interval) => {
                poll_once(ctx, source, options, &mut last).await;
            }
        }
    }
}
