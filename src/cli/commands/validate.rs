//! validate command - Check a resume against the schema

use std::path::PathBuf;

use async_trait::async_trait;
use clap::{ArgMatches, Args, FromArgMatches};

use crate::core::types::ResumeSource;
use crate::engine::{ActionResult, Context, Operation};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Resume file to validate
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

/// The `validate` operation.
pub struct Validate;

#[async_trait]
impl Operation for Validate {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn command(&self) -> clap::Command {
        ValidateArgs::augment_args(clap::Command::new(self.name()))
            .about("Validate a resume against the schema")
    }

    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
        let args = ValidateArgs::from_arg_matches(matches)?;
        let source = ResumeSource::new(args.source);

        ctx.toolchain.validate(ctx, source.path()).await?;
        ctx.console.success(format!("{} is valid", source));
        Ok(())
    }
}
