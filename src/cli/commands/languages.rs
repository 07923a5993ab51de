//! languages command - List supported languages

use async_trait::async_trait;
use clap::{ArgMatches, Args, FromArgMatches, Subcommand};

use crate::engine::{ActionResult, Context, Operation};

#[derive(Args, Debug)]
pub struct LanguagesArgs {
    #[command(subcommand)]
    pub action: LanguagesAction,
}

#[derive(Subcommand, Debug)]
pub enum LanguagesAction {
    /// List all supported languages
    List,
}

/// The `languages` operation.
pub struct Languages;

#[async_trait]
impl Operation for Languages {
    fn name(&self) -> &'static str {
        "languages"
    }

    fn command(&self) -> clap::Command {
        LanguagesArgs::augment_args(clap::Command::new(self.name()))
            .about("Language management")
    }

    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
        let args = LanguagesArgs::from_arg_matches(matches)?;
        match args.action {
            LanguagesAction::List => {
                let listing = ctx.toolchain.languages(ctx).await?;
                ctx.console.print(listing.trim_end());
            }
        }
        Ok(())
    }
}
