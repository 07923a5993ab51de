//! templates command - List available templates

use async_trait::async_trait;
use clap::{ArgMatches, Args, FromArgMatches, Subcommand};

use crate::engine::{ActionResult, Context, Operation};

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub action: TemplatesAction,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesAction {
    /// List all available templates
    List,
}

/// The `templates` operation.
pub struct Templates;

#[async_trait]
impl Operation for Templates {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn command(&self) -> clap::Command {
        TemplatesArgs::augment_args(clap::Command::new(self.name()))
            .about("Template management")
    }

    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
        let args = TemplatesArgs::from_arg_matches(matches)?;
        match args.action {
            TemplatesAction::List => {
                let listing = ctx.toolchain.templates(ctx).await?;
                ctx.console.print(listing.trim_end());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::toolchain::mock::{MockCall, MockToolchain};
    use crate::toolchain::ToolchainError;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_queries_toolchain() {
        let toolchain = MockToolchain::new();
        let ctx = Context::new(true, Config::default(), Arc::new(toolchain.clone()));
        let matches = Templates
            .command()
            .try_get_matches_from(["templates", "list"])
            .unwrap();

        Templates.run(&ctx, &matches).await.unwrap();
        assert_eq!(toolchain.calls(), vec![MockCall::Templates]);
        assert_eq!(toolchain.verbose_flags(), vec![true]);
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let toolchain = MockToolchain::new().fail_on(
            "templates",
            ToolchainError::Terminated {
                program: "yamlresume-core".to_string(),
            },
        );
        let ctx = Context::new(false, Config::default(), Arc::new(toolchain));
        let matches = Templates
            .command()
            .try_get_matches_from(["templates", "list"])
            .unwrap();

        let failure = Templates.run(&ctx, &matches).await.unwrap_err();
        assert_eq!(failure.code(), None);
    }
}
